use crate::{
    errors::{AppError, RequestError},
    repositories::patient_conditions,
    state::AppStateV2,
    structs::{
        api::ApiResponse,
        patient_conditions::{NewPatientCondition, PatientCondition, UpdatePatientCondition},
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

pub fn new() -> Router<AppStateV2> {
    Router::new()
        .route("/", post(create_condition))
        .route("/patient/{patient_id}", get(get_conditions_by_patient))
        .route(
            "/{condition_id}",
            get(get_condition_by_id)
                .patch(update_condition)
                .delete(delete_condition),
        )
}

async fn get_conditions_by_patient(
    State(state): State<AppStateV2>,
    Path(patient_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<PatientCondition>>>, AppError> {
    let data = patient_conditions::get_conditions_by_patient(&state, patient_id).await?;

    Ok(Json(ApiResponse::ok(data)))
}

async fn get_condition_by_id(
    State(state): State<AppStateV2>,
    Path(condition_id): Path<i32>,
) -> Result<Json<ApiResponse<PatientCondition>>, AppError> {
    let condition = patient_conditions::get_condition_by_id(&state, condition_id)
        .await?
        .ok_or(RequestError::NotFound("Condition assessment"))?;

    Ok(Json(ApiResponse::ok(condition)))
}

async fn create_condition(
    State(state): State<AppStateV2>,
    Json(payload): Json<NewPatientCondition>,
) -> Result<(StatusCode, Json<ApiResponse<PatientCondition>>), AppError> {
    let condition = patient_conditions::create_condition(&state, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Successfully added", condition)),
    ))
}

async fn update_condition(
    State(state): State<AppStateV2>,
    Path(condition_id): Path<i32>,
    Json(payload): Json<UpdatePatientCondition>,
) -> Result<Json<ApiResponse<PatientCondition>>, AppError> {
    let condition = patient_conditions::update_condition(&state, condition_id, &payload)
        .await?
        .ok_or(RequestError::NotFound("Condition assessment"))?;

    Ok(Json(ApiResponse::with_message(
        "Successfully updated",
        condition,
    )))
}

async fn delete_condition(
    State(state): State<AppStateV2>,
    Path(condition_id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let deleted = patient_conditions::delete_condition(&state, condition_id).await?;
    if !deleted {
        return Err(RequestError::NotFound("Condition assessment").into());
    }

    Ok(Json(ApiResponse::with_message("Successfully deleted", true)))
}
