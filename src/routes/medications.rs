use crate::{
    errors::{AppError, RequestError},
    repositories::medications,
    state::AppStateV2,
    structs::{
        api::ApiResponse,
        medications::{Medication, NewMedication, UpdateMedication},
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
        .route("/", post(create_medication))
        .route("/patient/{patient_id}", get(get_medications_by_patient))
        .route(
            "/{medication_id}",
            get(get_medication_by_id)
                .patch(update_medication)
                .delete(delete_medication),
        )
}

async fn get_medications_by_patient(
    State(state): State<AppStateV2>,
    Path(patient_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<Medication>>>, AppError> {
    let data = medications::get_medications_by_patient(&state, patient_id).await?;

    Ok(Json(ApiResponse::ok(data)))
}

async fn get_medication_by_id(
    State(state): State<AppStateV2>,
    Path(medication_id): Path<i32>,
) -> Result<Json<ApiResponse<Medication>>, AppError> {
    let medication = medications::get_medication_by_id(&state, medication_id)
        .await?
        .ok_or(RequestError::NotFound("Medication"))?;

    Ok(Json(ApiResponse::ok(medication)))
}

async fn create_medication(
    State(state): State<AppStateV2>,
    Json(payload): Json<NewMedication>,
) -> Result<(StatusCode, Json<ApiResponse<Medication>>), AppError> {
    let medication = medications::create_medication(&state, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Successfully added", medication)),
    ))
}

async fn update_medication(
    State(state): State<AppStateV2>,
    Path(medication_id): Path<i32>,
    Json(payload): Json<UpdateMedication>,
) -> Result<Json<ApiResponse<Medication>>, AppError> {
    let medication = medications::update_medication(&state, medication_id, &payload)
        .await?
        .ok_or(RequestError::NotFound("Medication"))?;

    Ok(Json(ApiResponse::with_message(
        "Successfully updated",
        medication,
    )))
}

async fn delete_medication(
    State(state): State<AppStateV2>,
    Path(medication_id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let deleted = medications::delete_medication(&state, medication_id).await?;
    if !deleted {
        return Err(RequestError::NotFound("Medication").into());
    }

    Ok(Json(ApiResponse::with_message("Successfully deleted", true)))
}
