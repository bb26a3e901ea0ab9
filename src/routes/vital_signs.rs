use crate::{
    errors::{AppError, RequestError},
    repositories::vital_signs,
    state::AppStateV2,
    structs::{
        api::ApiResponse,
        assignments::DateQuery,
        vital_signs::{NewVitalSign, UpdateVitalSign, VitalSign},
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

pub fn new() -> Router<AppStateV2> {
    Router::new()
        .route("/", post(create_vital_sign))
        .route("/patient/{patient_id}", get(get_vital_signs_by_patient))
        .route(
            "/{vital_sign_id}",
            get(get_vital_sign_by_id)
                .patch(update_vital_sign)
                .delete(delete_vital_sign),
        )
}

async fn get_vital_signs_by_patient(
    State(state): State<AppStateV2>,
    Path(patient_id): Path<i32>,
    Query(query): Query<DateQuery>,
) -> Result<Json<ApiResponse<Vec<VitalSign>>>, AppError> {
    let data = vital_signs::get_vital_signs_by_patient(&state, patient_id, query.date).await?;

    Ok(Json(ApiResponse::ok(data)))
}

async fn get_vital_sign_by_id(
    State(state): State<AppStateV2>,
    Path(vital_sign_id): Path<i32>,
) -> Result<Json<ApiResponse<VitalSign>>, AppError> {
    let vital_sign = vital_signs::get_vital_sign_by_id(&state, vital_sign_id)
        .await?
        .ok_or(RequestError::NotFound("Vital sign record"))?;

    Ok(Json(ApiResponse::ok(vital_sign)))
}

async fn create_vital_sign(
    State(state): State<AppStateV2>,
    Json(payload): Json<NewVitalSign>,
) -> Result<(StatusCode, Json<ApiResponse<VitalSign>>), AppError> {
    let vital_sign = vital_signs::create_vital_sign(&state, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Successfully added", vital_sign)),
    ))
}

async fn update_vital_sign(
    State(state): State<AppStateV2>,
    Path(vital_sign_id): Path<i32>,
    Json(payload): Json<UpdateVitalSign>,
) -> Result<Json<ApiResponse<VitalSign>>, AppError> {
    let vital_sign = vital_signs::update_vital_sign(&state, vital_sign_id, &payload)
        .await?
        .ok_or(RequestError::NotFound("Vital sign record"))?;

    Ok(Json(ApiResponse::with_message(
        "Successfully updated",
        vital_sign,
    )))
}

async fn delete_vital_sign(
    State(state): State<AppStateV2>,
    Path(vital_sign_id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let deleted = vital_signs::delete_vital_sign(&state, vital_sign_id).await?;
    if !deleted {
        return Err(RequestError::NotFound("Vital sign record").into());
    }

    Ok(Json(ApiResponse::with_message("Successfully deleted", true)))
}
