use crate::{
    errors::{AppError, RequestError},
    repositories::nurse_reports,
    state::AppStateV2,
    structs::{
        api::ApiResponse,
        nurse_reports::{NewNurseReport, NurseReport, UpdateNurseReport},
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
        .route("/", post(create_nurse_report))
        .route("/patient/{patient_id}", get(get_nurse_reports_by_patient))
        .route(
            "/{report_id}",
            get(get_nurse_report_by_id)
                .patch(update_nurse_report)
                .delete(delete_nurse_report),
        )
}

async fn get_nurse_reports_by_patient(
    State(state): State<AppStateV2>,
    Path(patient_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<NurseReport>>>, AppError> {
    let data = nurse_reports::get_nurse_reports_by_patient(&state, patient_id).await?;

    Ok(Json(ApiResponse::ok(data)))
}

async fn get_nurse_report_by_id(
    State(state): State<AppStateV2>,
    Path(report_id): Path<i32>,
) -> Result<Json<ApiResponse<NurseReport>>, AppError> {
    let report = nurse_reports::get_nurse_report_by_id(&state, report_id)
        .await?
        .ok_or(RequestError::NotFound("Nurse report"))?;

    Ok(Json(ApiResponse::ok(report)))
}

async fn create_nurse_report(
    State(state): State<AppStateV2>,
    Json(payload): Json<NewNurseReport>,
) -> Result<(StatusCode, Json<ApiResponse<NurseReport>>), AppError> {
    let report = nurse_reports::create_nurse_report(&state, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Successfully added", report)),
    ))
}

async fn update_nurse_report(
    State(state): State<AppStateV2>,
    Path(report_id): Path<i32>,
    Json(payload): Json<UpdateNurseReport>,
) -> Result<Json<ApiResponse<NurseReport>>, AppError> {
    let report = nurse_reports::update_nurse_report(&state, report_id, &payload)
        .await?
        .ok_or(RequestError::NotFound("Nurse report"))?;

    Ok(Json(ApiResponse::with_message(
        "Successfully updated",
        report,
    )))
}

async fn delete_nurse_report(
    State(state): State<AppStateV2>,
    Path(report_id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let deleted = nurse_reports::delete_nurse_report(&state, report_id).await?;
    if !deleted {
        return Err(RequestError::NotFound("Nurse report").into());
    }

    Ok(Json(ApiResponse::with_message("Successfully deleted", true)))
}
