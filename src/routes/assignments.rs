use crate::{
    errors::{AppError, RequestError},
    repositories::assignments,
    state::AppStateV2,
    structs::{
        api::ApiResponse,
        assignments::{
            AssignDoctorRequest, DateQuery, DoctorPatientAssignment, GenerateAssignmentsRequest,
            StaffAssignment,
        },
    },
};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

pub fn new() -> Router<AppStateV2> {
    Router::new()
        .route("/", get(get_assignments_by_date))
        .route("/generate", post(generate_assignments))
        .route("/staff/{staff_id}", get(get_assignments_by_staff))
        .route("/patient/{patient_id}", get(get_assignments_by_patient))
        .route("/doctors", get(get_doctor_assignments))
        .route("/doctors/assign", post(assign_doctor))
}

/// 查某日期的完整分配，含未落庫的醫師永久綁定
async fn get_assignments_by_date(
    State(state): State<AppStateV2>,
    Query(query): Query<DateQuery>,
) -> Result<Json<ApiResponse<Vec<StaffAssignment>>>, AppError> {
    let date = query.date.ok_or(RequestError::MissingDate)?;
    let data = assignments::get_assignments_by_date(&state, date).await?;

    Ok(Json(ApiResponse::ok(data)))
}

async fn generate_assignments(
    State(state): State<AppStateV2>,
    Json(payload): Json<GenerateAssignmentsRequest>,
) -> Result<Json<ApiResponse<Vec<StaffAssignment>>>, AppError> {
    let date = payload.date.ok_or(RequestError::MissingDate)?;
    let data = assignments::generate_assignments_for_date(&state, date).await?;

    Ok(Json(ApiResponse::with_message(
        "Staff assignments generated successfully",
        data,
    )))
}

async fn get_assignments_by_staff(
    State(state): State<AppStateV2>,
    Path(staff_id): Path<i32>,
    Query(query): Query<DateQuery>,
) -> Result<Json<ApiResponse<Vec<StaffAssignment>>>, AppError> {
    let data = assignments::get_assignments_by_staff_id(&state, staff_id, query.date).await?;

    Ok(Json(ApiResponse::ok(data)))
}

async fn get_assignments_by_patient(
    State(state): State<AppStateV2>,
    Path(patient_id): Path<i32>,
    Query(query): Query<DateQuery>,
) -> Result<Json<ApiResponse<Vec<StaffAssignment>>>, AppError> {
    let data = assignments::get_assignments_by_patient_id(&state, patient_id, query.date).await?;

    Ok(Json(ApiResponse::ok(data)))
}

async fn get_doctor_assignments(
    State(state): State<AppStateV2>,
) -> Result<Json<ApiResponse<Vec<DoctorPatientAssignment>>>, AppError> {
    let data = assignments::get_doctor_patient_assignments(&state).await?;

    Ok(Json(ApiResponse::ok(data)))
}

async fn assign_doctor(
    State(state): State<AppStateV2>,
    Json(payload): Json<AssignDoctorRequest>,
) -> Result<Json<ApiResponse<DoctorPatientAssignment>>, AppError> {
    let (doctor_id, patient_id) = match (payload.doctor_id, payload.patient_id) {
        (Some(doctor_id), Some(patient_id)) => (doctor_id, patient_id),
        _ => return Err(RequestError::MissingAssignmentIds.into()),
    };

    let data = assignments::assign_doctor_to_patient(&state, doctor_id, patient_id).await?;

    Ok(Json(ApiResponse::with_message(
        "Doctor assigned to patient successfully",
        data,
    )))
}
