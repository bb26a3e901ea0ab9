use crate::{
    errors::{AppError, RequestError},
    repositories::{assignments, patients},
    state::AppStateV2,
    structs::{
        api::ApiResponse,
        patients::{DischargePatient, NewPatient, Patient, PatientQuery, UpdatePatient},
    },
    utils::validation,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;

pub fn new() -> Router<AppStateV2> {
    Router::new()
        .route("/", get(get_all_patients).post(create_patient))
        .route(
            "/{patient_id}",
            get(get_patient_by_id)
                .patch(update_patient)
                .delete(delete_patient),
        )
        .route("/{patient_id}/discharge", post(discharge_patient))
}

async fn get_all_patients(
    State(state): State<AppStateV2>,
    Query(query): Query<PatientQuery>,
) -> Result<Json<ApiResponse<Vec<Patient>>>, AppError> {
    let result = if let Some(status) = &query.status {
        validation::validate_patient_status(status)?;
        patients::get_patients_by_status(&state, status).await?
    } else if let Some(doctor_id) = query.doctor_id {
        patients::get_patients_by_doctor(&state, doctor_id).await?
    } else {
        patients::get_all_patients(&state).await?
    };

    Ok(Json(ApiResponse::ok(result)))
}

async fn get_patient_by_id(
    State(state): State<AppStateV2>,
    Path(patient_id): Path<i32>,
) -> Result<Json<ApiResponse<Patient>>, AppError> {
    let patient = patients::get_patient_by_id(&state, patient_id)
        .await?
        .ok_or(RequestError::NotFound("Patient"))?;

    Ok(Json(ApiResponse::ok(patient)))
}

async fn create_patient(
    State(state): State<AppStateV2>,
    Json(payload): Json<NewPatient>,
) -> Result<(StatusCode, Json<ApiResponse<Patient>>), AppError> {
    validation::validate_new_patient(&payload)?;

    if patients::get_patient_by_email(&state, &payload.email)
        .await?
        .is_some()
    {
        return Err(RequestError::Duplicate("Patient with this email").into());
    }

    let patient = patients::create_patient(&state, &payload).await?;

    // 入院當下就指派照護人員；排班失敗只記 log，掛號本身不受影響
    let today = Local::now().date_naive();
    if let Err(err) = assignments::auto_assign_staff_to_new_patient(&state, patient.id, today).await
    {
        tracing::error!("auto-assign after admission failed: {}", err);
    }

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Patient registered successfully",
            patient,
        )),
    ))
}

async fn update_patient(
    State(state): State<AppStateV2>,
    Path(patient_id): Path<i32>,
    Json(payload): Json<UpdatePatient>,
) -> Result<Json<ApiResponse<Patient>>, AppError> {
    if let Some(status) = &payload.status {
        validation::validate_patient_status(status)?;
    }
    if let Some(phone) = &payload.phone {
        validation::validate_phone(phone)?;
    }

    let patient = patients::update_patient(&state, patient_id, &payload)
        .await?
        .ok_or(RequestError::NotFound("Patient"))?;

    Ok(Json(ApiResponse::with_message(
        "Successfully updated",
        patient,
    )))
}

async fn discharge_patient(
    State(state): State<AppStateV2>,
    Path(patient_id): Path<i32>,
    Json(payload): Json<DischargePatient>,
) -> Result<Json<ApiResponse<Patient>>, AppError> {
    let today = Local::now().date_naive();
    let patient = patients::discharge_patient(&state, patient_id, &payload, today)
        .await?
        .ok_or(RequestError::NotFound("Patient"))?;

    Ok(Json(ApiResponse::with_message(
        "Patient discharged successfully",
        patient,
    )))
}

async fn delete_patient(
    State(state): State<AppStateV2>,
    Path(patient_id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let deleted = patients::delete_patient(&state, patient_id).await?;
    if !deleted {
        return Err(RequestError::NotFound("Patient").into());
    }

    Ok(Json(ApiResponse::with_message("Successfully deleted", true)))
}
