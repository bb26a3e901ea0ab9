use crate::{
    errors::{AppError, RequestError},
    repositories::staff,
    state::AppStateV2,
    structs::{
        api::ApiResponse,
        staff::{NewStaff, Staff, StaffQuery, UpdateStaff},
    },
    utils::validation,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

pub fn new() -> Router<AppStateV2> {
    Router::new()
        .route("/", get(get_all_staff).post(create_staff))
        .route(
            "/{staff_id}",
            get(get_staff_by_id)
                .patch(update_staff)
                .delete(delete_staff),
        )
}

async fn get_all_staff(
    State(state): State<AppStateV2>,
    Query(query): Query<StaffQuery>,
) -> Result<Json<ApiResponse<Vec<Staff>>>, AppError> {
    let result = if let Some(role) = &query.role {
        validation::validate_staff_role(role)?;
        staff::get_staff_by_role(&state, role).await?
    } else if query.on_duty == Some(true) {
        staff::get_on_duty_staff(&state).await?
    } else {
        staff::get_all_staff(&state).await?
    };

    Ok(Json(ApiResponse::ok(result)))
}

async fn get_staff_by_id(
    State(state): State<AppStateV2>,
    Path(staff_id): Path<i32>,
) -> Result<Json<ApiResponse<Staff>>, AppError> {
    let member = staff::get_staff_by_id(&state, staff_id)
        .await?
        .ok_or(RequestError::NotFound("Staff member"))?;

    Ok(Json(ApiResponse::ok(member)))
}

async fn create_staff(
    State(state): State<AppStateV2>,
    Json(payload): Json<NewStaff>,
) -> Result<(StatusCode, Json<ApiResponse<Staff>>), AppError> {
    validation::validate_staff_role(&payload.role)?;
    validation::validate_phone(&payload.phone)?;

    if staff::get_staff_by_email(&state, &payload.email)
        .await?
        .is_some()
    {
        return Err(RequestError::Duplicate("Staff member with this email").into());
    }

    let member = staff::create_staff(&state, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Successfully created", member)),
    ))
}

async fn update_staff(
    State(state): State<AppStateV2>,
    Path(staff_id): Path<i32>,
    Json(payload): Json<UpdateStaff>,
) -> Result<Json<ApiResponse<Staff>>, AppError> {
    if let Some(role) = &payload.role {
        validation::validate_staff_role(role)?;
    }
    if let Some(phone) = &payload.phone {
        validation::validate_phone(phone)?;
    }

    let member = staff::update_staff(&state, staff_id, &payload)
        .await?
        .ok_or(RequestError::NotFound("Staff member"))?;

    Ok(Json(ApiResponse::with_message("Successfully updated", member)))
}

async fn delete_staff(
    State(state): State<AppStateV2>,
    Path(staff_id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let deleted = staff::delete_staff(&state, staff_id).await?;
    if !deleted {
        return Err(RequestError::NotFound("Staff member").into());
    }

    Ok(Json(ApiResponse::with_message("Successfully deleted", true)))
}
