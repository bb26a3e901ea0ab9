use crate::{
    errors::{AppError, RequestError},
    repositories::users,
    routes::auth,
    state::AppStateV2,
    structs::{
        api::ApiResponse,
        users::{NewUser, UpdateUser, User},
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};

pub fn new(state: &AppStateV2) -> Router<AppStateV2> {
    // 單筆操作需要登入
    let protected = Router::new()
        .route(
            "/{user_id}",
            get(get_user_by_id).patch(update_user).delete(delete_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::authorize,
        ));

    Router::new()
        .route("/", get(get_users).post(register))
        .merge(protected)
}

/// 取 users 清單
async fn get_users(
    State(state): State<AppStateV2>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let result = users::get_users(&state).await.map_err(AppError::from)?;

    Ok(Json(ApiResponse::ok(result)))
}

async fn register(
    State(state): State<AppStateV2>,
    Json(payload): Json<NewUser>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), AppError> {
    if users::check_email_exists(&state, &payload.email).await.is_ok() {
        return Err(RequestError::Duplicate("User with this email").into());
    }

    let password_hash = auth::hash_password(&payload.password)?;
    let user = users::create_user(&state, &payload, &password_hash).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Successfully created", user)),
    ))
}

async fn get_user_by_id(
    State(state): State<AppStateV2>,
    Path(user_id): Path<i32>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = users::get_user_by_id(&state, user_id)
        .await?
        .ok_or(RequestError::NotFound("User"))?;

    Ok(Json(ApiResponse::ok(user)))
}

async fn update_user(
    State(state): State<AppStateV2>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let password_hash = match &payload.password {
        Some(password) => Some(auth::hash_password(password)?),
        None => None,
    };

    let user = users::update_user(&state, user_id, &payload, password_hash)
        .await?
        .ok_or(RequestError::NotFound("User"))?;

    Ok(Json(ApiResponse::with_message("Successfully updated", user)))
}

async fn delete_user(
    State(state): State<AppStateV2>,
    Path(user_id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let deleted = users::delete_user(&state, user_id).await?;
    if !deleted {
        return Err(RequestError::NotFound("User").into());
    }

    Ok(Json(ApiResponse::with_message("Successfully deleted", true)))
}
