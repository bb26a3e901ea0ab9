use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    RequestError(#[from] RequestError),
    #[error(transparent)]
    ScheduleError(#[from] ScheduleError),
    #[error(transparent)]
    SystemError(#[from] SystemError),
    #[error("{0}")]
    DatabaseError(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please add the JWT token to the header")]
    MissingToken,
    #[error("Empty header is not allowed")]
    InvalidHeader,
    #[error("Unable to decode token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("You are not an authorized user")]
    Unauthorized,
    #[error("User not found")]
    UserNotFound,
    #[error("Wrong password")]
    InvalidPassword,
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Date parameter is required")]
    MissingDate,
    #[error("Doctor ID and Patient ID are required")]
    MissingAssignmentIds,
    #[error("{0}")]
    Validation(String),
    #[error("{0} already exists")]
    Duplicate(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("No active staff members available for assignment")]
    NoStaffAvailable,
}

#[derive(Error, Debug)]
pub enum SystemError {
    #[error("環境變數 {0} 未設定")]
    EnvVarMissing(String),
    #[error("Redis error: {0}")]
    RedisError(String),
    #[error("{0}")]
    Internal(String),
}

impl AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidHeader => StatusCode::FORBIDDEN,
            AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::Unauthorized
            | AuthError::UserNotFound
            | AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
        }
    }
}

impl RequestError {
    fn status_code(&self) -> StatusCode {
        match self {
            RequestError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::AuthError(err) => err.status_code(),
            AppError::RequestError(err) => err.status_code(),
            AppError::ScheduleError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SystemError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DatabaseError(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": true,
            "message": self.to_string(),
        }));

        (status_code, body).into_response()
    }
}

/// 判斷是否為 (staff_id, patient_id, date) 唯一鍵衝突
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
