use crate::state::AppStateV2;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

pub async fn greeting() -> Json<Value> {
    Json(json!({ "success": true, "greeting": "Hello from Server" }))
}

// we can extract the connection pool with `State`
pub async fn health(State(state): State<AppStateV2>) -> Result<String, (StatusCode, String)> {
    sqlx::query_scalar("select 'ok'")
        .fetch_one(state.get_pool())
        .await
        .map_err(internal_error)
}

fn internal_error<E>(err: E) -> (StatusCode, String)
where
    E: std::error::Error,
{
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
