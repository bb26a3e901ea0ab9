mod assignments;
mod auth;
mod medications;
mod nurse_reports;
mod patient_conditions;
mod patients;
mod root;
mod staff;
mod users;
mod vital_signs;

use crate::{scheduler, state::AppStateV2};
use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub async fn app() -> Router {
    let state = AppStateV2::new().await;

    // 背景排程：每天清晨自動產生當日輪替
    let _scheduler = scheduler::initialize_scheduler(state.clone()).await;

    Router::new()
        .route("/", get(root::greeting))
        .route("/health", get(root::health))
        .nest("/api/v1/auth", auth::new())
        .nest("/api/v1/users", users::new(&state))
        .nest("/api/v1/staff", staff::new())
        .nest("/api/v1/patients", patients::new())
        .nest("/api/v1/assignments", assignments::new())
        .nest("/api/v1/medications", medications::new())
        .nest("/api/v1/vital-signs", vital_signs::new())
        .nest("/api/v1/nurse-reports", nurse_reports::new())
        .nest("/api/v1/patient-conditions", patient_conditions::new())
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            // see https://docs.rs/tower-http/latest/tower_http/cors/index.html
            // for more details
            CorsLayer::new()
                .allow_methods(Any)
                .allow_origin(Any)
                .allow_headers([CONTENT_TYPE]),
        )
        .with_state(state)
}

async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "api not found")
}
