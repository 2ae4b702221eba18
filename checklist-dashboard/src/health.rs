use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::dashboard_routes::DashboardState;
use crate::fetcher::ApplicantSource;

#[derive(Clone)]
pub struct HealthState {
    source: Arc<dyn ApplicantSource>,
    rules: usize,
}

impl HealthState {
    pub fn new(dashboard: &DashboardState) -> Self {
        Self {
            source: dashboard.source.clone(),
            rules: dashboard.engine.len(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    rules: usize,
    data_source: String,
}

pub fn router(state: HealthState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz(State(state): State<HealthState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".into(),
        rules: state.rules,
        data_source: state.source.describe(),
    })
}
