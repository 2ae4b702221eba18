use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::outcome::ChecklistReport;
use crate::record::ApplicantRecord;
use crate::RuleEngine;

#[derive(Clone)]
struct RuleServiceState {
    engine: Arc<RuleEngine>,
}

/// Helper used by services to compose the rules REST API router.
#[derive(Clone)]
pub struct RuleApiBuilder {
    state: RuleServiceState,
}

impl RuleApiBuilder {
    pub fn new(engine: Arc<RuleEngine>) -> Self {
        Self {
            state: RuleServiceState { engine },
        }
    }

    pub fn into_router(self) -> Router {
        Router::new()
            .route("/api/rules", get(list_rules))
            .route("/api/evaluate", post(evaluate_record))
            .with_state(self.state)
    }
}

async fn list_rules(State(state): State<RuleServiceState>) -> impl IntoResponse {
    Json(state.engine.rules().to_vec())
}

async fn evaluate_record(
    State(state): State<RuleServiceState>,
    Json(record): Json<ApplicantRecord>,
) -> Json<ChecklistReport> {
    Json(ChecklistReport::from(state.engine.evaluate(&record)))
}
