use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use checklist_rules::{ChecklistReport, RuleEngine};
use tracing::{error, instrument};

use crate::error::{ApiError, DashboardError};
use crate::fetcher::ApplicantSource;
use crate::render::DashboardRenderer;

/// Shared, read-only state behind the dashboard routes.
#[derive(Clone)]
pub struct DashboardState {
    pub source: Arc<dyn ApplicantSource>,
    pub engine: Arc<RuleEngine>,
    pub renderer: Arc<DashboardRenderer>,
}

impl DashboardState {
    pub fn new(
        source: Arc<dyn ApplicantSource>,
        engine: Arc<RuleEngine>,
        renderer: Arc<DashboardRenderer>,
    ) -> Self {
        Self {
            source,
            engine,
            renderer,
        }
    }

    /// Fetches the applicant and evaluates every rule against it.
    #[instrument(skip_all, fields(source = %self.source.describe()))]
    pub async fn build_report(&self) -> Result<ChecklistReport, DashboardError> {
        let record = match self.source.fetch().await {
            Ok(record) => record,
            Err(err) => {
                error!(error = %err, "failed to fetch applicant data");
                return Err(err.into());
            }
        };

        Ok(ChecklistReport::from(self.engine.evaluate(&record)))
    }
}

pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/api/checklist", get(checklist))
        .with_state(state)
}

async fn dashboard(State(state): State<DashboardState>) -> Result<Html<String>, DashboardError> {
    let report = state.build_report().await?;
    let page = state.renderer.render(&report).map_err(|err| {
        error!(error = %err, "failed to render dashboard");
        DashboardError::from(err)
    })?;
    Ok(Html(page))
}

async fn checklist(State(state): State<DashboardState>) -> Result<Json<ChecklistReport>, ApiError> {
    let report = state.build_report().await?;
    Ok(Json(report))
}
