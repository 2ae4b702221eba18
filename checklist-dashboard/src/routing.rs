use std::sync::Arc;

use axum::Router;
use checklist_rules::RuleApiBuilder;
use tower_http::trace::TraceLayer;

use crate::config::DashboardConfig;
use crate::dashboard_routes::{router as dashboard_router, DashboardState};
use crate::fetcher::HttpApplicantSource;
use crate::health::{router as health_router, HealthState};
use crate::render::DashboardRenderer;

/// Wires the real HTTP data source, the configured rules and the renderer.
pub fn build_state(config: &DashboardConfig) -> anyhow::Result<DashboardState> {
    let engine = config.load_engine()?;
    let source = HttpApplicantSource::new(config.data_source_url.clone(), config.fetch_timeout)?;
    let renderer = DashboardRenderer::new()?;

    Ok(DashboardState::new(
        Arc::new(source),
        Arc::new(engine),
        Arc::new(renderer),
    ))
}

pub fn build_app(state: DashboardState) -> Router {
    let rules_router = RuleApiBuilder::new(state.engine.clone()).into_router();
    let health_router = health_router(HealthState::new(&state));

    Router::new()
        .merge(dashboard_router(state))
        .merge(rules_router)
        .merge(health_router)
        .layer(TraceLayer::new_for_http())
}
