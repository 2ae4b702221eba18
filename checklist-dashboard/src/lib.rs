//! HTTP dashboard for the applicant checklist.
//!
//! Each request to `/` fetches the applicant record from the configured data
//! source, evaluates the checklist rules against it and renders the results as
//! an HTML page. The same flow is available as JSON under `/api/checklist`.

pub mod config;
pub mod dashboard_routes;
pub mod error;
pub mod fetcher;
pub mod health;
pub mod render;
pub mod routing;

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::info;

use config::DashboardConfig;
use routing::{build_app, build_state};

/// Handle returned when the dashboard is started programmatically.
pub struct DashboardHandle {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
}

impl DashboardHandle {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn shutdown(self) {
        let _ = self.shutdown.send(());
    }
}

/// Binds the configured address and serves the dashboard on a background task.
pub async fn start_dashboard(config: DashboardConfig) -> anyhow::Result<DashboardHandle> {
    let state = build_state(&config)?;
    let router = build_app(state);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .context("failed to bind dashboard listener")?;
    let actual_addr = listener
        .local_addr()
        .context("failed to read socket address")?;
    info!(%actual_addr, "starting checklist dashboard");

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await
            .ok();
    });

    Ok(DashboardHandle {
        addr: actual_addr,
        shutdown: tx,
    })
}
