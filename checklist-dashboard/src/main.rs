use anyhow::Context;
use checklist_dashboard::config::DashboardConfig;
use checklist_dashboard::routing::{build_app, build_state};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    if let Err(err) = checklist_core::logging::init_tracing(None) {
        eprintln!("failed to initialise tracing: {err}");
    }

    let config = DashboardConfig::from_env().context("failed to load dashboard configuration")?;
    let state = build_state(&config).context("failed to initialise dashboard")?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .context("failed to bind TCP listener")?;
    let actual_addr = listener
        .local_addr()
        .context("failed to read socket address")?;
    info!(
        %actual_addr,
        data_source = %config.data_source_url,
        "server is running on http://localhost:{}",
        actual_addr.port()
    );

    if let Err(err) = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(?err, "dashboard server terminated with error");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sigterm) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
