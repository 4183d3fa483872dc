use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use scam_honeypot::api::{ApiState, honeypot_routes};
use scam_honeypot::config::HoneypotConfig;
use scam_honeypot::orchestrator::Honeypot;
use scam_honeypot::session::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HoneypotConfig::from_env().context("loading configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(&config);

    eprintln!("🍯 Scam Honeypot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Analyze API: http://{}/analyze", config.listen_addr());
    match config.max_sessions {
        Some(n) => eprintln!("   Sessions: capped at {}", n),
        None => eprintln!("   Sessions: unbounded (in-memory, lost on restart)"),
    }
    if let Some(dir) = &config.log_dir {
        eprintln!("   Log dir: {}", dir.display());
    }

    let store = Arc::new(SessionStore::with_capacity(config.max_sessions));
    let state = ApiState {
        honeypot: Arc::new(Honeypot::new(store)),
        api_key: config.api_key.clone(),
    };
    let app = honeypot_routes(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    tracing::info!(addr = %config.listen_addr(), "Honeypot server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("Honeypot server stopped");
    Ok(())
}

fn init_tracing(config: &HoneypotConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "honeypot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
