//! `cfti-site` entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config (file + env overrides)
//!   3. Init logger once
//!   4. Build the notifier and shared state
//!   5. Spawn Ctrl-C / SIGTERM → shutdown signal watcher
//!   6. Serve HTTP until the token is cancelled

use std::env;

use tokio_util::sync::CancellationToken;
use tracing::info;

use cfti_site::error::AppError;
use cfti_site::server::{self, AppState};
use cfti_site::{config, logger, notify};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Optional file.
    let _ = dotenvy::dotenv();

    let config = config::load()?;

    // An explicit CFTI_LOG_LEVEL beats RUST_LOG.
    let force_level = env::var_os("CFTI_LOG_LEVEL").is_some();
    logger::init(&config.server.log_level, force_level, config.server.log_format)?;

    info!(
        site = %config.site.name,
        bind = %config.server.bind,
        log_level = %config.server.log_level,
        notify = %config.notify.backend,
        "config loaded"
    );

    let notifier = notify::build(&config.notify).map_err(|e| AppError::Config(e.to_string()))?;
    let state = AppState::new(config.site, notifier);

    let shutdown = CancellationToken::new();
    tokio::spawn(watch_signals(shutdown.clone()));

    server::run(&config.server.bind, state, shutdown).await
}

/// Cancel `token` on Ctrl-C, or SIGTERM where there is one.
async fn watch_signals(token: CancellationToken) {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("ctrl-c received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }
    token.cancel();
}
