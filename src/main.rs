use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use users_api::api::{build_router, AppState};
use users_api::config::Config;
use users_api::infrastructure::database;
use users_api::infrastructure::repositories::PostgresUserRepository;

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration (reads .env when present)
    let config = Config::from_env();

    // Initialize tracing
    let json_logs = config.as_ref().map(|c| c.log_json).unwrap_or(false);
    init_tracing(json_logs);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Connect to database
    let pool = match database::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Error connecting to the database");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(Arc::new(PostgresUserRepository::new(pool.clone())));
    let app = build_router(state, &config.base_path);

    // Start server
    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind address");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%addr, base_path = %config.base_path, "Server listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pool.close().await;

    match served {
        Ok(()) => {
            tracing::info!("Server shut down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Waits for SIGINT (Ctrl+C) or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
