//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, worker spawning, and Axum server lifecycle.

use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::application::services::LinkService;
use crate::application::workers::{run_cleanup_task, run_hit_worker};
use crate::config::Config;
use crate::infrastructure::persistence::{SqliteLinkRepository, connect_and_migrate};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long shutdown waits for the hit worker to drain its queue.
const HIT_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Background hit worker
/// - Periodic cleanup task (unless disabled)
/// - Axum HTTP server
///
/// On Ctrl-C or SIGTERM the server stops accepting connections, finishes
/// in-flight requests and gives the hit worker a moment to drain.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_and_migrate(&config.database_url, config.db_max_connections)
        .await
        .context("failed to initialize database")?;
    tracing::info!("Connected to database, migrations applied");

    let pool = Arc::new(pool);
    let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let generator = Arc::new(RandomCodeGenerator::new(config.code_length));
    let link_service = Arc::new(LinkService::new(link_repository, generator));

    let (hit_sender, hit_receiver) = mpsc::channel(config.hit_queue_capacity);
    let hit_worker = tokio::spawn(run_hit_worker(hit_receiver, link_service.clone()));

    let cleanup_task = config.is_cleanup_enabled().then(|| {
        tokio::spawn(run_cleanup_task(
            link_service.clone(),
            Duration::from_secs(config.cleanup_interval_seconds),
        ))
    });

    let state = AppState::new(link_service, config.base_url.clone(), hit_sender);
    let app = app_router(state, RateLimitSettings::from(&config))?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped, draining hit queue");

    if let Some(task) = cleanup_task {
        task.abort();
    }

    match tokio::time::timeout(HIT_DRAIN_TIMEOUT, hit_worker).await {
        Ok(Ok(())) => tracing::info!("Hit worker finished"),
        Ok(Err(e)) => tracing::error!(error = %e, "Hit worker panicked"),
        Err(_) => tracing::warn!("Hit worker did not drain in time, pending hits dropped"),
    }

    pool.close().await;

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
