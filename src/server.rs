//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::application::services::{ClickService, LinkService, StatsService};
use crate::domain::click_validator::RandomClickValidator;
use crate::infrastructure::persistence::{PgLinkRepository, PgStatsRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;
use crate::utils::url_policy::UrlPolicy;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (tuned from config)
/// - Embedded migrations
/// - Repository and service wiring
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if the database connection, migrations, the server bind,
/// or the server runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let stats_repository = Arc::new(PgStatsRepository::new(pool));

    let validator = Arc::new(RandomClickValidator::new(Duration::from_millis(
        config.click_validation_delay_ms,
    )));
    let policy = UrlPolicy::new(&config.affiliate_domain);

    let state = AppState::new(
        Arc::new(LinkService::new(
            link_repository.clone(),
            Arc::new(RandomCodeGenerator),
            policy,
        )),
        Arc::new(ClickService::new(validator, stats_repository.clone())),
        Arc::new(StatsService::new(link_repository, stats_repository)),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutting down");
}
