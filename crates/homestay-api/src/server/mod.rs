//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use homestay_common::{AppConfig, AppError};
use homestay_core::SystemClock;
use homestay_db::{
    create_pool, default_migrations_dir, run_migrations, PgHostRepository, PgScheduleRepository,
    PgStudentRepository, PoolConfig,
};
use homestay_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_health_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes get tracing only, so probes are never rate limited.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_health_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &default_migrations_dir())
            .await
            .map_err(|e| AppError::Migration(e.to_string()))?;
        info!("Database migrations applied");
    }

    // Create repositories
    let schedule_repo = Arc::new(PgScheduleRepository::new(pool.clone()));
    let host_repo = Arc::new(PgHostRepository::new(pool.clone()));
    let student_repo = Arc::new(PgStudentRepository::new(pool.clone()));

    let policy = config.scheduling.policy();
    info!(
        primary_occupant_nationality = %policy.primary_occupant_nationality,
        past_start_rule = %policy.past_start_rule,
        "Scheduling policy loaded"
    );

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .schedule_repo(schedule_repo)
        .host_repo(host_repo)
        .student_repo(student_repo)
        .clock(Arc::new(SystemClock))
        .policy(policy)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    // Run server
    run_server(app, addr).await
}
