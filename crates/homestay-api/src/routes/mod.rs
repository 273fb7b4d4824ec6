//! Route definitions
//!
//! All API routes mounted under /api/v1.

use axum::{routing::get, routing::post, Router};

use crate::handlers::{health, occupancy, schedules};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(schedule_routes())
        .merge(occupancy_routes())
}

/// Acceptance schedule routes
fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/host/schedules", post(schedules::create_schedule))
        .route(
            "/host/schedules/:id",
            get(schedules::get_schedule)
                .put(schedules::update_schedule)
                .delete(schedules::delete_schedule),
        )
        .route("/host/:host_id/schedules", get(schedules::list_host_schedules))
}

/// Occupancy routes
fn occupancy_routes() -> Router<AppState> {
    Router::new()
        .route("/host/occupancy", get(occupancy::get_occupancy))
        .route("/host/occupancy/range", get(occupancy::get_occupancy_range))
}
