//! Health service
//!
//! Reports whether the service's dependencies are reachable.

use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Liveness: the process is up
    pub fn health(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// Readiness: the database answers
    ///
    /// A context without a pool is never ready.
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let database_healthy = match self.ctx.pool() {
            Some(pool) => match homestay_db::ping(pool).await {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Database health check failed");
                    false
                }
            },
            None => false,
        };

        ReadinessResponse::ready(database_healthy)
    }
}
