//! Service context - dependency container for services
//!
//! Holds the repositories, the clock and the scheduling policy needed by services.

use std::sync::Arc;

use homestay_core::traits::{Clock, HostRepository, ScheduleRepository, StudentRepository};
use homestay_core::{SchedulePolicy, SystemClock};
use homestay_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The clock that defines "today" for past-start checks
/// - The scheduling policy loaded from configuration
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when repositories are not database-backed
    pool: Option<PgPool>,

    // Repositories
    schedule_repo: Arc<dyn ScheduleRepository>,
    host_repo: Arc<dyn HostRepository>,
    student_repo: Arc<dyn StudentRepository>,

    clock: Arc<dyn Clock>,
    policy: SchedulePolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        schedule_repo: Arc<dyn ScheduleRepository>,
        host_repo: Arc<dyn HostRepository>,
        student_repo: Arc<dyn StudentRepository>,
        clock: Arc<dyn Clock>,
        policy: SchedulePolicy,
    ) -> Self {
        Self {
            pool,
            schedule_repo,
            host_repo,
            student_repo,
            clock,
            policy,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the acceptance schedule repository
    pub fn schedule_repo(&self) -> &dyn ScheduleRepository {
        self.schedule_repo.as_ref()
    }

    /// Get the host repository
    pub fn host_repo(&self) -> &dyn HostRepository {
        self.host_repo.as_ref()
    }

    /// Get the student repository
    pub fn student_repo(&self) -> &dyn StudentRepository {
        self.student_repo.as_ref()
    }

    // === Scheduling ===

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn policy(&self) -> &SchedulePolicy {
        &self.policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("policy", &self.policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// The clock defaults to [`SystemClock`] and the policy to
/// [`SchedulePolicy::default`].
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    schedule_repo: Option<Arc<dyn ScheduleRepository>>,
    host_repo: Option<Arc<dyn HostRepository>>,
    student_repo: Option<Arc<dyn StudentRepository>>,
    clock: Option<Arc<dyn Clock>>,
    policy: Option<SchedulePolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn schedule_repo(mut self, repo: Arc<dyn ScheduleRepository>) -> Self {
        self.schedule_repo = Some(repo);
        self
    }

    pub fn host_repo(mut self, repo: Arc<dyn HostRepository>) -> Self {
        self.host_repo = Some(repo);
        self
    }

    pub fn student_repo(mut self, repo: Arc<dyn StudentRepository>) -> Self {
        self.student_repo = Some(repo);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn policy(mut self, policy: SchedulePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.schedule_repo
                .ok_or_else(|| ServiceError::validation("schedule_repo is required"))?,
            self.host_repo
                .ok_or_else(|| ServiceError::validation("host_repo is required"))?,
            self.student_repo
                .ok_or_else(|| ServiceError::validation("student_repo is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.policy.unwrap_or_default(),
        ))
    }
}
