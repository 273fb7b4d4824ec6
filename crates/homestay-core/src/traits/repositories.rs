//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Host, Schedule, Student, ValidatedSchedule};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Schedule Repository
// ============================================================================

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Find schedule by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Schedule>>;

    /// All schedules of a host, ordered by start date
    async fn find_by_host(&self, host_id: RecordId) -> RepoResult<Vec<Schedule>>;

    /// Schedules sharing at least one day with `[start, end]`
    ///
    /// Boundaries are inclusive. `host_id` narrows the result to one host.
    async fn find_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        host_id: Option<RecordId>,
    ) -> RepoResult<Vec<Schedule>>;

    /// Persist a new schedule and return it with its assigned ID
    async fn create(&self, schedule: &ValidatedSchedule) -> RepoResult<Schedule>;

    /// Replace an existing schedule
    async fn update(&self, id: RecordId, schedule: &ValidatedSchedule) -> RepoResult<Schedule>;

    /// Delete a schedule
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Host Repository
// ============================================================================

#[async_trait]
pub trait HostRepository: Send + Sync {
    /// Find host by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Host>>;
}

// ============================================================================
// Student Repository
// ============================================================================

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find student by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Student>>;

    /// Find several students at once; missing IDs are skipped
    async fn find_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<Student>>;
}
