//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Host not found: {0}")]
    HostNotFound(RecordId),

    #[error("Student not found: {0}")]
    StudentNotFound(RecordId),

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Start date must be before end date (start: {start}, end: {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Range from {start} to {end} exceeds {max_days} days")]
    RangeTooLong {
        start: NaiveDate,
        end: NaiveDate,
        max_days: u32,
    },

    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Start date cannot be in the past (start: {start}, today: {today})")]
    PastStartDate { start: NaiveDate, today: NaiveDate },

    #[error("Student ID is required for a primary occupant schedule")]
    MissingStudentForPrimaryOccupant,

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Schedule overlap detected for host {host_id}")]
    ScheduleOverlap {
        host_id: RecordId,
        /// Existing schedule that collides, when known
        conflicting_id: Option<RecordId>,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::HostNotFound(_) => "UNKNOWN_HOST",
            Self::StudentNotFound(_) => "UNKNOWN_STUDENT",
            Self::ScheduleNotFound(_) => "UNKNOWN_SCHEDULE",

            // Validation
            Self::InvalidRange { .. } | Self::RangeTooLong { .. } => "INVALID_RANGE",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::PastStartDate { .. } => "PAST_START_DATE",
            Self::MissingStudentForPrimaryOccupant => "MISSING_STUDENT_FOR_PRIMARY_OCCUPANT",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Business Rules
            Self::ScheduleOverlap { .. } => "SCHEDULE_OVERLAP",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::HostNotFound(_) | Self::StudentNotFound(_) | Self::ScheduleNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// Overlaps are reported as validation failures: the caller fixes them by
    /// resubmitting different dates.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. }
                | Self::RangeTooLong { .. }
                | Self::InvalidDate(_)
                | Self::PastStartDate { .. }
                | Self::MissingStudentForPrimaryOccupant
                | Self::ValidationError(_)
                | Self::ScheduleOverlap { .. }
        )
    }

    /// Check if this is an infrastructure failure
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
