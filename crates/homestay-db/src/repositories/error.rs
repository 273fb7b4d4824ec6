//! Error handling utilities for repositories

use homestay_core::error::DomainError;
use homestay_core::value_objects::RecordId;
use sqlx::Error as SqlxError;

/// SQLSTATE raised by an exclusion constraint
const EXCLUSION_VIOLATION: &str = "23P01";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map constraint violations raised by a schedule write
///
/// The exclusion constraint on host and date range becomes an overlap; a
/// foreign key failure names the missing host or student.
pub fn map_schedule_write_error(
    e: SqlxError,
    host_id: RecordId,
    student_id: Option<RecordId>,
) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) {
            return DomainError::ScheduleOverlap {
                host_id,
                conflicting_id: None,
            };
        }
        if db_err.is_foreign_key_violation() {
            let on_student = db_err
                .constraint()
                .is_some_and(|name| name.contains("student"));
            return match (on_student, student_id) {
                (true, Some(student_id)) => DomainError::StudentNotFound(student_id),
                _ => DomainError::HostNotFound(host_id),
            };
        }
        if db_err.is_check_violation() {
            return DomainError::ValidationError(db_err.message().to_string());
        }
    }
    map_db_error(e)
}

/// Create a "schedule not found" error
pub fn schedule_not_found(id: RecordId) -> DomainError {
    DomainError::ScheduleNotFound(id)
}
