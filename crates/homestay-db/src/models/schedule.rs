//! Acceptance schedule database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for acceptance_schedules table
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleModel {
    pub id: i64,
    pub host_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_primary_occupant: bool,
    pub is_extendable: bool,
    pub student_id: Option<i64>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    /// Stored copy of `end_date - start_date`, enforced by a CHECK constraint
    pub duration_days: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
