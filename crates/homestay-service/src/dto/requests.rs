//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Dates are ISO `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use homestay_core::{Gender, RecordId};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Schedule Requests
// ============================================================================

/// Create acceptance schedule request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    pub host_id: RecordId,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// Binding occupancy record; requires `student_id`. Defaults to true.
    #[serde(default = "default_true", alias = "is_rook")]
    pub is_primary_occupant: bool,

    #[serde(default)]
    pub is_extendable: bool,

    pub student_id: Option<RecordId>,

    pub gender: Option<Gender>,

    #[validate(length(min = 1, max = 100, message = "Nationality must be 1-100 characters"))]
    pub nationality: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Update acceptance schedule request
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateScheduleRequest {
    pub host_id: Option<RecordId>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    #[serde(alias = "is_rook")]
    pub is_primary_occupant: Option<bool>,

    pub is_extendable: Option<bool>,

    pub student_id: Option<RecordId>,

    pub gender: Option<Gender>,

    #[validate(length(min = 1, max = 100, message = "Nationality must be 1-100 characters"))]
    pub nationality: Option<String>,
}
