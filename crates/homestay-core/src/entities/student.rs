//! Student entity - the person staying with a host

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::{days_between, Gender, RecordId};

/// Student entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub arrival_date: NaiveDate,
    pub leaving_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Display name used in schedule summaries
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Length of the student's whole stay in days
    ///
    /// `None` while the leaving date is unknown or not after arrival.
    pub fn stay_duration(&self) -> Option<i64> {
        let leaving = self.leaving_date?;
        (leaving > self.arrival_date).then(|| days_between(self.arrival_date, leaving))
    }
}
