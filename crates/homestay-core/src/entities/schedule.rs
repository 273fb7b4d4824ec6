//! Acceptance schedule entity - one student's stay at one host

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::{days_between, DateRange, Gender, RecordId};

/// Persisted acceptance schedule
///
/// Instances come back from a repository after a validated write, so
/// `start_date < end_date` holds for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub id: RecordId,
    pub host_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Binding occupancy record for the slot; requires a student
    pub is_primary_occupant: bool,
    pub is_extendable: bool,
    pub student_id: Option<RecordId>,
    pub gender: Option<Gender>,
    pub nationality: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Build the persisted form of a validated schedule
    pub fn from_validated(
        id: RecordId,
        validated: &ValidatedSchedule,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let draft = validated.draft();
        Self {
            id,
            host_id: draft.host_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            is_primary_occupant: draft.is_primary_occupant,
            is_extendable: draft.is_extendable,
            student_id: draft.student_id,
            gender: draft.gender,
            nationality: draft.nationality.clone(),
            created_at,
            updated_at,
        }
    }

    /// Stay length in whole days, always derived from the dates
    #[inline]
    pub fn duration_days(&self) -> i64 {
        days_between(self.start_date, self.end_date)
    }

    /// The inclusive interval the stay occupies
    #[inline]
    pub fn range(&self) -> DateRange {
        DateRange::spanning(self.start_date, self.end_date)
    }

    /// Check whether the host is occupied by this stay on `date`
    #[inline]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Candidate schedule submitted for validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub host_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_primary_occupant: bool,
    pub is_extendable: bool,
    pub student_id: Option<RecordId>,
    pub gender: Option<Gender>,
    pub nationality: Option<String>,
}

impl ScheduleDraft {
    /// Create a plain (non primary-occupant) draft for a host
    pub fn new(host_id: RecordId, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            host_id,
            start_date,
            end_date,
            is_primary_occupant: false,
            is_extendable: false,
            student_id: None,
            gender: None,
            nationality: None,
        }
    }

    /// Candidate interval; `start > end` yields the swapped range
    pub(crate) fn range(&self) -> DateRange {
        DateRange::spanning(self.start_date, self.end_date)
    }
}

impl From<&Schedule> for ScheduleDraft {
    fn from(schedule: &Schedule) -> Self {
        Self {
            host_id: schedule.host_id,
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            is_primary_occupant: schedule.is_primary_occupant,
            is_extendable: schedule.is_extendable,
            student_id: schedule.student_id,
            gender: schedule.gender,
            nationality: schedule.nationality.clone(),
        }
    }
}

/// A draft that passed the full validation and derivation pipeline
///
/// Only the scheduling validator can build one. Repositories accept nothing
/// else for writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSchedule {
    draft: ScheduleDraft,
    duration_days: i64,
}

impl ValidatedSchedule {
    pub(crate) fn new(draft: ScheduleDraft, duration_days: i64) -> Self {
        Self {
            draft,
            duration_days,
        }
    }

    pub fn draft(&self) -> &ScheduleDraft {
        &self.draft
    }

    pub fn host_id(&self) -> RecordId {
        self.draft.host_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.draft.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.draft.end_date
    }

    pub fn is_primary_occupant(&self) -> bool {
        self.draft.is_primary_occupant
    }

    pub fn is_extendable(&self) -> bool {
        self.draft.is_extendable
    }

    pub fn student_id(&self) -> Option<RecordId> {
        self.draft.student_id
    }

    pub fn gender(&self) -> Option<Gender> {
        self.draft.gender
    }

    pub fn nationality(&self) -> Option<&str> {
        self.draft.nationality.as_deref()
    }

    pub fn duration_days(&self) -> i64 {
        self.duration_days
    }
}
