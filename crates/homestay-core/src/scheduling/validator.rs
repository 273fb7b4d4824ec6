//! Create/update admissibility of acceptance schedules

use chrono::NaiveDate;

use super::deriver::{derive_duration, derive_primary_occupant_attributes};
use super::policy::{PastStartRule, SchedulePolicy};
use crate::entities::{Schedule, ScheduleDraft, ValidatedSchedule};
use crate::error::DomainError;
use crate::traits::StudentLookup;
use crate::value_objects::{is_valid_range, RecordId};

/// Validates a candidate against the host's existing schedules
///
/// Checks run in a fixed order and the first failure is returned:
/// range, past start, overlap, primary-occupant student. A candidate that
/// passes gets its derived fields filled in.
pub struct ScheduleValidator<'a> {
    policy: &'a SchedulePolicy,
    today: NaiveDate,
    students: Option<&'a dyn StudentLookup>,
    original_start: Option<NaiveDate>,
}

impl<'a> ScheduleValidator<'a> {
    pub fn new(policy: &'a SchedulePolicy, today: NaiveDate) -> Self {
        Self {
            policy,
            today,
            students: None,
            original_start: None,
        }
    }

    /// Students used to derive primary-occupant attributes
    pub fn with_students(mut self, students: &'a dyn StudentLookup) -> Self {
        self.students = Some(students);
        self
    }

    /// Start date of the stored record being updated
    pub fn with_original_start(mut self, start: NaiveDate) -> Self {
        self.original_start = Some(start);
        self
    }

    pub fn validate(
        &self,
        candidate: &ScheduleDraft,
        existing_for_host: &[Schedule],
        exclude_id: Option<RecordId>,
    ) -> Result<ValidatedSchedule, DomainError> {
        if !is_valid_range(candidate.start_date, candidate.end_date) {
            return Err(DomainError::InvalidRange {
                start: candidate.start_date,
                end: candidate.end_date,
            });
        }

        self.check_past_start(candidate)?;
        Self::check_overlap(candidate, existing_for_host, exclude_id)?;

        if candidate.is_primary_occupant && candidate.student_id.is_none() {
            return Err(DomainError::MissingStudentForPrimaryOccupant);
        }

        let student = candidate
            .student_id
            .and_then(|id| self.students?.find_student(id));

        let mut draft = candidate.clone();
        derive_primary_occupant_attributes(&mut draft, student, self.policy);
        let duration = derive_duration(draft.start_date, draft.end_date);

        Ok(ValidatedSchedule::new(draft, duration))
    }

    fn check_past_start(&self, candidate: &ScheduleDraft) -> Result<(), DomainError> {
        let unchanged = self.original_start == Some(candidate.start_date);
        if self.policy.past_start_rule == PastStartRule::WhenStartChanges && unchanged {
            return Ok(());
        }

        if candidate.start_date < self.today {
            return Err(DomainError::PastStartDate {
                start: candidate.start_date,
                today: self.today,
            });
        }
        Ok(())
    }

    fn check_overlap(
        candidate: &ScheduleDraft,
        existing: &[Schedule],
        exclude_id: Option<RecordId>,
    ) -> Result<(), DomainError> {
        let range = candidate.range();
        let conflict = existing
            .iter()
            .filter(|s| s.host_id == candidate.host_id)
            .filter(|s| Some(s.id) != exclude_id)
            .find(|s| s.range().overlaps(&range));

        match conflict {
            Some(existing) => Err(DomainError::ScheduleOverlap {
                host_id: candidate.host_id,
                conflicting_id: Some(existing.id),
            }),
            None => Ok(()),
        }
    }
}
