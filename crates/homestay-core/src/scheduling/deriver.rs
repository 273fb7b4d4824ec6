//! Derived schedule fields

use chrono::NaiveDate;

use super::policy::SchedulePolicy;
use crate::entities::{ScheduleDraft, Student};
use crate::value_objects::days_between;

/// Stay length in whole days
#[inline]
pub fn derive_duration(start: NaiveDate, end: NaiveDate) -> i64 {
    days_between(start, end)
}

/// Fill gender and nationality on a primary-occupant draft
///
/// Gender is copied only when the student was found. Nationality is set to
/// the policy value regardless. Drafts without the flag are left untouched.
pub fn derive_primary_occupant_attributes(
    draft: &mut ScheduleDraft,
    student: Option<&Student>,
    policy: &SchedulePolicy,
) {
    if !draft.is_primary_occupant {
        return;
    }
    if let Some(student) = student {
        draft.gender = Some(student.gender);
    }
    draft.nationality = Some(policy.primary_occupant_nationality.clone());
}
