//! Schedule entity <-> model mapper

use chrono::NaiveDate;

use homestay_core::entities::{Schedule, ValidatedSchedule};
use homestay_core::error::DomainError;
use homestay_core::value_objects::{Gender, RecordId};

use crate::models::ScheduleModel;

/// Convert ScheduleModel to Schedule entity
impl TryFrom<ScheduleModel> for Schedule {
    type Error = DomainError;

    fn try_from(model: ScheduleModel) -> Result<Self, Self::Error> {
        let gender = model
            .gender
            .as_deref()
            .map(str::parse::<Gender>)
            .transpose()
            .map_err(|e| DomainError::DatabaseError(format!("acceptance_schedules.gender: {e}")))?;

        Ok(Schedule {
            id: RecordId::new(model.id),
            host_id: RecordId::new(model.host_id),
            start_date: model.start_date,
            end_date: model.end_date,
            is_primary_occupant: model.is_primary_occupant,
            is_extendable: model.is_extendable,
            student_id: model.student_id.map(RecordId::new),
            gender,
            nationality: model.nationality,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Column values for writing a validated schedule
pub struct ScheduleWrite<'a> {
    pub host_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_primary_occupant: bool,
    pub is_extendable: bool,
    pub student_id: Option<i64>,
    pub gender: Option<&'static str>,
    pub nationality: Option<&'a str>,
    pub duration_days: i64,
}

impl<'a> ScheduleWrite<'a> {
    pub fn new(schedule: &'a ValidatedSchedule) -> Self {
        Self {
            host_id: schedule.host_id().into_inner(),
            start_date: schedule.start_date(),
            end_date: schedule.end_date(),
            is_primary_occupant: schedule.is_primary_occupant(),
            is_extendable: schedule.is_extendable(),
            student_id: schedule.student_id().map(RecordId::into_inner),
            gender: schedule.gender().map(|g| g.as_str()),
            nationality: schedule.nationality(),
            duration_days: schedule.duration_days(),
        }
    }
}
