//! Acceptance schedule service
//!
//! Handles creating, updating, reading and deleting acceptance schedules.

use homestay_core::entities::{Host, Schedule, ScheduleDraft, Student};
use homestay_core::{DomainError, RecordId, ScheduleValidator, ValidatedSchedule};
use tracing::{info, instrument, warn};

use crate::dto::{CreateScheduleRequest, HostSchedulesResponse, ScheduleResponse, UpdateScheduleRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Acceptance schedule service
pub struct ScheduleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScheduleService<'a> {
    /// Create a new ScheduleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new acceptance schedule
    #[instrument(skip(self, request), fields(host_id = %request.host_id))]
    pub async fn create_schedule(
        &self,
        request: CreateScheduleRequest,
    ) -> ServiceResult<ScheduleResponse> {
        let draft = ScheduleDraft {
            host_id: request.host_id,
            start_date: request.start_date,
            end_date: request.end_date,
            is_primary_occupant: request.is_primary_occupant,
            is_extendable: request.is_extendable,
            student_id: request.student_id,
            gender: request.gender,
            nationality: request.nationality,
        };

        let validated = self.validate(&draft, None).await?;
        let schedule = self.ctx.schedule_repo().create(&validated).await?;

        info!(
            schedule_id = %schedule.id,
            host_id = %schedule.host_id,
            start_date = %schedule.start_date,
            end_date = %schedule.end_date,
            "Acceptance schedule created"
        );

        Ok(ScheduleResponse::from(&schedule))
    }

    /// Update an acceptance schedule
    ///
    /// Fields absent from the request keep their stored value; the merged
    /// record goes through the same validation as a new one.
    #[instrument(skip(self, request))]
    pub async fn update_schedule(
        &self,
        schedule_id: RecordId,
        request: UpdateScheduleRequest,
    ) -> ServiceResult<ScheduleResponse> {
        let existing = self.get_schedule_entity(schedule_id).await?;

        let mut draft = ScheduleDraft::from(&existing);
        if let Some(host_id) = request.host_id {
            draft.host_id = host_id;
        }
        if let Some(start_date) = request.start_date {
            draft.start_date = start_date;
        }
        if let Some(end_date) = request.end_date {
            draft.end_date = end_date;
        }
        if let Some(is_primary_occupant) = request.is_primary_occupant {
            draft.is_primary_occupant = is_primary_occupant;
        }
        if let Some(is_extendable) = request.is_extendable {
            draft.is_extendable = is_extendable;
        }
        if request.student_id.is_some() {
            draft.student_id = request.student_id;
        }
        if request.gender.is_some() {
            draft.gender = request.gender;
        }
        if request.nationality.is_some() {
            draft.nationality = request.nationality;
        }

        let validated = self.validate(&draft, Some(&existing)).await?;
        let schedule = self
            .ctx
            .schedule_repo()
            .update(schedule_id, &validated)
            .await?;

        info!(
            schedule_id = %schedule.id,
            host_id = %schedule.host_id,
            start_date = %schedule.start_date,
            end_date = %schedule.end_date,
            "Acceptance schedule updated"
        );

        Ok(ScheduleResponse::from(&schedule))
    }

    /// Get schedule by ID
    #[instrument(skip(self))]
    pub async fn get_schedule(&self, schedule_id: RecordId) -> ServiceResult<ScheduleResponse> {
        let schedule = self.get_schedule_entity(schedule_id).await?;
        Ok(ScheduleResponse::from(&schedule))
    }

    /// All schedules of a host, ordered by start date
    #[instrument(skip(self))]
    pub async fn list_host_schedules(
        &self,
        host_id: RecordId,
    ) -> ServiceResult<HostSchedulesResponse> {
        let host = self.require_host(host_id).await?;
        let schedules = self.ctx.schedule_repo().find_by_host(host_id).await?;
        Ok(HostSchedulesResponse::new(&host, &schedules))
    }

    /// Delete a schedule
    #[instrument(skip(self))]
    pub async fn delete_schedule(&self, schedule_id: RecordId) -> ServiceResult<()> {
        self.ctx.schedule_repo().delete(schedule_id).await?;
        info!(schedule_id = %schedule_id, "Acceptance schedule deleted");
        Ok(())
    }

    async fn get_schedule_entity(&self, schedule_id: RecordId) -> ServiceResult<Schedule> {
        let schedule = self
            .ctx
            .schedule_repo()
            .find_by_id(schedule_id)
            .await?
            .ok_or(DomainError::ScheduleNotFound(schedule_id))?;
        Ok(schedule)
    }

    async fn require_host(&self, host_id: RecordId) -> ServiceResult<Host> {
        let host = self
            .ctx
            .host_repo()
            .find_by_id(host_id)
            .await?
            .ok_or(DomainError::HostNotFound(host_id))?;
        Ok(host)
    }

    async fn load_student(&self, student_id: Option<RecordId>) -> ServiceResult<Vec<Student>> {
        let Some(student_id) = student_id else {
            return Ok(Vec::new());
        };
        let student = self
            .ctx
            .student_repo()
            .find_by_id(student_id)
            .await?
            .ok_or(DomainError::StudentNotFound(student_id))?;
        Ok(vec![student])
    }

    /// Load collaborators and run the scheduling rules on `draft`
    ///
    /// `existing` is the stored record when updating.
    async fn validate(
        &self,
        draft: &ScheduleDraft,
        existing: Option<&Schedule>,
    ) -> ServiceResult<ValidatedSchedule> {
        self.require_host(draft.host_id).await?;
        let students = self.load_student(draft.student_id).await?;

        let window_start = draft.start_date.min(draft.end_date);
        let window_end = draft.start_date.max(draft.end_date);
        let neighbours = self
            .ctx
            .schedule_repo()
            .find_overlapping(window_start, window_end, Some(draft.host_id))
            .await?;

        let mut validator = ScheduleValidator::new(self.ctx.policy(), self.ctx.clock().today())
            .with_students(&students);
        if let Some(existing) = existing {
            validator = validator.with_original_start(existing.start_date);
        }

        validator
            .validate(draft, &neighbours, existing.map(|s| s.id))
            .map_err(|e| {
                warn!(
                    host_id = %draft.host_id,
                    start_date = %draft.start_date,
                    end_date = %draft.end_date,
                    code = e.code(),
                    "Acceptance schedule rejected"
                );
                e.into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, context_on, date, InMemorySchedules};
    use homestay_core::{Gender, PastStartRule, SchedulePolicy};
    use std::sync::Arc;

    fn create_request(host_id: i64, start: &str, end: &str) -> CreateScheduleRequest {
        CreateScheduleRequest {
            host_id: RecordId::new(host_id),
            start_date: date(start),
            end_date: date(end),
            is_primary_occupant: false,
            is_extendable: false,
            student_id: None,
            gender: None,
            nationality: None,
        }
    }

    fn domain_code(err: &crate::ServiceError) -> &'static str {
        err.as_domain().map_or("", DomainError::code)
    }

    #[tokio::test]
    async fn test_create_schedule() {
        let ctx = context();
        let service = ScheduleService::new(&ctx);

        let created = service
            .create_schedule(create_request(1, "2024-01-10", "2024-01-20"))
            .await
            .unwrap();

        assert_eq!(created.host_id, RecordId::new(1));
        assert_eq!(created.duration_days, 10);
        assert!(created.gender.is_none());
        assert!(created.nationality.is_none());
    }

    #[tokio::test]
    async fn test_create_primary_occupant_derives_attributes() {
        let ctx = context();
        let service = ScheduleService::new(&ctx);

        let mut request = create_request(1, "2024-01-10", "2024-01-20");
        request.is_primary_occupant = true;
        request.student_id = Some(RecordId::new(10));
        request.gender = Some(Gender::Male);
        request.nationality = Some("France".to_string());

        let created = service.create_schedule(request).await.unwrap();
        assert_eq!(created.gender, Some(Gender::Female));
        assert_eq!(created.nationality.as_deref(), Some("Japan"));
    }

    #[tokio::test]
    async fn test_boundary_touch_is_rejected() {
        let ctx = context();
        let service = ScheduleService::new(&ctx);

        let first = service
            .create_schedule(create_request(1, "2024-02-01", "2024-02-10"))
            .await
            .unwrap();
        let err = service
            .create_schedule(create_request(1, "2024-02-10", "2024-02-15"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        match err.as_domain() {
            Some(DomainError::ScheduleOverlap { conflicting_id, .. }) => {
                assert_eq!(*conflicting_id, Some(first.id));
            }
            other => panic!("expected overlap, got {other:?}"),
        }

        // A different host is unaffected
        assert!(service
            .create_schedule(create_request(2, "2024-02-10", "2024-02-15"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_references() {
        let ctx = context();
        let service = ScheduleService::new(&ctx);

        let err = service
            .create_schedule(create_request(99, "2024-01-10", "2024-01-20"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(domain_code(&err), "UNKNOWN_HOST");

        let mut request = create_request(1, "2024-01-10", "2024-01-20");
        request.student_id = Some(RecordId::new(404));
        let err = service.create_schedule(request).await.unwrap_err();
        assert_eq!(domain_code(&err), "UNKNOWN_STUDENT");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_dates() {
        let ctx = context();
        let service = ScheduleService::new(&ctx);

        let err = service
            .create_schedule(create_request(1, "2024-01-20", "2024-01-10"))
            .await
            .unwrap_err();
        assert_eq!(domain_code(&err), "INVALID_RANGE");

        let err = service
            .create_schedule(create_request(1, "2023-12-20", "2024-01-10"))
            .await
            .unwrap_err();
        assert_eq!(domain_code(&err), "PAST_START_DATE");

        let mut request = create_request(1, "2024-01-10", "2024-01-20");
        request.is_primary_occupant = true;
        let err = service.create_schedule(request).await.unwrap_err();
        assert_eq!(domain_code(&err), "MISSING_STUDENT_FOR_PRIMARY_OCCUPANT");
    }

    #[tokio::test]
    async fn test_update_excludes_itself_from_overlap() {
        let ctx = context();
        let service = ScheduleService::new(&ctx);

        let created = service
            .create_schedule(create_request(1, "2024-01-10", "2024-01-20"))
            .await
            .unwrap();

        let updated = service
            .update_schedule(
                created.id,
                UpdateScheduleRequest {
                    end_date: Some(date("2024-01-25")),
                    is_extendable: Some(true),
                    ..UpdateScheduleRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.start_date, date("2024-01-10"));
        assert_eq!(updated.end_date, date("2024-01-25"));
        assert_eq!(updated.duration_days, 15);
        assert!(updated.is_extendable);
    }

    #[tokio::test]
    async fn test_update_into_neighbour_is_rejected() {
        let ctx = context();
        let service = ScheduleService::new(&ctx);

        service
            .create_schedule(create_request(1, "2024-03-01", "2024-03-10"))
            .await
            .unwrap();
        let second = service
            .create_schedule(create_request(1, "2024-03-15", "2024-03-20"))
            .await
            .unwrap();

        let err = service
            .update_schedule(
                second.id,
                UpdateScheduleRequest {
                    start_date: Some(date("2024-03-10")),
                    ..UpdateScheduleRequest::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(domain_code(&err), "SCHEDULE_OVERLAP");
    }

    #[tokio::test]
    async fn test_update_unknown_schedule() {
        let ctx = context();
        let service = ScheduleService::new(&ctx);

        let err = service
            .update_schedule(RecordId::new(77), UpdateScheduleRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(domain_code(&err), "UNKNOWN_SCHEDULE");
    }

    #[tokio::test]
    async fn test_past_start_rule_on_update() {
        let schedules = Arc::new(InMemorySchedules::default());
        let before = context_on(date("2024-01-01"), SchedulePolicy::default(), schedules.clone());
        let created = ScheduleService::new(&before)
            .create_schedule(create_request(1, "2024-01-10", "2024-01-20"))
            .await
            .unwrap();

        let extend = || UpdateScheduleRequest {
            is_extendable: Some(true),
            ..UpdateScheduleRequest::default()
        };

        // The stay has started: "always" rejects any edit of it
        let always = context_on(date("2024-01-15"), SchedulePolicy::default(), schedules.clone());
        let err = ScheduleService::new(&always)
            .update_schedule(created.id, extend())
            .await
            .unwrap_err();
        assert_eq!(domain_code(&err), "PAST_START_DATE");

        let when_changed = SchedulePolicy {
            past_start_rule: PastStartRule::WhenStartChanges,
            ..SchedulePolicy::default()
        };
        let lenient = context_on(date("2024-01-15"), when_changed, schedules);
        let service = ScheduleService::new(&lenient);
        let updated = service.update_schedule(created.id, extend()).await.unwrap();
        assert!(updated.is_extendable);

        let err = service
            .update_schedule(
                created.id,
                UpdateScheduleRequest {
                    start_date: Some(date("2024-01-12")),
                    ..UpdateScheduleRequest::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(domain_code(&err), "PAST_START_DATE");
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let ctx = context();
        let service = ScheduleService::new(&ctx);

        let late = service
            .create_schedule(create_request(1, "2024-05-01", "2024-05-10"))
            .await
            .unwrap();
        let early = service
            .create_schedule(create_request(1, "2024-02-01", "2024-02-10"))
            .await
            .unwrap();

        let listing = service.list_host_schedules(RecordId::new(1)).await.unwrap();
        assert_eq!(listing.host_name, "Taro Tanaka");
        let ids: Vec<_> = listing.schedules.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![early.id, late.id]);

        service.delete_schedule(early.id).await.unwrap();
        let err = service.get_schedule(early.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = service.delete_schedule(early.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = service.list_host_schedules(RecordId::new(99)).await.unwrap_err();
        assert_eq!(domain_code(&err), "UNKNOWN_HOST");
    }
}
