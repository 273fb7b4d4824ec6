//! PostgreSQL implementation of ScheduleRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use homestay_core::entities::{Schedule, ValidatedSchedule};
use homestay_core::traits::{RepoResult, ScheduleRepository};
use homestay_core::value_objects::RecordId;

use crate::mappers::ScheduleWrite;
use crate::models::ScheduleModel;

use super::error::{map_db_error, map_schedule_write_error, schedule_not_found};

/// PostgreSQL implementation of ScheduleRepository
#[derive(Clone)]
pub struct PgScheduleRepository {
    pool: PgPool,
}

impl PgScheduleRepository {
    /// Create a new PgScheduleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_schedules(models: Vec<ScheduleModel>) -> RepoResult<Vec<Schedule>> {
    models.into_iter().map(Schedule::try_from).collect()
}

#[async_trait]
impl ScheduleRepository for PgScheduleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Schedule>> {
        let result = sqlx::query_as::<_, ScheduleModel>(
            r"
            SELECT id, host_id, start_date, end_date, is_primary_occupant, is_extendable,
                   student_id, gender, nationality, duration_days, created_at, updated_at
            FROM acceptance_schedules
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Schedule::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_host(&self, host_id: RecordId) -> RepoResult<Vec<Schedule>> {
        let results = sqlx::query_as::<_, ScheduleModel>(
            r"
            SELECT id, host_id, start_date, end_date, is_primary_occupant, is_extendable,
                   student_id, gender, nationality, duration_days, created_at, updated_at
            FROM acceptance_schedules
            WHERE host_id = $1
            ORDER BY start_date, id
            ",
        )
        .bind(host_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_schedules(results)
    }

    #[instrument(skip(self))]
    async fn find_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        host_id: Option<RecordId>,
    ) -> RepoResult<Vec<Schedule>> {
        let results = sqlx::query_as::<_, ScheduleModel>(
            r"
            SELECT id, host_id, start_date, end_date, is_primary_occupant, is_extendable,
                   student_id, gender, nationality, duration_days, created_at, updated_at
            FROM acceptance_schedules
            WHERE start_date <= $2
              AND end_date >= $1
              AND ($3::BIGINT IS NULL OR host_id = $3)
            ORDER BY host_id, start_date, id
            ",
        )
        .bind(start)
        .bind(end)
        .bind(host_id.map(RecordId::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_schedules(results)
    }

    #[instrument(skip(self, schedule), fields(host_id = %schedule.host_id()))]
    async fn create(&self, schedule: &ValidatedSchedule) -> RepoResult<Schedule> {
        let row = ScheduleWrite::new(schedule);
        let result = sqlx::query_as::<_, ScheduleModel>(
            r"
            INSERT INTO acceptance_schedules (
                host_id, start_date, end_date, is_primary_occupant, is_extendable,
                student_id, gender, nationality, duration_days
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, host_id, start_date, end_date, is_primary_occupant, is_extendable,
                      student_id, gender, nationality, duration_days, created_at, updated_at
            ",
        )
        .bind(row.host_id)
        .bind(row.start_date)
        .bind(row.end_date)
        .bind(row.is_primary_occupant)
        .bind(row.is_extendable)
        .bind(row.student_id)
        .bind(row.gender)
        .bind(row.nationality)
        .bind(row.duration_days)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_schedule_write_error(e, schedule.host_id(), schedule.student_id()))?;

        Schedule::try_from(result)
    }

    #[instrument(skip(self, schedule), fields(host_id = %schedule.host_id()))]
    async fn update(&self, id: RecordId, schedule: &ValidatedSchedule) -> RepoResult<Schedule> {
        let row = ScheduleWrite::new(schedule);
        let result = sqlx::query_as::<_, ScheduleModel>(
            r"
            UPDATE acceptance_schedules
            SET host_id = $2, start_date = $3, end_date = $4, is_primary_occupant = $5,
                is_extendable = $6, student_id = $7, gender = $8, nationality = $9,
                duration_days = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING id, host_id, start_date, end_date, is_primary_occupant, is_extendable,
                      student_id, gender, nationality, duration_days, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .bind(row.host_id)
        .bind(row.start_date)
        .bind(row.end_date)
        .bind(row.is_primary_occupant)
        .bind(row.is_extendable)
        .bind(row.student_id)
        .bind(row.gender)
        .bind(row.nationality)
        .bind(row.duration_days)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_schedule_write_error(e, schedule.host_id(), schedule.student_id()))?;

        match result {
            Some(model) => Schedule::try_from(model),
            None => Err(schedule_not_found(id)),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM acceptance_schedules
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(schedule_not_found(id));
        }

        Ok(())
    }
}
