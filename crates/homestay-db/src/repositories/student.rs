//! PostgreSQL implementation of StudentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use homestay_core::entities::Student;
use homestay_core::traits::{RepoResult, StudentRepository};
use homestay_core::value_objects::RecordId;

use crate::models::StudentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of StudentRepository
#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    /// Create a new PgStudentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Student>> {
        let result = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, first_name, last_name, gender, arrival_date, leaving_date,
                   created_at, updated_at
            FROM students
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Student::try_from).transpose()
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<Student>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, first_name, last_name, gender, arrival_date, leaving_date,
                   created_at, updated_at
            FROM students
            WHERE id = ANY($1)
            ORDER BY id
            ",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Student::try_from).collect()
    }
}
