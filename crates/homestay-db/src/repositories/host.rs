//! PostgreSQL implementation of HostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use homestay_core::entities::Host;
use homestay_core::traits::{HostRepository, RepoResult};
use homestay_core::value_objects::RecordId;

use crate::models::HostModel;

use super::error::map_db_error;

/// PostgreSQL implementation of HostRepository
#[derive(Clone)]
pub struct PgHostRepository {
    pool: PgPool,
}

impl PgHostRepository {
    /// Create a new PgHostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HostRepository for PgHostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Host>> {
        let result = sqlx::query_as::<_, HostModel>(
            r"
            SELECT id, first_name, last_name, phone, address, status, created_at, updated_at
            FROM hosts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Host::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgHostRepository>();
    }
}
