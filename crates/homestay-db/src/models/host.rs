//! Host database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for hosts table
#[derive(Debug, Clone, FromRow)]
pub struct HostModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: String,
    /// 'Great', 'Ok' or 'NG'
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
