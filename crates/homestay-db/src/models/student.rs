//! Student database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for students table
#[derive(Debug, Clone, FromRow)]
pub struct StudentModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub arrival_date: NaiveDate,
    pub leaving_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
