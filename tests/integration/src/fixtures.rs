//! Test fixtures and data generators
//!
//! Hosts and students have no HTTP surface, so they are inserted directly.
//! Every test seeds its own host; schedules of different tests never meet.

use anyhow::Result;
use chrono::{Days, NaiveDate, Utc};
use homestay_core::Gender;
use homestay_db::PgPool;
use serde::{Deserialize, Serialize};

/// A date `days` after today
pub fn days_from_now(days: u64) -> NaiveDate {
    Utc::now().date_naive() + Days::new(days)
}

/// A date `days` before today
pub fn days_ago(days: u64) -> NaiveDate {
    Utc::now().date_naive() - Days::new(days)
}

/// Insert a host and return its ID
pub async fn seed_host(pool: &PgPool, first_name: &str, last_name: &str) -> Result<i64> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO hosts (first_name, last_name, address, status) VALUES ($1, $2, $3, 'Great') RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind("1-2-3 Shibuya, Tokyo")
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Insert a student and return their ID
pub async fn seed_student(pool: &PgPool, first_name: &str, last_name: &str, gender: Gender) -> Result<i64> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO students (first_name, last_name, gender, arrival_date) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(gender.as_str())
    .bind(Utc::now().date_naive())
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Create schedule request body
#[derive(Debug, Clone, Serialize)]
pub struct NewSchedule {
    pub host_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_primary_occupant: bool,
    pub is_extendable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

impl NewSchedule {
    pub fn new(host_id: i64, start_date: NaiveDate, end_date: NaiveDate) -> Self {
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

    pub fn primary_occupant(mut self, student_id: i64) -> Self {
        self.is_primary_occupant = true;
        self.student_id = Some(student_id);
        self
    }
}

/// Schedule response body
#[derive(Debug, Deserialize)]
pub struct ScheduleBody {
    pub id: i64,
    pub host_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_primary_occupant: bool,
    pub is_extendable: bool,
    pub student_id: Option<i64>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub duration_days: i64,
}

/// Host schedules listing body
#[derive(Debug, Deserialize)]
pub struct HostSchedulesBody {
    pub host_id: i64,
    pub host_name: String,
    pub schedules: Vec<ScheduleBody>,
}

/// Schedule summary inside occupancy bodies
#[derive(Debug, Deserialize)]
pub struct SummaryBody {
    pub schedule_id: i64,
    pub student_id: Option<i64>,
    pub student_name: Option<String>,
    pub student_stay_days: Option<i64>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

/// Single-host occupancy body
#[derive(Debug, Deserialize)]
pub struct HostOccupancyBody {
    pub date: NaiveDate,
    pub host_id: i64,
    pub host_name: String,
    pub occupancy_count: usize,
    pub schedules: Vec<SummaryBody>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodBody {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct HostCountBody {
    pub host_id: i64,
    pub occupancy_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct DayBody {
    pub date: NaiveDate,
    pub total_occupancy: usize,
    pub host_count: usize,
    pub hosts: Vec<HostCountBody>,
}

#[derive(Debug, Deserialize)]
pub struct HostSummaryBody {
    pub host_id: i64,
    pub total_days: usize,
    pub schedules: Vec<SummaryBody>,
}

/// Range occupancy body
#[derive(Debug, Deserialize)]
pub struct RangeBody {
    pub period: PeriodBody,
    pub daily_occupancy: Vec<DayBody>,
    pub host_summary: Vec<HostSummaryBody>,
}
