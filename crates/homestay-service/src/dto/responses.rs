//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Record IDs are serialized as numbers and dates as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc};
use homestay_core::{Gender, RecordId};
use serde::Serialize;

// ============================================================================
// Schedule Responses
// ============================================================================

/// Acceptance schedule response
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub id: RecordId,
    pub host_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_primary_occupant: bool,
    pub is_extendable: bool,
    pub student_id: Option<RecordId>,
    pub gender: Option<Gender>,
    pub nationality: Option<String>,
    pub duration_days: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// All schedules of one host
#[derive(Debug, Clone, Serialize)]
pub struct HostSchedulesResponse {
    pub host_id: RecordId,
    pub host_name: String,
    pub schedules: Vec<ScheduleResponse>,
}

// ============================================================================
// Occupancy Responses
// ============================================================================

/// Schedule as listed in occupancy responses
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSummaryResponse {
    pub schedule_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_primary_occupant: bool,
    pub student_id: Option<RecordId>,
    pub student_name: Option<String>,
    pub student_stay_days: Option<i64>,
    pub gender: Option<Gender>,
    pub nationality: Option<String>,
}

/// Occupants of one host on a day
#[derive(Debug, Clone, Serialize)]
pub struct HostOccupancyResponse {
    pub host_id: RecordId,
    pub occupancy_count: usize,
    pub schedules: Vec<ScheduleSummaryResponse>,
}

/// Occupancy of every host on a day
#[derive(Debug, Clone, Serialize)]
pub struct DailyOccupancyResponse {
    pub date: NaiveDate,
    pub total_occupancy: usize,
    pub host_count: usize,
    pub occupancy_by_host: Vec<HostOccupancyResponse>,
}

/// Occupancy of a single host on a day
#[derive(Debug, Clone, Serialize)]
pub struct SingleHostOccupancyResponse {
    pub date: NaiveDate,
    pub host_id: RecordId,
    pub host_name: String,
    pub occupancy_count: usize,
    pub schedules: Vec<ScheduleSummaryResponse>,
}

/// Response of the single-date occupancy endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OccupancyResponse {
    All(DailyOccupancyResponse),
    Host(SingleHostOccupancyResponse),
}

/// Queried period of a range report
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PeriodResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Per-host count within one day
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HostCountResponse {
    pub host_id: RecordId,
    pub occupancy_count: usize,
}

/// One day of a range report
#[derive(Debug, Clone, Serialize)]
pub struct DayOccupancyResponse {
    pub date: NaiveDate,
    pub total_occupancy: usize,
    pub host_count: usize,
    pub hosts: Vec<HostCountResponse>,
}

/// Per-host totals over a range
#[derive(Debug, Clone, Serialize)]
pub struct HostRangeSummaryResponse {
    pub host_id: RecordId,
    pub total_days: usize,
    pub schedules: Vec<ScheduleSummaryResponse>,
}

/// Response of the range occupancy endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RangeOccupancyResponse {
    pub period: PeriodResponse,
    pub daily_occupancy: Vec<DayOccupancyResponse>,
    pub host_summary: Vec<HostRangeSummaryResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_single_host_occupancy_serialization() {
        let response = OccupancyResponse::Host(SingleHostOccupancyResponse {
            date: date("2024-01-15"),
            host_id: RecordId::new(1),
            host_name: "Taro Tanaka".to_string(),
            occupancy_count: 0,
            schedules: vec![],
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["host_id"], 1);
        assert_eq!(json["host_name"], "Taro Tanaka");
        assert_eq!(json["occupancy_count"], 0);
    }

    #[test]
    fn test_range_response_serialization() {
        let response = RangeOccupancyResponse {
            period: PeriodResponse {
                start_date: date("2024-01-10"),
                end_date: date("2024-01-25"),
            },
            daily_occupancy: vec![DayOccupancyResponse {
                date: date("2024-01-10"),
                total_occupancy: 1,
                host_count: 1,
                hosts: vec![HostCountResponse {
                    host_id: RecordId::new(1),
                    occupancy_count: 1,
                }],
            }],
            host_summary: vec![],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["period"]["start_date"], "2024-01-10");
        assert_eq!(json["daily_occupancy"][0]["hosts"][0]["occupancy_count"], 1);
        assert!(json["host_summary"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }
}
