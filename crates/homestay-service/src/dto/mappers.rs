//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities and reports to response DTOs.

use homestay_core::entities::{Host, Schedule};
use homestay_core::scheduling::{
    DailyOccupancy, DayOccupancy, HostCount, HostDayOccupancy, HostOccupancy, HostRangeSummary,
    RangeOccupancyReport, ScheduleSummary,
};

use super::responses::{
    DailyOccupancyResponse, DayOccupancyResponse, HostCountResponse, HostOccupancyResponse,
    HostRangeSummaryResponse, HostSchedulesResponse, PeriodResponse, RangeOccupancyResponse,
    ScheduleResponse, ScheduleSummaryResponse, SingleHostOccupancyResponse,
};

// ============================================================================
// Schedule Mappers
// ============================================================================

impl From<&Schedule> for ScheduleResponse {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id,
            host_id: schedule.host_id,
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            is_primary_occupant: schedule.is_primary_occupant,
            is_extendable: schedule.is_extendable,
            student_id: schedule.student_id,
            gender: schedule.gender,
            nationality: schedule.nationality.clone(),
            duration_days: schedule.duration_days(),
            created_at: schedule.created_at,
            updated_at: schedule.updated_at,
        }
    }
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self::from(&schedule)
    }
}

impl HostSchedulesResponse {
    pub fn new(host: &Host, schedules: &[Schedule]) -> Self {
        Self {
            host_id: host.id,
            host_name: host.full_name(),
            schedules: schedules.iter().map(ScheduleResponse::from).collect(),
        }
    }
}

// ============================================================================
// Occupancy Mappers
// ============================================================================

impl From<ScheduleSummary> for ScheduleSummaryResponse {
    fn from(summary: ScheduleSummary) -> Self {
        Self {
            schedule_id: summary.schedule_id,
            start_date: summary.start_date,
            end_date: summary.end_date,
            is_primary_occupant: summary.is_primary_occupant,
            student_id: summary.student_id,
            student_name: summary.student_name,
            student_stay_days: summary.student_stay_days,
            gender: summary.gender,
            nationality: summary.nationality,
        }
    }
}

fn summaries(schedules: Vec<ScheduleSummary>) -> Vec<ScheduleSummaryResponse> {
    schedules.into_iter().map(Into::into).collect()
}

impl From<HostOccupancy> for HostOccupancyResponse {
    fn from(host: HostOccupancy) -> Self {
        Self {
            host_id: host.host_id,
            occupancy_count: host.occupancy_count,
            schedules: summaries(host.schedules),
        }
    }
}

impl From<DailyOccupancy> for DailyOccupancyResponse {
    fn from(daily: DailyOccupancy) -> Self {
        Self {
            date: daily.date,
            total_occupancy: daily.total_occupancy,
            host_count: daily.host_count,
            occupancy_by_host: daily.occupancy_by_host.into_iter().map(Into::into).collect(),
        }
    }
}

impl SingleHostOccupancyResponse {
    pub fn new(report: HostDayOccupancy, host: &Host) -> Self {
        Self {
            date: report.date,
            host_id: report.host.host_id,
            host_name: host.full_name(),
            occupancy_count: report.host.occupancy_count,
            schedules: summaries(report.host.schedules),
        }
    }
}

impl From<HostCount> for HostCountResponse {
    fn from(count: HostCount) -> Self {
        Self {
            host_id: count.host_id,
            occupancy_count: count.occupancy_count,
        }
    }
}

impl From<DayOccupancy> for DayOccupancyResponse {
    fn from(day: DayOccupancy) -> Self {
        Self {
            date: day.date,
            total_occupancy: day.total_occupancy,
            host_count: day.host_count,
            hosts: day.hosts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<HostRangeSummary> for HostRangeSummaryResponse {
    fn from(summary: HostRangeSummary) -> Self {
        Self {
            host_id: summary.host_id,
            total_days: summary.total_days,
            schedules: summaries(summary.schedules),
        }
    }
}

impl From<RangeOccupancyReport> for RangeOccupancyResponse {
    fn from(report: RangeOccupancyReport) -> Self {
        Self {
            period: PeriodResponse {
                start_date: report.period.start(),
                end_date: report.period.end(),
            },
            daily_occupancy: report.daily_occupancy.into_iter().map(Into::into).collect(),
            host_summary: report.host_summary.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use homestay_core::RecordId;

    #[test]
    fn test_schedule_response_duration() {
        let schedule = Schedule {
            id: RecordId::new(1),
            host_id: RecordId::new(2),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            is_primary_occupant: false,
            is_extendable: true,
            student_id: None,
            gender: None,
            nationality: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let response = ScheduleResponse::from(&schedule);
        assert_eq!(response.duration_days, 10);
        assert!(response.is_extendable);
    }
}
