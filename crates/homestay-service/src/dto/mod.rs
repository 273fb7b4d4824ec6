//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities and reports to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateScheduleRequest, UpdateScheduleRequest};

pub use responses::{
    DailyOccupancyResponse, DayOccupancyResponse, HealthChecks, HealthResponse,
    HostCountResponse, HostOccupancyResponse, HostRangeSummaryResponse, HostSchedulesResponse,
    OccupancyResponse, PeriodResponse, RangeOccupancyResponse, ReadinessResponse,
    ScheduleResponse, ScheduleSummaryResponse, SingleHostOccupancyResponse,
};
