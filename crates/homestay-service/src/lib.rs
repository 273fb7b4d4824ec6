//! # homestay-service
//!
//! Application layer: schedule and occupancy use cases, plus request and
//! response DTOs.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dto::{
    CreateScheduleRequest, DailyOccupancyResponse, HealthResponse, HostSchedulesResponse,
    OccupancyResponse, RangeOccupancyResponse, ReadinessResponse, ScheduleResponse,
    SingleHostOccupancyResponse, UpdateScheduleRequest,
};
pub use services::{
    HealthService, OccupancyService, ScheduleService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
