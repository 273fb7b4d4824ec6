//! Business logic services
//!
//! Services load what the scheduling rules need from the repositories, run
//! the rules, and persist the result.

pub mod context;
pub mod error;
pub mod health;
pub mod occupancy;
pub mod schedule;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use occupancy::OccupancyService;
pub use schedule::ScheduleService;
