//! # homestay-core
//!
//! Domain layer for acceptance schedules: entities, value objects, the
//! scheduling rules (validation, derivation, occupancy) and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod scheduling;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Host, HostStatus, Schedule, ScheduleDraft, Student, ValidatedSchedule};
pub use error::DomainError;
pub use scheduling::{
    occupancy_for_date, occupancy_for_range, OccupancyReport, PastStartRule,
    RangeOccupancyReport, SchedulePolicy, ScheduleValidator,
};
pub use traits::{
    Clock, FixedClock, HostRepository, RepoResult, ScheduleRepository, StudentLookup,
    StudentRepository, SystemClock,
};
pub use value_objects::{DateRange, Gender, RecordId};
