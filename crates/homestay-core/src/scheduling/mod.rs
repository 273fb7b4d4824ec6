//! Scheduling rules - validation, derivation and occupancy aggregation
//!
//! Everything here is a pure function of its inputs. "Today" and student
//! records are handed in by the caller.

mod deriver;
pub mod occupancy;
mod policy;
mod validator;

pub use deriver::{derive_duration, derive_primary_occupant_attributes};
pub use occupancy::{
    occupancy_for_date, occupancy_for_range, DailyOccupancy, DayOccupancy, HostCount,
    HostDayOccupancy, HostOccupancy, HostRangeSummary, OccupancyReport, RangeOccupancyReport,
    ScheduleSummary,
};
pub use policy::{
    PastStartRule, PastStartRuleParseError, SchedulePolicy, DEFAULT_MAX_OCCUPANCY_RANGE_DAYS,
    DEFAULT_PRIMARY_OCCUPANT_NATIONALITY,
};
pub use validator::ScheduleValidator;
