//! Entity to model mappers
//!
//! This module provides conversions between domain entities (homestay-core) and database models.
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects
//! - `ScheduleWrite`: Prepare validated schedule data for inserts and updates

mod host;
mod schedule;
mod student;

pub use schedule::ScheduleWrite;
