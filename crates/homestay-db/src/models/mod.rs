//! Database models - SQLx-compatible structs for PostgreSQL tables

mod host;
mod schedule;
mod student;

pub use host::HostModel;
pub use schedule::ScheduleModel;
pub use student::StudentModel;
