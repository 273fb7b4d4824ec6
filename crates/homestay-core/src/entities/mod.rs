//! Domain entities - core business objects

mod host;
mod schedule;
mod student;

pub use host::{Host, HostStatus};
pub use schedule::{Schedule, ScheduleDraft, ValidatedSchedule};
pub use student::Student;
