//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in homestay-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod host;
mod schedule;
mod student;

pub use host::PgHostRepository;
pub use schedule::PgScheduleRepository;
pub use student::PgStudentRepository;
