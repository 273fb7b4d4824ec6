//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies, record-ID paths and date queries.

mod path;
mod query;
mod validated;

pub use path::{HostIdPath, ScheduleIdPath};
pub use query::{DateQuery, DateRangeQuery};
pub use validated::ValidatedJson;
