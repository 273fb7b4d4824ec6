//! Ports consumed by the scheduling core

mod clock;
mod lookup;
mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
pub use lookup::StudentLookup;
pub use repositories::{HostRepository, RepoResult, ScheduleRepository, StudentRepository};
