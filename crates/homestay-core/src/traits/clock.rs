//! Source of "today" for date rules

use chrono::{NaiveDate, Utc};

/// Calendar date provider
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock; today is the current UTC calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
