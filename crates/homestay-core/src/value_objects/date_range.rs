//! Calendar date ranges
//!
//! All schedule arithmetic works on `NaiveDate` (no time component, no
//! timezone). Ranges are inclusive on both ends: a stay from Feb 1 to Feb 10
//! occupies Feb 10, so a second stay starting Feb 10 collides with it.

use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::error::DomainError;

/// ISO calendar-date format used on the wire
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// True iff `start` is strictly before `end`
#[inline]
pub fn is_valid_range(start: NaiveDate, end: NaiveDate) -> bool {
    start < end
}

/// True iff the two ranges share at least one calendar day
#[inline]
pub fn overlaps(a: &DateRange, b: &DateRange) -> bool {
    a.start <= b.end && a.end >= b.start
}

/// Whole days from `start` to `end` (negative when `end` precedes `start`)
#[inline]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Every calendar day from `start` to `end` inclusive, ascending
///
/// Empty when `start > end`. Each call returns a fresh iterator.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> DaysInclusive {
    DaysInclusive {
        next: (start <= end).then_some(start),
        end,
    }
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DomainError> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DomainError::InvalidDate(value.to_string()));
    }

    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(value.to_string()))
}

/// Lazy ascending day sequence produced by [`days_inclusive`]
#[derive(Debug, Clone)]
pub struct DaysInclusive {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DaysInclusive {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| *d <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) => {
                let remaining = (days_between(current, self.end) + 1) as usize;
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DaysInclusive {}

impl FusedIterator for DaysInclusive {}

/// Inclusive calendar-date interval with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range; `start` may equal `end` (a single day)
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering exactly one day
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Range between two dates in whichever order they are given
    pub(crate) fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check whether `date` falls inside the range
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Check whether two ranges share at least one day
    #[inline]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        overlaps(self, other)
    }

    /// Common days of both ranges, if any
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Iterate every day of the range
    pub fn days(&self) -> DaysInclusive {
        days_inclusive(self.start, self.end)
    }

    /// Number of calendar days covered, counting both ends
    pub fn len_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }
}
