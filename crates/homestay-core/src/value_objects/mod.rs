//! Value objects - immutable types that represent domain concepts

pub mod date_range;
mod gender;
mod record_id;

pub use date_range::{
    days_between, days_inclusive, is_valid_range, overlaps, parse_iso_date, DateRange,
    DaysInclusive, ISO_DATE_FORMAT,
};
pub use gender::{Gender, GenderParseError};
pub use record_id::{RecordId, RecordIdParseError};
