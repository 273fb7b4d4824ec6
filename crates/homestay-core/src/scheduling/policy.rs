//! Tunable scheduling rules

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Nationality recorded on primary-occupant schedules unless configured
pub const DEFAULT_PRIMARY_OCCUPANT_NATIONALITY: &str = "Japan";

/// Longest occupancy range report, in days, unless configured
pub const DEFAULT_MAX_OCCUPANCY_RANGE_DAYS: u32 = 366;

/// When the "start date not in the past" rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PastStartRule {
    /// Every create and update
    #[default]
    Always,
    /// Creates, and updates that move the start date
    WhenStartChanges,
}

impl PastStartRule {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::WhenStartChanges => "when_start_changes",
        }
    }
}

impl fmt::Display for PastStartRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown past start rule: {0:?} (expected \"always\" or \"when_start_changes\")")]
pub struct PastStartRuleParseError(pub String);

impl FromStr for PastStartRule {
    type Err = PastStartRuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "when_start_changes" => Ok(Self::WhenStartChanges),
            _ => Err(PastStartRuleParseError(s.to_string())),
        }
    }
}

/// Scheduling policy shared by every validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePolicy {
    pub primary_occupant_nationality: String,
    pub past_start_rule: PastStartRule,
    pub max_occupancy_range_days: u32,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            primary_occupant_nationality: DEFAULT_PRIMARY_OCCUPANT_NATIONALITY.to_string(),
            past_start_rule: PastStartRule::Always,
            max_occupancy_range_days: DEFAULT_MAX_OCCUPANCY_RANGE_DAYS,
        }
    }
}
