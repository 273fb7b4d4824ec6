//! Host entity - a family providing lodging for students

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::value_objects::RecordId;

/// Agency rating of a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HostStatus {
    Great,
    #[default]
    Ok,
    #[serde(rename = "NG")]
    Ng,
}

impl HostStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Ok => "Ok",
            Self::Ng => "NG",
        }
    }
}

impl FromStr for HostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Great" => Ok(Self::Great),
            "Ok" => Ok(Self::Ok),
            "NG" => Ok(Self::Ng),
            other => Err(format!("unknown host status: {other}")),
        }
    }
}

/// Host entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: String,
    pub status: HostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Host {
    /// Display name used in occupancy reports
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Hosts rated `Great` or `Ok` may receive students
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.status, HostStatus::Great | HostStatus::Ok)
    }
}
