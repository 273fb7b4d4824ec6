//! Occupancy query-string extractors
//!
//! Parameters arrive as raw strings so that each failure maps to its own
//! error code: a missing date is `INVALID_QUERY_PARAMETER`, a malformed one
//! `INVALID_DATE`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use chrono::NaiveDate;
use homestay_core::value_objects::parse_iso_date;
use homestay_core::RecordId;
use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Default, Deserialize)]
struct RawOccupancyQuery {
    date: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    host_id: Option<String>,
}

impl RawOccupancyQuery {
    async fn extract<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<Self, ApiError> {
        let Query(raw) = Query::<Self>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;
        Ok(raw)
    }

    fn required_date(value: Option<&str>, name: &str) -> Result<NaiveDate, ApiError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Ok(parse_iso_date(v)?),
            None => Err(ApiError::invalid_query(format!("{name} is required"))),
        }
    }

    /// Blank `host_id` is the same as an absent one
    fn host_id(&self) -> Result<Option<RecordId>, ApiError> {
        self.host_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                RecordId::parse(v)
                    .map_err(|e| ApiError::invalid_query(format!("Invalid host_id: {e}")))
            })
            .transpose()
    }
}

/// `?date=YYYY-MM-DD[&host_id=N]`
#[derive(Debug, Clone, Copy)]
pub struct DateQuery {
    pub date: NaiveDate,
    pub host_id: Option<RecordId>,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for DateQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = RawOccupancyQuery::extract(parts, state).await?;
        Ok(Self {
            date: RawOccupancyQuery::required_date(raw.date.as_deref(), "date")?,
            host_id: raw.host_id()?,
        })
    }
}

/// `?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD[&host_id=N]`
///
/// Ordering of the two dates is checked by the service.
#[derive(Debug, Clone, Copy)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub host_id: Option<RecordId>,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for DateRangeQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = RawOccupancyQuery::extract(parts, state).await?;
        Ok(Self {
            start_date: RawOccupancyQuery::required_date(raw.start_date.as_deref(), "start_date")?,
            end_date: RawOccupancyQuery::required_date(raw.end_date.as_deref(), "end_date")?,
            host_id: raw.host_id()?,
        })
    }
}
