//! Path parameter extractors
//!
//! Record IDs in paths must be positive integers; anything else is a 400
//! rather than axum's default plain-text rejection.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use homestay_core::RecordId;

use crate::response::ApiError;

async fn record_id_param<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
    name: &str,
) -> Result<RecordId, ApiError> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_path(e.body_text()))?;

    RecordId::parse(&raw).map_err(|e| ApiError::invalid_path(format!("Invalid {name}: {e}")))
}

/// `:id` of an acceptance schedule
#[derive(Debug, Clone, Copy)]
pub struct ScheduleIdPath(pub RecordId);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ScheduleIdPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        record_id_param(parts, state, "schedule id").await.map(Self)
    }
}

/// `:host_id` of a host
#[derive(Debug, Clone, Copy)]
pub struct HostIdPath(pub RecordId);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for HostIdPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        record_id_param(parts, state, "host_id").await.map(Self)
    }
}
