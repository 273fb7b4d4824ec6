//! Occupancy handlers
//!
//! Read-only endpoints reporting how many students each host has.

use axum::{extract::State, Json};
use homestay_service::{OccupancyResponse, OccupancyService, RangeOccupancyResponse};

use crate::extractors::{DateQuery, DateRangeQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Occupancy on one date
///
/// GET /host/occupancy?date=YYYY-MM-DD[&host_id=N]
pub async fn get_occupancy(
    State(state): State<AppState>,
    query: DateQuery,
) -> ApiResult<Json<OccupancyResponse>> {
    let service = OccupancyService::new(state.service_context());
    let response = service.occupancy_for_date(query.date, query.host_id).await?;
    Ok(Json(response))
}

/// Day-by-day occupancy over a period
///
/// GET /host/occupancy/range?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD[&host_id=N]
pub async fn get_occupancy_range(
    State(state): State<AppState>,
    query: DateRangeQuery,
) -> ApiResult<Json<RangeOccupancyResponse>> {
    let service = OccupancyService::new(state.service_context());
    let response = service
        .occupancy_for_range(query.start_date, query.end_date, query.host_id)
        .await?;
    Ok(Json(response))
}
