//! Acceptance schedule handlers
//!
//! Endpoints for creating and managing a host's acceptance schedules.

use axum::{extract::State, Json};
use homestay_service::{
    CreateScheduleRequest, HostSchedulesResponse, ScheduleResponse, ScheduleService,
    UpdateScheduleRequest,
};

use crate::extractors::{HostIdPath, ScheduleIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create an acceptance schedule
///
/// POST /host/schedules
pub async fn create_schedule(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateScheduleRequest>,
) -> ApiResult<Created<Json<ScheduleResponse>>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.create_schedule(request).await?;
    Ok(Created(Json(response)))
}

/// Get an acceptance schedule
///
/// GET /host/schedules/{id}
pub async fn get_schedule(
    State(state): State<AppState>,
    ScheduleIdPath(schedule_id): ScheduleIdPath,
) -> ApiResult<Json<ScheduleResponse>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.get_schedule(schedule_id).await?;
    Ok(Json(response))
}

/// Update an acceptance schedule
///
/// PUT /host/schedules/{id}
pub async fn update_schedule(
    State(state): State<AppState>,
    ScheduleIdPath(schedule_id): ScheduleIdPath,
    ValidatedJson(request): ValidatedJson<UpdateScheduleRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.update_schedule(schedule_id, request).await?;
    Ok(Json(response))
}

/// Delete an acceptance schedule
///
/// DELETE /host/schedules/{id}
pub async fn delete_schedule(
    State(state): State<AppState>,
    ScheduleIdPath(schedule_id): ScheduleIdPath,
) -> ApiResult<NoContent> {
    let service = ScheduleService::new(state.service_context());
    service.delete_schedule(schedule_id).await?;
    Ok(NoContent)
}

/// List a host's schedules
///
/// GET /host/{host_id}/schedules
pub async fn list_host_schedules(
    State(state): State<AppState>,
    HostIdPath(host_id): HostIdPath,
) -> ApiResult<Json<HostSchedulesResponse>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.list_host_schedules(host_id).await?;
    Ok(Json(response))
}
