//! Maintenance record handlers
//!
//! List, create, update and delete responses are passed through from Supabase
//! with the remote status code and body.

use axum::Json;
use axum::extract::{Path, State};
use shared::models::{
    Maintenance, MaintenanceCreate, MaintenanceFieldsUpdate, UpdateMaintenanceRequest,
};

use crate::api::extract::AppJson;
use crate::error::ServiceResult;
use crate::state::AppState;
use crate::supabase::RestResponse;

// ── GET /api/maintenance ──

pub async fn list(State(state): State<AppState>) -> ServiceResult<RestResponse> {
    state.maintenance.list_all().await
}

// ── POST /api/maintenance ──

pub async fn create(
    State(state): State<AppState>,
    AppJson(req): AppJson<MaintenanceCreate>,
) -> ServiceResult<RestResponse> {
    state.maintenance.create(&req).await
}

// ── GET /api/maintenance/{mid} ──

pub async fn get(
    State(state): State<AppState>,
    Path(mid): Path<i64>,
) -> ServiceResult<Json<Maintenance>> {
    Ok(Json(state.maintenance.get_by_id(mid).await?))
}

// ── GET /api/maintenance/inspection/{inspection_number} ──

pub async fn list_by_inspection(
    State(state): State<AppState>,
    Path(inspection_number): Path<String>,
) -> ServiceResult<RestResponse> {
    state
        .maintenance
        .list_by_inspection_number(&inspection_number)
        .await
}

// ── PUT /api/maintenance/{mid} ──

pub async fn update(
    State(state): State<AppState>,
    Path(mid): Path<i64>,
    AppJson(req): AppJson<UpdateMaintenanceRequest>,
) -> ServiceResult<RestResponse> {
    state.maintenance.update(mid, &req).await
}

// ── PATCH /api/maintenance/{mid} ──

pub async fn update_fields(
    State(state): State<AppState>,
    Path(mid): Path<i64>,
    AppJson(update): AppJson<MaintenanceFieldsUpdate>,
) -> ServiceResult<RestResponse> {
    state.maintenance.update_fields(mid, &update).await
}

// ── DELETE /api/maintenance/{mid} ──

pub async fn delete(
    State(state): State<AppState>,
    Path(mid): Path<i64>,
) -> ServiceResult<RestResponse> {
    state.maintenance.delete(mid).await
}
