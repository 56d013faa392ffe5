//! Availability API Handlers

use axum::extract::{Query, State, rejection::QueryRejection};
use shared::models::{AvailabilityQuery, AvailabilityRecord};

use crate::api::rejection;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/availability?date=&time=&partySize=&zone= - 每张桌台的占用/适配标记
pub async fn query(
    State(state): State<ServerState>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> AppResult<ApiResponse<Vec<AvailabilityRecord>>> {
    let Query(query) = query.map_err(rejection)?;
    let records = state.engine.availability(&query)?;
    Ok(ApiResponse::success(records))
}
