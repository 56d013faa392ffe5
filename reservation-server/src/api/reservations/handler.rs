//! Reservation API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use http::StatusCode;
use shared::models::{Reservation, ReservationCreate};

use crate::api::rejection;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// POST /api/reservations - 创建预订
///
/// 冲突返回 409 (`ReservationConflict`)，客户端应重新查询可用性后再选桌
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ReservationCreate>, JsonRejection>,
) -> AppResult<(StatusCode, ApiResponse<Reservation>)> {
    let Json(payload) = payload.map_err(rejection)?;
    let reservation = state.engine.create_reservation(&payload).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(reservation)))
}
