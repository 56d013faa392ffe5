//! Dining Table API Handlers

use axum::extract::State;
use shared::models::DiningTable;

use crate::core::ServerState;
use crate::utils::ApiResponse;

/// GET /api/tables - 获取所有桌台 (按编号排序)
pub async fn list(State(state): State<ServerState>) -> ApiResponse<Vec<DiningTable>> {
    ApiResponse::success(state.engine.list_tables())
}
