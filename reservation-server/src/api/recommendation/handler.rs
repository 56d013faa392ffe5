//! Recommendation API Handlers

use axum::extract::{Query, State, rejection::QueryRejection};
use shared::models::{Recommendation, RecommendationQuery};

use crate::api::rejection;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/recommendation?date=&time=&partySize=&zone=&features=
///
/// 无可用桌台时返回 `recommended: null`，不是错误
pub async fn recommend(
    State(state): State<ServerState>,
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> AppResult<ApiResponse<Recommendation>> {
    let Query(query) = query.map_err(rejection)?;
    let recommendation = state.engine.recommend(&query)?;
    Ok(ApiResponse::success(recommendation))
}
