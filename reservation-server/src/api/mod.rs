//! API 路由模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 |
//! | /api/tables | GET | 桌台目录 |
//! | /api/availability | GET | 时段可用性 |
//! | /api/recommendation | GET | 桌台推荐 |
//! | /api/reservations | POST | 创建预订 |
//!
//! 所有 `/api` 响应使用 [`ApiResponse`](shared::error::ApiResponse) 包装。

pub mod availability;
pub mod health;
pub mod recommendation;
pub mod reservations;
pub mod tables;

use axum::{Router, middleware};
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::core::ServerState;
use crate::utils::AppError;

pub use crate::utils::{ApiResponse, AppResult};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    tracing::info!(target: "http_access", elapsed_ms, "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(tables::router())
        .merge(availability::router())
        .merge(recommendation::router())
        .merge(reservations::router())
}

/// Router with state and the tower-http middleware stack applied
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    with_middleware(build_app().with_state(state), timeout)
}

fn with_middleware(router: Router, timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            http::StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// 解析失败的 query/body 也返回统一的错误结构
pub(crate) fn rejection(err: impl std::fmt::Display) -> AppError {
    AppError::validation(err.to_string())
}
