//! 健康检查路由
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "ledger": "memory",
//!   "tables": 10,
//!   "reservations": 42,
//!   "uptimeSeconds": 3600
//! }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::{LedgerBackend, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// 状态 (ok | error)
    status: &'static str,
    version: &'static str,
    ledger: &'static str,
    tables: usize,
    /// 账本读取失败时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    reservations: Option<u64>,
    uptime_seconds: u64,
}

async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let reservations = match state.engine.reservation_count() {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed to read ledger");
            None
        }
    };

    let status = if reservations.is_some() { "ok" } else { "error" };
    let code = if reservations.is_some() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        ledger: match state.config.ledger_backend {
            LedgerBackend::Memory => "memory",
            LedgerBackend::Redb => "redb",
        },
        tables: state.engine.list_tables().len(),
        reservations,
        uptime_seconds: state.started_at.elapsed().as_secs(),
    };

    (code, Json(body))
}
