//! `AppError` and the `ApiResponse` envelope
//!
//! Every `/api` response has the same shape:
//!
//! ```json
//! { "code": 0,    "message": "OK", "data": { ... } }
//! { "code": 7401, "message": "Table 3 already reserved ...", "details": { "tableId": 3, "retriable": true } }
//! ```

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Structured details, ordered by key so error bodies are stable
pub type ErrorDetails = BTreeMap<String, Value>;

/// Request-level error: code + message + optional details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<ErrorDetails>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// 参数校验失败 (query/body 解析错误、未知区域等)
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// 存储层错误，消息只写日志，不回传细节
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Unified response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 0 on success, an [`ErrorCode`] value otherwise
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success.code()
    }
}

impl ApiResponse<()> {
    pub fn error(err: &AppError) -> Self {
        err.clone().into()
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();

        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(code = %self.code, message = %self.message, "System error occurred");
            // 内部细节不暴露给客户端
            let body = ApiResponse::<()>::from(AppError::new(self.code));
            return (status, axum::Json(body)).into_response();
        }

        (status, axum::Json(ApiResponse::<()>::from(self))).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = ErrorCode::try_from(self.code)
            .map(|c| c.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::ReservationConflict);
        assert_eq!(err.message, ErrorCode::ReservationConflict.message());
        assert!(err.details.is_none());
    }

    #[test]
    fn test_details_are_ordered() {
        let err = AppError::new(ErrorCode::CapacityExceeded)
            .with_detail("tableId", 3)
            .with_detail("capacity", 2)
            .with_detail("partySize", 5);
        let body = serde_json::to_string(&ApiResponse::<()>::error(&err)).unwrap();
        assert!(body.contains(r#""details":{"capacity":2,"partySize":5,"tableId":3}"#));
        assert_eq!(format!("{err}"), err.message);
    }

    #[test]
    fn test_success_envelope() {
        let response = ApiResponse::success(vec!["T1"]);
        assert!(response.is_success());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"code": 0, "message": "OK", "data": ["T1"]}));

        let back: ApiResponse<Vec<String>> = serde_json::from_value(json).unwrap();
        assert_eq!(back.data.unwrap(), ["T1"]);
    }

    #[test]
    fn test_error_status_codes() {
        let resp = AppError::validation("unknown zone").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::new(ErrorCode::ReservationConflict).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = AppError::database("disk full").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = ApiResponse::<()>::error(&AppError::new(ErrorCode::TableNotFound)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
