//! Error code → HTTP status

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ValidationFailed | Self::InvalidSlot | Self::InvalidPartySize => {
                StatusCode::BAD_REQUEST
            }
            Self::TableNotFound => StatusCode::NOT_FOUND,
            Self::ReservationConflict => StatusCode::CONFLICT,
            // 业务规则不满足，请求本身格式正确
            Self::CapacityExceeded => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
