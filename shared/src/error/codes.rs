//! Error codes
//!
//! | Range | Category |
//! |-------|----------|
//! | 0xxx | general / request validation |
//! | 70xx | table catalog |
//! | 74xx | reservation admission |
//! | 9xxx | system |
//!
//! Codes travel as plain numbers (`"code": 7401`); clients localize them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    Success = 0,
    /// Query string, body or zone could not be understood
    ValidationFailed = 2,

    TableNotFound = 7001,

    /// Another reservation already holds an overlapping window (retriable)
    ReservationConflict = 7401,
    CapacityExceeded = 7402,
    /// Date/time cannot be parsed into a valid slot
    InvalidSlot = 7403,
    InvalidPartySize = 7404,

    InternalError = 9001,
    DatabaseError = 9002,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::Success,
        ErrorCode::ValidationFailed,
        ErrorCode::TableNotFound,
        ErrorCode::ReservationConflict,
        ErrorCode::CapacityExceeded,
        ErrorCode::InvalidSlot,
        ErrorCode::InvalidPartySize,
        ErrorCode::InternalError,
        ErrorCode::DatabaseError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Caller may retry after re-reading availability
    #[inline]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, ErrorCode::ReservationConflict)
    }

    /// Default English message (developer-facing)
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "OK",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::ReservationConflict => "Table already reserved at that time",
            ErrorCode::CapacityExceeded => "Party size exceeds table capacity",
            ErrorCode::InvalidSlot => "Invalid reservation date or time",
            ErrorCode::InvalidPartySize => "Party size must be positive",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Storage unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not one of our codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .into_iter()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
