//! Engine error taxonomy
//!
//! Every failure is terminal for the request that raised it. `Conflict` is the
//! only retriable one: the caller re-queries availability and picks again.

use chrono::NaiveDateTime;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use super::ledger::LedgerError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("Invalid party size: {0}")]
    InvalidPartySize(i32),

    #[error("Unknown zone: {0}")]
    InvalidZone(String),

    #[error("Table not found: {0}")]
    TableNotFound(i64),

    #[error("Party of {party_size} exceeds capacity {capacity} of table {table_id}")]
    CapacityExceeded {
        table_id: i64,
        capacity: i32,
        party_size: i32,
    },

    #[error("Table {table_id} already reserved between {start} and {end}")]
    Conflict {
        table_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, EngineError::Conflict { .. })
    }
}

impl From<LedgerError> for EngineError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Conflict {
                table_id,
                start,
                end,
            } => EngineError::Conflict {
                table_id,
                start,
                end,
            },
            other => EngineError::Storage(other.to_string()),
        }
    }
}

/// 引擎错误 → 统一错误码（前端负责本地化）
impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match err {
            EngineError::InvalidSlot(_) => AppError::with_message(ErrorCode::InvalidSlot, message),
            EngineError::InvalidPartySize(size) => {
                AppError::with_message(ErrorCode::InvalidPartySize, message)
                    .with_detail("partySize", size)
            }
            EngineError::InvalidZone(zone) => {
                AppError::with_message(ErrorCode::ValidationFailed, message).with_detail("zone", zone)
            }
            EngineError::TableNotFound(id) => {
                AppError::with_message(ErrorCode::TableNotFound, message).with_detail("tableId", id)
            }
            EngineError::CapacityExceeded {
                table_id,
                capacity,
                party_size,
            } => AppError::with_message(ErrorCode::CapacityExceeded, message)
                .with_detail("tableId", table_id)
                .with_detail("capacity", capacity)
                .with_detail("partySize", party_size),
            EngineError::Conflict { table_id, .. } => {
                AppError::with_message(ErrorCode::ReservationConflict, message)
                    .with_detail("tableId", table_id)
                    .with_detail("retriable", true)
            }
            EngineError::Storage(msg) => AppError::database(msg),
        }
    }
}
