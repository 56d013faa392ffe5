//! Unified error system
//!
//! [`ErrorCode`] is the wire contract, [`ErrorCategory`] groups codes by
//! range, [`AppError`] is what handlers return and [`ApiResponse`] is the
//! envelope every `/api` route answers with.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::ReservationConflict)
//!     .with_detail("tableId", 4);
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, 7401);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult, ErrorDetails};
