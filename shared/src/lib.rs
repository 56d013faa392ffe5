//! Shared types for the table reservation service
//!
//! Common types used by the reservation server and its API clients:
//! dining table / reservation models, availability and recommendation
//! DTOs, and the unified error system.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
