//! Data models
//!
//! Shared between reservation-server and API clients.
//! All IDs are `i64`; JSON field names are camelCase.

pub mod availability;
pub mod dining_table;
pub mod reservation;
pub mod zone;

// Re-exports
pub use availability::*;
pub use dining_table::*;
pub use reservation::*;
pub use zone::*;
