//! Data models
//!
//! Shared between the server, its tests and the frontend (via API).
//! Remote rows are keyed by `mid` (bigint, assigned by Postgres).

pub mod maintenance;
pub mod retrain;
mod serde_helpers;

// Re-exports
pub use maintenance::*;
pub use retrain::*;
