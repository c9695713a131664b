//! Business operations behind the HTTP handlers

pub mod maintenance;
pub mod retrain;

pub use maintenance::{MAX_NUMBER_ATTEMPTS, MaintenanceService};
pub use retrain::{RetrainError, RetrainService};
