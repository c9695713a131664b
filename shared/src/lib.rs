//! Shared types for the transformer maintenance service
//!
//! Error types, the response envelope and the maintenance data model used
//! by the server crate and its tests.

pub mod error;
pub mod models;
