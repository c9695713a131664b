//! transformer-cloud: transformer maintenance records over Supabase
//!
//! - Maintenance CRUD proxied to the Supabase PostgREST API
//! - Maintenance number generation backed by a UNIQUE constraint
//! - Model retraining trigger

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod supabase;
pub mod util;
