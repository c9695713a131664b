//! Application state for transformer-cloud

use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::services::{MaintenanceService, RetrainService};
use crate::supabase::PostgrestClient;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, immutable after start-up
#[derive(Debug, Clone)]
pub struct AppState {
    pub maintenance: MaintenanceService,
    pub retrain: RetrainService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, BoxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        let rest = PostgrestClient::new(
            client.clone(),
            &config.supabase_url,
            config.supabase_api_key.clone(),
        );

        Ok(Self {
            maintenance: MaintenanceService::new(rest),
            retrain: RetrainService::new(client, config.retrain_url.clone()),
        })
    }
}
