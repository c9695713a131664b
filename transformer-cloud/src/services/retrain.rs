//! Model retraining trigger
//!
//! Fire-and-forget POST to an external trigger (a Lambda URL or similar).
//! No retry and no idempotency key: every call starts a new job.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared::models::{RetrainRequest, RetrainTriggered};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrainError {
    #[error("Retraining endpoint is not configured")]
    NotConfigured,

    #[error("Retraining request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Retraining trigger returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Trigger response; only the job id is of interest
#[derive(Debug, Default, Deserialize)]
struct TriggerResponse {
    #[serde(rename = "jobId", alias = "job_id")]
    job_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RetrainService {
    client: Client,
    url: Option<String>,
}

impl RetrainService {
    pub fn new(client: Client, url: Option<String>) -> Self {
        Self { client, url }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    pub async fn trigger(&self, req: &RetrainRequest) -> Result<RetrainTriggered, RetrainError> {
        let url = self.url.as_deref().ok_or(RetrainError::NotConfigured)?;

        tracing::info!(
            requested_at = %chrono::Utc::now().to_rfc3339(),
            model = req.model.as_deref().unwrap_or("default"),
            "Triggering model retraining"
        );

        let response = self.client.post(url).json(req).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RetrainError::Status { status, body });
        }

        // Triggers that answer with plain text still count as started
        let parsed: TriggerResponse = serde_json::from_str(&body).unwrap_or_default();
        tracing::info!(job_id = ?parsed.job_id, "Retraining triggered");
        Ok(RetrainTriggered::new(parsed.job_id))
    }
}
