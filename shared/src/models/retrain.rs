//! Retraining trigger payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional training parameters forwarded to the retraining trigger
///
/// Flags and counts are kept as raw JSON because the trigger accepts both
/// strings (`"true"`, `"20"`) and native values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrainRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_from_s3: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roboflow_project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roboflow_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epochs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_bucket: Option<String>,
}

/// Successful trigger response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrainTriggered {
    pub message: String,
    /// Batch job id, when the trigger reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

impl RetrainTriggered {
    pub fn new(job_id: Option<String>) -> Self {
        Self {
            message: "Retraining triggered".to_string(),
            job_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_request_serializes_to_empty_object() {
        let body = serde_json::to_value(RetrainRequest::default()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_request_accepts_string_and_native_values() {
        let req: RetrainRequest =
            serde_json::from_value(json!({"train_from_s3": "true", "epochs": 30})).unwrap();
        assert_eq!(req.train_from_s3, Some(json!("true")));
        assert_eq!(req.epochs, Some(json!(30)));
    }

    #[test]
    fn test_triggered_without_job_id() {
        let body = serde_json::to_value(RetrainTriggered::new(None)).unwrap();
        assert_eq!(body, json!({"message": "Retraining triggered"}));

        let body = serde_json::to_value(RetrainTriggered::new(Some("job-1".into()))).unwrap();
        assert_eq!(body, json!({"message": "Retraining triggered", "jobId": "job-1"}));
    }
}
