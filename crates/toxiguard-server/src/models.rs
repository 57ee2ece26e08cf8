//! API request and response models.

use serde::{Deserialize, Serialize};
use toxiguard_core::Label;

/// Request body for POST /detect.
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    /// Text to classify. Missing is treated the same as empty.
    #[serde(default)]
    pub text: Option<String>,
}

impl DetectRequest {
    /// Returns the trimmed text, or `None` if there is nothing to classify.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Response body for POST /detect.
#[derive(Debug, Serialize)]
pub struct DetectResponse {
    /// Detected label.
    pub label: Label,
}

/// Inference service reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    Unavailable,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Configured model identifier.
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DetectRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn trimmed_text_strips_whitespace() {
        assert_eq!(parse(r#"{"text":"  hi there \n"}"#).trimmed_text(), Some("hi there"));
    }

    #[test]
    fn trimmed_text_rejects_empty_and_missing() {
        assert_eq!(parse(r#"{"text":""}"#).trimmed_text(), None);
        assert_eq!(parse(r#"{"text":"   "}"#).trimmed_text(), None);
        assert_eq!(parse(r#"{}"#).trimmed_text(), None);
        assert_eq!(parse(r#"{"text":null}"#).trimmed_text(), None);
    }

    #[test]
    fn detect_response_serializes_label_name() {
        let json = serde_json::to_value(DetectResponse {
            label: Label::HateSpeech,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"label": "hate speech"}));
    }

    #[test]
    fn health_response_omits_missing_error() {
        let json = serde_json::to_value(HealthResponse {
            status: HealthStatus::Ok,
            model: "llama3.2".to_string(),
            error: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok", "model": "llama3.2"}));
    }
}
