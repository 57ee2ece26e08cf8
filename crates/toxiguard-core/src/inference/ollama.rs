//! Ollama HTTP API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{InferenceClient, InferenceConfig, InferenceError, Result};

/// Request body for `POST /api/generate`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response body for `POST /api/generate` (non-streaming).
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Error body returned by Ollama on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Inference client for an Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Creates a client from the given configuration.
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("Toxiguard/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| InferenceError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.service_address.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    /// Returns the service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_transport_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Timeout(self.timeout)
        } else {
            InferenceError::Request(e)
        }
    }

    /// Reads the body and turns non-success statuses into errors.
    async fn read_body(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if status.is_success() {
            return Ok(body);
        }

        let message = service_error_message(status, &body);
        warn!(status = status.as_u16(), %message, "Inference service returned error");
        Err(InferenceError::Service {
            status: status.as_u16(),
            message,
        })
    }
}

/// Picks the most useful description of a failed response.
fn service_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ErrorBody>(body) {
        return err.error;
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        debug!(%url, model, prompt_len = prompt.len(), "Sending generate request");

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model,
                prompt,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let body = self.read_body(response).await?;

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

        Ok(parsed.response.unwrap_or_default().trim().to_string())
    }

    async fn health(&self) -> Result<()> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        self.read_body(response).await.map(|_| ())
    }
}
