//! Client for the external text-generation service.
//!
//! The service is treated as an opaque `generate(model, prompt) -> text`
//! capability. [`OllamaClient`] speaks the Ollama HTTP API; tests and other
//! backends can provide their own [`InferenceClient`].

mod ollama;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use ollama::OllamaClient;

/// Default inference service address.
pub const DEFAULT_SERVICE_ADDRESS: &str = "http://localhost:11434";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Inference service configuration.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Base URL of the inference service (default: http://localhost:11434).
    pub service_address: String,
    /// Model identifier to invoke (default: llama3.2).
    pub model: String,
    /// Upper bound on a whole generate request.
    pub timeout: Duration,
    /// Upper bound on establishing the connection.
    pub connect_timeout: Duration,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            service_address: DEFAULT_SERVICE_ADDRESS.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl InferenceConfig {
    /// Sets the service address.
    pub fn with_service_address(mut self, address: impl Into<String>) -> Self {
        self.service_address = address.into();
        self
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Inference failures.
///
/// Callers are not expected to branch on the variant; the `Display` output is
/// the description shown to users.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Could not reach the service or the transfer failed.
    #[error("inference request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service did not answer within the configured timeout.
    #[error("inference service timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The service answered with a non-success status.
    #[error("inference service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("malformed inference response: {0}")]
    MalformedResponse(String),

    /// The client could not be constructed.
    #[error("invalid inference client configuration: {0}")]
    Config(String),
}

/// Result type for inference operations.
pub type Result<T> = std::result::Result<T, InferenceError>;

/// A text-generation backend.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Generates a completion for `prompt` with `model` and returns the raw text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;

    /// Checks that the service is reachable.
    async fn health(&self) -> Result<()>;
}
