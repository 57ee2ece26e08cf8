//! Application state for the HTTP server.

use std::sync::Arc;

use toxiguard_core::{
    InferenceClient, InferenceConfig, InferenceError, LabelExtractor, OllamaClient,
    RegexLabelExtractor,
};

/// Shared application state.
///
/// Holds only immutable configuration and thread-safe collaborators; requests
/// never share mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation backend.
    pub inference: Arc<dyn InferenceClient>,
    /// Maps model output to a label.
    pub extractor: Arc<dyn LabelExtractor>,
    /// Model identifier passed to every generate call.
    pub model: Arc<str>,
}

impl AppState {
    /// Creates state backed by an Ollama client built from `config`.
    pub fn from_config(config: &InferenceConfig) -> Result<Self, InferenceError> {
        let client = OllamaClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.model.as_str()))
    }

    /// Creates state with the given client and the default label extractor.
    pub fn new(inference: Arc<dyn InferenceClient>, model: impl Into<Arc<str>>) -> Self {
        Self::with_components(inference, Arc::new(RegexLabelExtractor::new()), model)
    }

    /// Creates state with custom components.
    pub fn with_components(
        inference: Arc<dyn InferenceClient>,
        extractor: Arc<dyn LabelExtractor>,
        model: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            inference,
            extractor,
            model: model.into(),
        }
    }
}
