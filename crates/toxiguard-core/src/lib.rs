//! Toxiguard Core - label extraction, prompt building, and inference.
//!
//! This crate holds everything the HTTP layer needs to turn a piece of user
//! text into a toxicity label:
//!
//! - [`classifier`] maps free-form model output to a [`Label`].
//! - [`prompt`] formats the classification instruction sent to the model.
//! - [`inference`] talks to the external text-generation service.

pub mod classifier;
pub mod inference;
pub mod prompt;

pub use classifier::{extract_label, Label, LabelExtractor, RegexLabelExtractor};
pub use inference::{InferenceClient, InferenceConfig, InferenceError, OllamaClient};
pub use prompt::build_classification_prompt;
