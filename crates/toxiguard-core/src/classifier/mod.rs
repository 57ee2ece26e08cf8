//! Label extraction for model output.
//!
//! The model is asked to answer with a single category name, but replies are
//! free-form text. This module scans that text for a known label.

mod extractor;
mod label;

pub use extractor::{extract_label, LabelExtractor, RegexLabelExtractor};
pub use label::Label;
