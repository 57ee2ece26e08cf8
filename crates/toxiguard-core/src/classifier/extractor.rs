//! Regex-based label extraction.
//!
//! Scans lower-cased model output for each known label as a whole word, in
//! priority order, and returns the first one found.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::Label;

/// Maps raw model output to a [`Label`].
///
/// Implementations must be pure: the same input always yields the same label
/// and extraction never fails. Unrecognized output maps to [`Label::Unknown`].
pub trait LabelExtractor: Send + Sync {
    /// Extracts a label from the model's raw response.
    fn extract(&self, raw: Option<&str>) -> Label;
}

/// A compiled whole-word pattern for one label.
struct LabelPattern {
    label: Label,
    regex: Regex,
}

/// Whole-word, priority-ordered, case-insensitive label scanner.
pub struct RegexLabelExtractor {
    patterns: Vec<LabelPattern>,
}

impl RegexLabelExtractor {
    /// Creates an extractor for all known labels in priority order.
    pub fn new() -> Self {
        Self {
            patterns: Self::build_patterns(),
        }
    }

    fn build_patterns() -> Vec<LabelPattern> {
        // Word boundaries keep "toxicity" from matching "toxic"
        Label::known()
            .iter()
            .map(|&label| {
                let pattern = format!(r"\b{}\b", regex::escape(label.as_str()));
                LabelPattern {
                    label,
                    regex: Regex::new(&pattern).expect("Invalid label pattern"),
                }
            })
            .collect()
    }
}

impl Default for RegexLabelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelExtractor for RegexLabelExtractor {
    fn extract(&self, raw: Option<&str>) -> Label {
        let Some(raw) = raw.filter(|t| !t.is_empty()) else {
            return Label::Unknown;
        };

        let text_lower = raw.to_lowercase();

        let label = self
            .patterns
            .iter()
            .find(|p| p.regex.is_match(&text_lower))
            .map(|p| p.label)
            .unwrap_or(Label::Unknown);

        trace!(%label, raw_len = raw.len(), "Extracted label");
        label
    }
}

static DEFAULT_EXTRACTOR: Lazy<RegexLabelExtractor> = Lazy::new(RegexLabelExtractor::new);

/// Extracts a label using the shared default [`RegexLabelExtractor`].
pub fn extract_label(raw: Option<&str>) -> Label {
    DEFAULT_EXTRACTOR.extract(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Label {
        RegexLabelExtractor::new().extract(Some(text))
    }

    // === Empty input ===

    #[test]
    fn empty_string_is_unknown() {
        assert_eq!(extract(""), Label::Unknown);
    }

    #[test]
    fn absent_input_is_unknown() {
        assert_eq!(RegexLabelExtractor::new().extract(None), Label::Unknown);
    }

    // === Single labels ===

    #[test]
    fn finds_each_known_label_as_standalone_word() {
        for &label in Label::known() {
            let text = format!("The text is {} in my opinion.", label.as_str());
            assert_eq!(extract(&text), label, "failed for {label}");
        }
    }

    #[test]
    fn bare_label_matches() {
        assert_eq!(extract("harassment"), Label::Harassment);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(extract("TOXIC"), Label::Toxic);
        assert_eq!(extract("Hate Speech."), Label::HateSpeech);
        assert_eq!(extract("Category: Violent Threat"), Label::ViolentThreat);
    }

    #[test]
    fn label_followed_by_punctuation() {
        assert_eq!(
            extract("This text is classified as: toxic."),
            Label::Toxic
        );
        assert_eq!(extract("\"safe\""), Label::Safe);
    }

    // === Priority ===

    #[test]
    fn earlier_label_wins_regardless_of_position() {
        assert_eq!(extract("safe, not toxic"), Label::Toxic);
    }

    #[test]
    fn hate_speech_beats_harassment() {
        assert_eq!(
            extract("harassment or maybe hate speech"),
            Label::HateSpeech
        );
    }

    #[test]
    fn violent_threat_beats_safe() {
        assert_eq!(extract("not safe: violent threat"), Label::ViolentThreat);
    }

    // === Whole-word matching ===

    #[test]
    fn toxicity_does_not_match_toxic() {
        assert_eq!(extract("low toxicity overall"), Label::Unknown);
    }

    #[test]
    fn unsafe_does_not_match_safe() {
        assert_eq!(extract("this is unsafe"), Label::Unknown);
    }

    #[test]
    fn safely_does_not_match_safe() {
        assert_eq!(extract("handled safely"), Label::Unknown);
    }

    #[test]
    fn partial_multiword_label_does_not_match() {
        assert_eq!(extract("hate speeches everywhere"), Label::Unknown);
        assert_eq!(extract("violent threats"), Label::Unknown);
    }

    #[test]
    fn unrelated_output_is_unknown() {
        assert_eq!(extract("I cannot help with that."), Label::Unknown);
    }

    // === Shared extractor ===

    #[test]
    fn free_function_matches_extractor() {
        assert_eq!(extract_label(Some("Harassment")), Label::Harassment);
        assert_eq!(extract_label(Some("")), Label::Unknown);
        assert_eq!(extract_label(None), Label::Unknown);
    }
}
