//! Classification labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categories a piece of text can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Generally toxic or abusive content.
    #[serde(rename = "toxic")]
    Toxic,
    /// Hate speech against a group.
    #[serde(rename = "hate speech")]
    HateSpeech,
    /// Harassment of an individual.
    #[serde(rename = "harassment")]
    Harassment,
    /// Threats of violence.
    #[serde(rename = "violent threat")]
    ViolentThreat,
    /// Nothing objectionable.
    #[serde(rename = "safe")]
    Safe,
    /// The model output did not name any known category.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Label {
    /// Returns the known labels in match priority order.
    ///
    /// [`Label::Unknown`] is not part of this list; it is only produced when
    /// none of these match.
    pub fn known() -> &'static [Label] {
        &[
            Label::Toxic,
            Label::HateSpeech,
            Label::Harassment,
            Label::ViolentThreat,
            Label::Safe,
        ]
    }

    /// Returns the wire name of this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Toxic => "toxic",
            Label::HateSpeech => "hate speech",
            Label::Harassment => "harassment",
            Label::ViolentThreat => "violent threat",
            Label::Safe => "safe",
            Label::Unknown => "unknown",
        }
    }

    /// Returns true for [`Label::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Label::Unknown)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
