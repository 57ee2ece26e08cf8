//! Classification prompt construction.

use crate::classifier::Label;

/// Builds the instruction sent to the model for classifying `text`.
///
/// The model is asked to pick exactly one of the known labels and reply with
/// the category name only. `text` is embedded as given; callers trim it.
pub fn build_classification_prompt(text: &str) -> String {
    let categories = Label::known()
        .iter()
        .map(Label::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\nClassify the following text into one category:\n\
         [{categories}].\n\
         \n\
         Text: \"{text}\"\n\
         \n\
         Return only the category name.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_categories_in_priority_order() {
        let prompt = build_classification_prompt("hello");
        assert!(prompt.contains("[toxic, hate speech, harassment, violent threat, safe]."));
    }

    #[test]
    fn embeds_text_in_quotes() {
        let prompt = build_classification_prompt("you are awful");
        assert!(prompt.contains("Text: \"you are awful\""));
    }

    #[test]
    fn asks_for_category_name_only() {
        let prompt = build_classification_prompt("hello");
        assert!(prompt.trim_end().ends_with("Return only the category name."));
    }

    #[test]
    fn exact_layout() {
        let prompt = build_classification_prompt("hi");
        assert_eq!(
            prompt,
            "\nClassify the following text into one category:\n\
             [toxic, hate speech, harassment, violent threat, safe].\n\
             \n\
             Text: \"hi\"\n\
             \n\
             Return only the category name.\n"
        );
    }
}
