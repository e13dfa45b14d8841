use crate::defaults::field_defaults;
use crate::models::{Fortune, FortuneDraft, Language};

const POEM_MARKER: &str = "V:";
const INTERPRETATION_MARKER: &str = "M:";
const PREDICTION_MARKER: &str = "P:";

// Prompt the model completes; the markers match the parser below
pub fn build_prompt(wish: &str) -> String {
    format!("W:{wish}\n{POEM_MARKER}\n{INTERPRETATION_MARKER}\n{PREDICTION_MARKER}")
}

/// Pulls `V:`/`M:`/`P:` lines out of a model completion.
///
/// Markers are case-sensitive and must open the trimmed line. When a marker
/// shows up more than once the last line wins. Anything not found is filled
/// with the language's defaults.
pub fn parse_response(raw: &str, language: &Language) -> Fortune {
    let mut draft = FortuneDraft::default();

    for line in raw.split('\n') {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(POEM_MARKER) {
            draft.poem = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(INTERPRETATION_MARKER) {
            draft.interpretation = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(PREDICTION_MARKER) {
            draft.prediction = Some(rest.trim().to_string());
        }
    }

    fill_defaults(draft, language)
}

// Only absent fields are filled; a marker with nothing after it stays empty
pub fn fill_defaults(draft: FortuneDraft, language: &Language) -> Fortune {
    let defaults = field_defaults(language);
    Fortune::new(
        draft.poem.unwrap_or_else(|| defaults.poem.to_string()),
        draft
            .interpretation
            .unwrap_or_else(|| defaults.interpretation.to_string()),
        draft
            .prediction
            .unwrap_or_else(|| defaults.prediction.to_string()),
    )
}
