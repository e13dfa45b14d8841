//! Canned texts used whenever a field or a whole fortune has to be made up.

use crate::models::{Fortune, Language};

pub const PERSIAN_POEM: &str = "در همه دیر مغان نیست چو من شیدایی";
pub const PERSIAN_INTERPRETATION: &str = "نشانه\u{200c}های خوبی در راه است";
pub const PERSIAN_PREDICTION: &str = "به زودی به نتیجه می\u{200c}رسید";

pub const ENGLISH_POEM: &str =
    "If thou would ‘st know the secret of Love’s fire.\nIt shall be manifest unto thine eyes ";
pub const ENGLISH_INTERPRETATION: &str = "Good signs are on the way";
pub const ENGLISH_PREDICTION: &str = "You will reach your goal soon";

// Verse path: used when the bundle carries no plain text
pub const VERSE_FALLBACK_INTERPRETATION: &str = "این فال نشان از گشایش در کار شما دارد";
pub const VERSE_PREDICTION: &str =
    "این فال نشان می\u{200c}دهد که به زودی به مراد دل خواهید رسید";

/// Per-field filler for a parsed fortune.
pub struct FieldDefaults {
    pub poem: &'static str,
    pub interpretation: &'static str,
    pub prediction: &'static str,
}

pub fn field_defaults(language: &Language) -> FieldDefaults {
    if language.is_persian() {
        FieldDefaults {
            poem: PERSIAN_POEM,
            interpretation: PERSIAN_INTERPRETATION,
            prediction: PERSIAN_PREDICTION,
        }
    } else {
        FieldDefaults {
            poem: ENGLISH_POEM,
            interpretation: ENGLISH_INTERPRETATION,
            prediction: ENGLISH_PREDICTION,
        }
    }
}

/// Returned when something broke and the caller should try again.
pub fn error_fortune(language: &Language) -> Fortune {
    if language.is_persian() {
        Fortune::new(
            PERSIAN_POEM,
            "متأسفانه در دریافت پاسخ مشکلی پیش آمد",
            "لطفاً دوباره تلاش کنید",
        )
    } else {
        Fortune::new(
            "Life is a journey through light and shade",
            "Sorry, there was an error",
            "Please try again later",
        )
    }
}

/// Returned when the model gave up; worded as a real fortune, not an error.
pub fn default_english_fortune() -> Fortune {
    Fortune::new(
        "Life is a journey through light and shade",
        "Every challenge brings new opportunities",
        "Good fortune awaits your patience",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_and_error_fortunes_differ() {
        let default = default_english_fortune();
        let error = error_fortune(&Language::english());
        assert_eq!(default.poem, error.poem);
        assert_ne!(default.interpretation, error.interpretation);
        assert_ne!(default.prediction, error.prediction);
    }

    #[test]
    fn every_non_persian_code_gets_english_text() {
        let german = error_fortune(&Language::from("de"));
        assert_eq!(german, error_fortune(&Language::english()));
        assert_eq!(error_fortune(&Language::Persian).poem, PERSIAN_POEM);
    }
}
