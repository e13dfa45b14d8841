use serde::{Deserialize, Deserializer, Serialize};

pub const PERSIAN_CODE: &str = "fa";

// Requested language: "fa" takes the verse path, any other code goes to the model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    Persian,
    Other(String),
}

impl Language {
    pub fn english() -> Self {
        Language::Other("en".to_string())
    }

    pub fn code(&self) -> &str {
        match self {
            Language::Persian => PERSIAN_CODE,
            Language::Other(code) => code,
        }
    }

    pub fn is_persian(&self) -> bool {
        matches!(self, Language::Persian)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Other(String::new())
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        if code == PERSIAN_CODE {
            Language::Persian
        } else {
            Language::Other(code)
        }
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Language::from(code.to_string())
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

// Incoming request body; a null field reads the same as a missing one
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FortuneRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub wish: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: Language,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(T::from(value.unwrap_or_default()))
}

impl FortuneRequest {
    pub fn new(wish: impl Into<String>, language: impl Into<Language>) -> Self {
        Self {
            wish: wish.into(),
            language: language.into(),
        }
    }
}

// What the caller gets back, always fully populated
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fortune {
    pub poem: String,
    pub interpretation: String,
    pub prediction: String,
    #[serde(default)]
    pub advice: Vec<String>,
}

impl Fortune {
    pub fn new(
        poem: impl Into<String>,
        interpretation: impl Into<String>,
        prediction: impl Into<String>,
    ) -> Self {
        Self {
            poem: poem.into(),
            interpretation: interpretation.into(),
            prediction: prediction.into(),
            advice: Vec::new(),
        }
    }
}

// Fortune under assembly; a None field has not been seen yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FortuneDraft {
    pub poem: Option<String>,
    pub interpretation: Option<String>,
    pub prediction: Option<String>,
}

// Ganjoor faal response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerseBundle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "fullUrl", default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub verses: Vec<Verse>,
    #[serde(rename = "plainText", default)]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Verse {
    #[serde(default)]
    pub text: String,
}

// Ollama API request format
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    #[serde(default)]
    pub stream: bool,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

// Ollama API response format; only `response` matters here.
// None = field absent, Some(Value::Null) = field sent as null.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: String,
    #[serde(default, deserialize_with = "present")]
    pub response: Option<serde_json::Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}
