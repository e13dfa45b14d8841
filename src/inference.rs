use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::FortuneError;
use crate::models::{GenerateRequest, GenerateResponse};

// Sampling sent with every fortune prompt
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 50;
pub const TOP_P: f32 = 0.9;

/// Text completion backend.
///
/// `Ok(None)` means the backend answered but the body had no `response` text.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, FortuneError>;
}

pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(client: Client, base_url: &str, model: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn generate_request(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, FortuneError> {
        let url = format!("{}/api/generate", self.base_url);
        debug!(%url, model = %self.model, "calling ollama");

        let res = self
            .client
            .post(&url)
            .json(&self.generate_request(prompt))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(FortuneError::Status {
                url,
                status: res.status().as_u16(),
            });
        }

        let body = res.json::<GenerateResponse>().await?;
        completion_text(body)
    }
}

// Absent field is a soft miss; null is a failed attempt; non-strings are rendered
fn completion_text(body: GenerateResponse) -> Result<Option<String>, FortuneError> {
    match body.response {
        None => Ok(None),
        Some(Value::Null) => Err(FortuneError::NullResponse),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Ok(Some(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<Option<String>, FortuneError> {
        completion_text(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn response_field_decoding() {
        assert_eq!(decode(r#"{"model":"m","response":"V:a"}"#).unwrap().as_deref(), Some("V:a"));
        assert_eq!(decode(r#"{"model":"m","done":true}"#).unwrap(), None);
        assert!(matches!(
            decode(r#"{"model":"m","response":null}"#),
            Err(FortuneError::NullResponse)
        ));
        assert_eq!(decode(r#"{"response":42}"#).unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn generate_request_carries_sampling_and_no_streaming() {
        let client = OllamaClient::new(Client::new(), "http://localhost:11434/", "llama3.2");
        let body = serde_json::to_value(client.generate_request("W:x\nV:\nM:\nP:")).unwrap();

        assert_eq!(body["model"], "llama3.2");
        assert_eq!(body["prompt"], "W:x\nV:\nM:\nP:");
        assert_eq!(body["stream"], false);
        assert_eq!(body["max_tokens"], 50);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((body["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}
