//! Fortune resolution: cache lookup, language branch, model retry and fallbacks.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::cache::{FortuneCache, make_cache_key};
use crate::defaults::{
    VERSE_FALLBACK_INTERPRETATION, VERSE_PREDICTION, default_english_fortune, error_fortune,
};
use crate::error::FortuneError;
use crate::inference::InferenceClient;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, MODEL_ATTEMPTS, MODEL_FALLBACKS};
use crate::models::{Fortune, FortuneRequest, Language, VerseBundle};
use crate::parser::{build_prompt, parse_response};
use crate::poetry::PoetrySource;

/// Linear backoff: attempt `n` waits `n * base_delay` before the next try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

pub struct FortuneService {
    poetry: Arc<dyn PoetrySource>,
    inference: Arc<dyn InferenceClient>,
    cache: FortuneCache,
    retry: RetryPolicy,
}

impl FortuneService {
    pub fn new(
        poetry: Arc<dyn PoetrySource>,
        inference: Arc<dyn InferenceClient>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            poetry,
            inference,
            cache: FortuneCache::new(),
            retry,
        }
    }

    pub fn cache(&self) -> &FortuneCache {
        &self.cache
    }

    /// Never fails. Resolution runs on its own task so a panic anywhere in it
    /// still yields the language's error fortune, and a dropped caller does
    /// not stop the result from reaching the cache.
    pub async fn generate(self: &Arc<Self>, request: FortuneRequest) -> Fortune {
        let language = request.language.clone();
        let service = Arc::clone(self);

        match tokio::spawn(async move { service.resolve(&request).await }).await {
            Ok(fortune) => fortune,
            Err(e) => {
                error!(language = language.code(), error = %e, "fortune resolution aborted");
                error_fortune(&language)
            }
        }
    }

    async fn resolve(&self, request: &FortuneRequest) -> Fortune {
        let cache_key = make_cache_key(request);

        if let Some(fortune) = self.cache.get(&cache_key) {
            CACHE_HITS.inc();
            debug!(key = %cache_key, "cache HIT");
            return fortune;
        }
        CACHE_MISSES.inc();
        debug!(key = %cache_key, "cache MISS");

        let fortune = if request.language.is_persian() {
            self.persian_fortune().await
        } else {
            self.model_fortune_with_retry(&request.wish).await
        };

        self.cache.insert(cache_key, fortune.clone());
        fortune
    }

    async fn persian_fortune(&self) -> Fortune {
        match self.fetch_verse_fortune().await {
            Ok(fortune) => fortune,
            Err(e) => {
                error!(error = %e, "persian fortune failed");
                error_fortune(&Language::Persian)
            }
        }
    }

    async fn fetch_verse_fortune(&self) -> Result<Fortune, FortuneError> {
        let bundle = self.poetry.fetch_verses().await?;
        verse_fortune(&bundle)
    }

    async fn model_fortune_with_retry(&self, wish: &str) -> Fortune {
        let prompt = build_prompt(wish);
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            MODEL_ATTEMPTS.inc();

            match self.inference.complete(&prompt).await {
                Ok(Some(raw)) => return parse_response(&raw, &Language::english()),
                Ok(None) => {
                    warn!(attempt, "model reply had no response text");
                    MODEL_FALLBACKS.inc();
                    return default_english_fortune();
                }
                Err(e) => {
                    warn!(attempt, error = %e, "model attempt failed");
                    if attempt >= max_attempts {
                        error!(attempts = attempt, error = %e, "all model attempts failed");
                        MODEL_FALLBACKS.inc();
                        return default_english_fortune();
                    }
                    tokio::time::sleep(self.retry.backoff(attempt)).await;
                }
            }
        }
    }
}

// First couplet as the poem, first plain-text line as the interpretation
fn verse_fortune(bundle: &VerseBundle) -> Result<Fortune, FortuneError> {
    let first = bundle.verses.first().ok_or(FortuneError::EmptyVerses)?;
    let second = bundle.verses.get(1).map(|v| v.text.as_str()).unwrap_or("");

    let interpretation = match &bundle.plain_text {
        Some(text) => text.split('\n').next().unwrap_or_default().to_string(),
        None => VERSE_FALLBACK_INTERPRETATION.to_string(),
    };

    // TODO: fold bundle.title into the prediction once the wording is agreed on
    Ok(Fortune::new(
        format!("{}\n{}", first.text, second),
        interpretation,
        VERSE_PREDICTION,
    ))
}
