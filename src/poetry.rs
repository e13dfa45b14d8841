use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::FortuneError;
use crate::models::VerseBundle;

/// Source of a random Hafez verse bundle. One call, no retry.
#[async_trait]
pub trait PoetrySource: Send + Sync {
    async fn fetch_verses(&self) -> Result<VerseBundle, FortuneError>;
}

// Ganjoor faal endpoint over the shared http client
pub struct GanjoorClient {
    client: Client,
    url: String,
}

impl GanjoorClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PoetrySource for GanjoorClient {
    async fn fetch_verses(&self) -> Result<VerseBundle, FortuneError> {
        debug!(url = %self.url, "fetching verse bundle");

        let res = self.client.get(&self.url).send().await?;
        if !res.status().is_success() {
            return Err(FortuneError::Status {
                url: self.url.clone(),
                status: res.status().as_u16(),
            });
        }

        Ok(res.json::<VerseBundle>().await?)
    }
}
