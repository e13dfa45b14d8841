use dashmap::DashMap;
use crate::metrics::CACHE_SIZE;
use crate::models::{Fortune, FortuneRequest};

// Create a cache key (wish text followed by language code, no hashing)
pub fn make_cache_key(req: &FortuneRequest) -> String {
    format!("{}{}", req.wish, req.language.code())
}

/// Process-lifetime memo of resolved fortunes. Entries never expire.
///
/// `get` and `insert` are separate steps, so two concurrent misses on the same
/// key both resolve and the later insert wins.
#[derive(Default)]
pub struct FortuneCache {
    entries: DashMap<String, Fortune>,
}

impl FortuneCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Fortune> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: String, fortune: Fortune) {
        self.entries.insert(key, fortune);
        CACHE_SIZE.set(self.entries.len() as f64);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
