use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("hafez_requests_total", "Total number of fortune requests").unwrap();
    pub static ref CACHE_HITS: Counter =
        register_counter!("hafez_cache_hits_total", "Total fortune cache hits").unwrap();
    pub static ref CACHE_MISSES: Counter =
        register_counter!("hafez_cache_misses_total", "Total fortune cache misses").unwrap();
    pub static ref MODEL_ATTEMPTS: Counter = register_counter!(
        "hafez_model_attempts_total",
        "Total calls made to the inference backend"
    )
    .unwrap();
    pub static ref MODEL_FALLBACKS: Counter = register_counter!(
        "hafez_model_fallbacks_total",
        "Model resolutions that ended in the default fortune"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "hafez_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
    pub static ref CACHE_SIZE: Gauge =
        register_gauge!("hafez_cache_size", "Current number of fortunes in cache").unwrap();
}
