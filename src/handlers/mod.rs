mod fortune;
mod health;
mod metrics;

pub use fortune::fortune_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
