pub mod cache;
pub mod config;
pub mod defaults;
pub mod error;
pub mod fortune;
pub mod handlers;
pub mod inference;
pub mod metrics;
pub mod models;
pub mod parser;
pub mod poetry;
pub mod router;
pub mod state;

pub use fortune::{FortuneService, RetryPolicy};
pub use models::{Fortune, FortuneRequest, Language};
