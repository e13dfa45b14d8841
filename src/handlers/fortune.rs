use axum::{Json, extract::State};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use crate::state::AppState;
use crate::models::{Fortune, FortuneRequest};
use crate::metrics::{REQUEST_TOTAL, REQUEST_LATENCY};

// Always answers 200 with a populated fortune
pub async fn fortune_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FortuneRequest>,
) -> Json<Fortune> {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    info!(language = payload.language.code(), "fortune requested");
    let fortune = state.fortunes.generate(payload).await;

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
    Json(fortune)
}
