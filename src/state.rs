use std::sync::Arc;
use crate::fortune::FortuneService;
// app's shared state

pub struct AppState {
    pub fortunes: Arc<FortuneService>,
}
