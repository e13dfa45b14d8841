use thiserror::Error;

// Failures from the upstream clients; the orchestrator turns every one into a Fortune
#[derive(Debug, Error)]
pub enum FortuneError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("model reply has a null response")]
    NullResponse,

    #[error("verse bundle has no verses")]
    EmptyVerses,
}
