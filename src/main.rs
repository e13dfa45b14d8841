use anyhow::Context;
use axum::http::HeaderValue;
use clap::Parser; // for cli
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hafez_fortune::config::Args;
use hafez_fortune::fortune::FortuneService;
use hafez_fortune::inference::OllamaClient;
use hafez_fortune::poetry::GanjoorClient;
use hafez_fortune::router::build_router;
use hafez_fortune::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments
    let args = Args::parse();

    // one client shared by both upstreams
    let client = reqwest::Client::builder()
        .connect_timeout(args.http_timeout())
        .timeout(args.http_timeout())
        .build()
        .context("building http client")?;

    let poetry = Arc::new(GanjoorClient::new(client.clone(), args.poetry_url.clone()));
    let inference = Arc::new(OllamaClient::new(
        client,
        args.ollama_base_url(),
        args.model.clone(),
    ));

    // creating shared state
    let state = Arc::new(AppState {
        fortunes: Arc::new(FortuneService::new(poetry, inference, args.retry_policy())),
    });

    let cors_origin = HeaderValue::from_str(&args.cors_origin)
        .with_context(|| format!("invalid CORS origin {:?}", args.cors_origin))?;
    let app = build_router(state, cors_origin);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!("Fortune server running on http://localhost:{}", args.port);
    info!("Ollama at {} using model {}", args.ollama_base_url(), args.model);
    info!("Verses from {}", args.poetry_url);
    info!("CORS origin: {}", args.cors_origin);

    axum::serve(listener, app).await?;
    Ok(())
}
