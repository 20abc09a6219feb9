use std::env;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use dramatis_backend::core::logging;
use dramatis_backend::server;
use dramatis_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let state = AppState::initialize()?;
    logging::init(&state.settings.log_dir);

    if !state.llm.health_check().await.unwrap_or(false) {
        tracing::warn!(
            "LLM provider at {} is not reachable; requests will fail until it is",
            state.settings.llm_base_url
        );
    }

    let port = env::var("PORT")
        .ok()
        .and_then(|val| val.parse::<u16>().ok())
        .unwrap_or(0);
    let bind_addr = format!("127.0.0.1:{}", port);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;

    println!("DRAMATIS_PORT={}", addr.port());
    tracing::info!("Listening on {}", addr);

    let app: Router = server::router::router(state);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
