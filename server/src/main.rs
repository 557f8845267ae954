use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{logging, InMemoryTodoRepository, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    logging::init(&config.log_filter).context("failed to install tracing subscriber")?;

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    let repo = Arc::new(InMemoryTodoRepository::new());
    todo_server::run_until(listener, repo, shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
