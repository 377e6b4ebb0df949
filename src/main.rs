use anyhow::Context;
use tracing_subscriber::EnvFilter;
use user_directory::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("user_directory=info")),
        )
        .init();

    let config = ServerConfig::from_config(&ConfigService::from_env())
        .context("failed to load configuration")?;
    let addr = config.socket_addr()?;
    tracing::info!(strict_email = config.strict_email, "Starting user directory...");

    let container = bootstrap(config).context("failed to assemble services")?;
    let router = build_router(container);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
