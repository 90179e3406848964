use anyhow::Context;
use tracing::info;

use gamelens_api::api::{create_router, AppState};
use gamelens_api::config::Config;
use gamelens_api::snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamelens_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Single-phase initialization: serve the complete snapshot or nothing.
    let snapshot = snapshot::load_snapshot(&config.snapshot_dir)
        .with_context(|| format!("failed to load snapshot from {:?}", config.snapshot_dir))?;

    let state = AppState::new(snapshot, config.ranking_strategy);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, strategy = ?config.ranking_strategy, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
