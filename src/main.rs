mod bets;
mod component;
mod config;
mod server;
mod sink;
mod state;
mod trades;
mod view;
mod web;

#[cfg(test)]
mod tests;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.parse().unwrap_or_default()),
        )
        .with_target(false)
        .init();

    let port = config.http_port;

    tracing::info!(
        components_dir = %config.components_dir.display(),
        port,
        "airbets starting"
    );

    let app_state = state::AppState::new(config);
    let router = server::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("HTTP server listening on 0.0.0.0:{port}");
    tracing::info!("open http://localhost:{port} in your browser");

    axum::serve(listener, router).await?;

    Ok(())
}
