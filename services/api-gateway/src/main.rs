use anyhow::Result;
use motolens_api_gateway::create_app;
use motolens_utils::{init_logging, AppConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("{}, using defaults", e);
        AppConfig::default()
    });

    init_logging(&config.logging)?;
    info!("Starting MotoLens API Gateway");

    let app = create_app(&config)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("API Gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
