// Main entry point for the upload API server

use std::sync::Arc;

use anyhow::{Context, Result};
use excel_tools_core::kernel::ChatClient;
use excel_tools_core::server::{build_app, AppState};
use excel_tools_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,excel_tools_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Excel tools API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        model = %config.refine_model,
        base_url = %config.deepseek_base_url,
        "Configuration loaded"
    );

    let generator = ChatClient::new(config.deepseek_api_key.clone())
        .with_base_url(config.deepseek_base_url.clone())
        .with_timeout(config.generation_timeout)
        .context("Failed to create generation client")?;

    let app = build_app(AppState {
        generator: Arc::new(generator),
        refine_options: config.refine_options(),
        max_upload_bytes: config.max_upload_bytes,
    });

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Upload endpoint: http://localhost:{}/file/upload", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
