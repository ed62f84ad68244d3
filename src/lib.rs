pub mod api;
pub mod config;
pub mod core_state;
pub mod knowledge;
pub mod models;
pub mod pipeline;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::api::start_api_server;
use crate::config::AppConfig;
use crate::core_state::CoreState;

pub fn run() {
    // Optional .env overrides, read before the log filter is resolved
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let app_config = AppConfig::from_env();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("error while building tokio runtime");

    if let Err(e) = runtime.block_on(serve(app_config)) {
        tracing::error!("{} stopped: {e}", config::APP_NAME);
        std::process::exit(1);
    }
}

/// Serve the API until Ctrl-C, then shut down gracefully.
async fn serve(app_config: AppConfig) -> Result<(), String> {
    let core = CoreState::from_config(&app_config).map_err(|e| e.to_string())?;
    let server = start_api_server(Arc::new(core), app_config.bind_addr).await?;

    tracing::info!(
        addr = %server.addr,
        summary_url = %app_config.summary_url,
        "Ready for conversations"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
    }

    server.stop().await;
    Ok(())
}
