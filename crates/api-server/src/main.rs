use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("api_server=debug,domain=info,tower_http=debug")),
        )
        .init();

    info!("🚀 Starting Video Hosting API Server");

    // Load configuration from environment
    let config = Config::from_env(None)?;
    config.log_summary();

    api_server::serve(&config).await
}
