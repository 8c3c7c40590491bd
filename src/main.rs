use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("video_hosting=info,api_server=debug,domain=info,tower_http=debug")
        }))
        .init();

    info!("🚀 Video Hosting Service");
    info!("  ✅ User registration with unique email/username");
    info!("  ✅ In-memory video catalog with upload policy");
    info!("  ✅ Listing, search and view counting");

    // Load configuration from environment variables
    let config = Config::from_env(None)?;
    config.log_summary();

    api_server::serve(&config).await?;

    info!("👋 Shutting down video hosting service");
    Ok(())
}
