use config::Config;
use domain::*;
use infrastructure::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Video hosting application - the composition root wiring storage,
/// upload policy and services. Built once at startup and shared by handle.
pub struct VideoHostingApp {
    pub user_service: UserService,
    pub video_service: VideoService,
    pub validation: Arc<ValidationService>,
}

impl VideoHostingApp {
    pub fn new(upload_dir: impl Into<PathBuf>, validation: ValidationService) -> Self {
        // In-memory adapters: state lives as long as the process
        let user_repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let video_repository: Arc<dyn VideoRepository> = Arc::new(InMemoryVideoRepository::new());

        let validation = Arc::new(validation);

        Self {
            user_service: UserService::new(user_repository, upload_dir),
            video_service: VideoService::new(video_repository, Arc::clone(&validation)),
            validation,
        }
    }

    pub fn new_with_config(config: &Config) -> Self {
        let validation = ValidationService::new(&config.allowed_extensions, config.max_video_size_mb);
        info!(
            "Upload policy: {} up to {}MB",
            validation.allowed_extensions_display(),
            config.max_video_size_mb
        );
        Self::new(config.upload_dir.clone(), validation)
    }
}

impl Default for VideoHostingApp {
    fn default() -> Self {
        Self::new("uploads", ValidationService::default())
    }
}
