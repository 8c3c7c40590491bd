use dotenv::{dotenv, from_path};
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_ALLOWED_EXTENSIONS: &str = "mp4,webm,mkv,avi,mov";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load .env file from path {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenv::Error,
    },

    #[error("Invalid {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub secret_key: String,
    pub database_url: String, // accepted for compatibility; nothing is persisted
    pub upload_dir: PathBuf,
    pub max_video_size_mb: u64,
    pub allowed_extensions: Vec<String>,
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    /// Load configuration from a specified `.env` file path or default to the
    /// `.env` file in the working directory, then read the process environment.
    pub fn from_env(env_path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = env_path {
            from_path(path).map_err(|source| ConfigError::EnvFile {
                path: path.to_string(),
                source,
            })?;
        } else {
            dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve every setting through `lookup`, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let max_video_size_mb = parse_number("MAX_VIDEO_SIZE_MB", get("MAX_VIDEO_SIZE_MB", "500"))?;
        let api_port = parse_number("API_PORT", get("API_PORT", "8000"))?;

        let allowed_extensions = parse_extensions(&get("ALLOWED_EXTENSIONS", DEFAULT_ALLOWED_EXTENSIONS));
        if allowed_extensions.is_empty() {
            return Err(ConfigError::Invalid {
                key: "ALLOWED_EXTENSIONS",
                value: lookup("ALLOWED_EXTENSIONS").unwrap_or_default(),
                reason: "at least one extension is required".to_string(),
            });
        }

        Ok(Self {
            secret_key: get("SECRET_KEY", "dev-secret-key"),
            database_url: get("DATABASE_URL", "sqlite:///videohosting.db"),
            upload_dir: PathBuf::from(get("UPLOAD_DIR", "uploads")),
            max_video_size_mb,
            allowed_extensions,
            api_host: get("API_HOST", "127.0.0.1"),
            api_port,
        })
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    /// Log the effective configuration. The secret key is never printed.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  API server: {}", self.api_address());
        info!("  Upload directory: {}", self.upload_dir.display());
        info!("  Max video size: {}MB", self.max_video_size_mb);
        info!("  Allowed extensions: {}", self.allowed_extensions.join(", "));
        info!("  Database URL: {} (unused, storage is in-memory)", self.database_url);
        if self.secret_key == "dev-secret-key" {
            info!("  Secret key: development default");
        } else {
            info!("  Secret key: configured");
        }
    }
}

fn parse_number<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

fn parse_extensions(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty() && seen.insert(ext.clone()))
        .collect()
}
