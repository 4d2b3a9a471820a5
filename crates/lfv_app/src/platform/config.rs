use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lfv_logging::lfv_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const CONFIG_FILENAME: &str = "learnfromvideo.ron";
pub const BACKEND_URL_ENV: &str = "LFV_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Root of the backend API; endpoint paths hang off `/api`.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Reads the configuration once at startup: defaults, then `learnfromvideo.ron`
/// in the working directory, then `LFV_BACKEND_URL`.
pub fn load_from_environment() -> Result<AppConfig, ConfigError> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load(&dir, std::env::var(BACKEND_URL_ENV).ok())
}

pub fn load(dir: &Path, env_backend_url: Option<String>) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let mut config = match fs::read_to_string(&path) {
        Ok(text) => ron::from_str::<AppConfig>(&text).map_err(|err| ConfigError::Parse {
            path: path.clone(),
            message: err.to_string(),
        })?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => AppConfig::default(),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    if let Some(url) = env_backend_url.filter(|url| !url.trim().is_empty()) {
        lfv_info!("Backend URL taken from {}", BACKEND_URL_ENV);
        config.backend_url = url.trim().to_string();
    }

    Ok(config)
}
