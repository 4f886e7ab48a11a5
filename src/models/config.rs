use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "config/default";
const ENV_PREFIX: &str = "APP";

fn default_items_per_page() -> usize {
    10
}

/// Configuration options for the catalogue administration service.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// SQLite database path or URL.
    pub database_url: String,
    /// Page size used when a listing request does not specify one.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl AppConfig {
    /// Loads `.env`, then `config/default.yaml` if present, then `APP_*`
    /// environment variables. Later sources win.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }

        Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Loads a single YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let path = path.to_str().ok_or_else(|| {
            ConfigError::Message(format!("config path is not valid UTF-8: {}", path.display()))
        })?;

        Config::builder()
            .add_source(File::new(path, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }
}
