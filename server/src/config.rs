use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Upper bound on a remote room-image fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Hotel brand image drawn in the PDF banner; text mark when unset.
    pub brand_asset_path: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 5,
            brand_asset_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:8080".to_string(),
                "http://localhost:5173".to_string(),
            ],
        }
    }
}

impl Config {
    /// Loads the first config file found, then layers `HUGO_SERVER__*`
    /// environment variables on top. Missing keys fall back to defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        for candidate in ["config/default", "server/config/default"] {
            if std::path::Path::new(&format!("{candidate}.toml")).exists() {
                builder = builder.add_source(config::File::with_name(candidate));
                break;
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HUGO_SERVER").separator("__"),
        );

        builder.build()?.try_deserialize()
    }
}
