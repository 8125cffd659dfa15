//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Template configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    /// Directory template names are resolved against
    pub dir: String,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub templates: TemplatesConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Self::load_from(Path::new("config"), &run_mode, app_environment())
    }

    /// Load configuration from `config_dir`, layering in order:
    /// `default`, then `{run_mode}` if present, then `environment`
    pub fn load_from(
        config_dir: &Path,
        run_mode: &str,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let default_file = config_dir.join("default");
        let run_mode_file = config_dir.join(run_mode);

        Config::builder()
            // Start with default config
            .add_source(File::with_name(&default_file.to_string_lossy()).required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&run_mode_file.to_string_lossy()).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Address the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Environment variables prefixed `APP`, nested with `__`
#[must_use]
pub fn app_environment() -> Environment {
    Environment::with_prefix("APP").separator("__")
}
