mod file;
mod logging;
mod server;

pub use file::{ConfigFile, ConfigFormat};
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

use std::path::Path;

use flightpath_core::FlightPathError;
use serde::Deserialize;

/// Port variable honored by hosting platforms.
pub const PORT_ENV: &str = "PORT";
pub const HOST_ENV: &str = "HOST";
pub const LOG_ENV: &str = "FLIGHTPATH_LOG";
pub const LOG_FORMAT_ENV: &str = "FLIGHTPATH_LOG_FORMAT";

/// Top-level service configuration, loaded from TOML / JSON / YAML.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load the file found by [`ConfigFile::locate`] from the current and home
    /// directories, or the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self, FlightPathError> {
        let home = dirs::home_dir();
        match ConfigFile::locate(path, Path::new("."), home.as_deref())? {
            Some(file) => file.read(),
            None => Ok(Self::default()),
        }
    }

    /// Parse file content. Missing sections and keys take their defaults.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, FlightPathError> {
        match format {
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| FlightPathError::Config(format!("invalid TOML: {e}"))),
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| FlightPathError::Config(format!("invalid JSON: {e}"))),
            ConfigFormat::Yaml => serde_yml::from_str(content)
                .map_err(|e| FlightPathError::Config(format!("invalid YAML: {e}"))),
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), FlightPathError> {
        self.apply_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`: `PORT`, `HOST`, `FLIGHTPATH_LOG` and
    /// `FLIGHTPATH_LOG_FORMAT`. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), FlightPathError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|e| {
                FlightPathError::Config(format!("invalid {PORT_ENV} '{port}': {e}"))
            })?;
        }
        if let Some(host) = lookup(HOST_ENV) {
            self.server.host = host;
        }
        if let Some(level) = lookup(LOG_ENV) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            self.logging.format = format.parse()?;
        }
        Ok(())
    }
}
