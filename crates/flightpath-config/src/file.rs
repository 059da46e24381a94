use std::path::{Path, PathBuf};

use flightpath_core::FlightPathError;

use crate::ServiceConfig;

/// Syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

/// Recognized extensions, in discovery order.
static EXTENSIONS: [(&str, ConfigFormat); 4] = [
    ("toml", ConfigFormat::Toml),
    ("json", ConfigFormat::Json),
    ("yaml", ConfigFormat::Yaml),
    ("yml", ConfigFormat::Yaml),
];

impl ConfigFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        EXTENSIONS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map(|&(_, format)| format)
    }
}

/// A configuration file on disk and the format its extension names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
}

impl ConfigFile {
    /// Fails when the extension is not one of `toml`, `json`, `yaml`, `yml`.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, FlightPathError> {
        let path = path.into();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ConfigFormat::from_extension)
            .ok_or_else(|| {
                FlightPathError::Config(format!(
                    "unsupported config file extension: {}",
                    path.display()
                ))
            })?;
        Ok(Self { path, format })
    }

    /// Find the file the service should read.
    ///
    /// An `explicit` path must exist. Without one, `flightpath.<ext>` in
    /// `work_dir` is tried before `.flightpath/config.<ext>` in `home`, each
    /// with `toml`, `json`, `yaml` then `yml`. `Ok(None)` means the built-in
    /// defaults apply.
    pub fn locate(
        explicit: Option<&Path>,
        work_dir: &Path,
        home: Option<&Path>,
    ) -> Result<Option<Self>, FlightPathError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(FlightPathError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::new(path).map(Some);
        }

        let local = EXTENSIONS
            .iter()
            .map(|(ext, format)| (work_dir.join(format!("flightpath.{ext}")), *format));
        let user = home.into_iter().flat_map(|home| {
            EXTENSIONS.iter().map(move |(ext, format)| {
                (home.join(".flightpath").join(format!("config.{ext}")), *format)
            })
        });

        Ok(local
            .chain(user)
            .find(|(path, _)| path.is_file())
            .map(|(path, format)| Self { path, format }))
    }

    pub fn read(&self) -> Result<ServiceConfig, FlightPathError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            FlightPathError::Config(format!("failed to read {}: {e}", self.path.display()))
        })?;
        ServiceConfig::parse(&content, self.format).map_err(|e| match e {
            FlightPathError::Config(msg) => {
                FlightPathError::Config(format!("{}: {msg}", self.path.display()))
            }
            other => other,
        })
    }
}
