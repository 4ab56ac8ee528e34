/// Application configuration.
///
/// Resolution order: built-in defaults, then the JSON file named by
/// `AUTOGALLERY_CONFIG`, then `AUTOGALLERY_CATALOGUE` for the catalogue
/// path. Every field is optional in the file.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the JSON configuration file.
pub const CONFIG_ENV: &str = "AUTOGALLERY_CONFIG";

/// Environment variable overriding the catalogue path.
pub const CATALOGUE_ENV: &str = "AUTOGALLERY_CATALOGUE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a positive number, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalogue JSON file; the built-in sample gallery when `None`.
    pub catalogue_path: Option<PathBuf>,
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
    /// Height of one gallery card image in points.
    pub card_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            dark_mode: true,
            window_width: 1280.0,
            window_height: 800.0,
            card_height: 360.0,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os(CATALOGUE_ENV).map(PathBuf::from),
        )
    }

    /// Defaults, overlaid by `config_file`, overlaid by `catalogue_override`.
    ///
    /// A relative `catalogue_path` inside the config file is taken relative
    /// to that file's directory. The override is used as given.
    pub fn resolve(
        config_file: Option<PathBuf>,
        catalogue_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => {
                let mut config = Self::load_file(&path)?;
                if let (Some(catalogue), Some(dir)) =
                    (config.catalogue_path.as_mut(), path.parent())
                {
                    if catalogue.is_relative() {
                        *catalogue = dir.join(&*catalogue);
                    }
                }
                config
            }
            None => Self::default(),
        };
        if let Some(path) = catalogue_override {
            config.catalogue_path = Some(path);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("card_height", self.card_height),
        ];
        for (field, value) in dims {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        Ok(())
    }
}
