//! Application configuration: window, sampling domain, figure style and hotkeys.
//!
//! The configuration lives in `$HOME/.fnplot/config.yaml`. Every section is
//! `#[serde(default)]`, so a file that sets only a few keys is valid.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::hotkeys::Hotkeys;
use crate::plotter::{Domain, FigureStyle};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOME env var not set")]
    NoHome,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid domain: {0}")]
    Domain(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FnPlotConfig {
    /// Window title.
    pub title: String,
    /// Initial inner window size in points.
    pub window_size: [f32; 2],
    pub domain: Domain,
    pub figure: FigureStyle,
    pub hotkeys: Hotkeys,
}

impl Default for FnPlotConfig {
    fn default() -> Self {
        Self {
            title: "Function plotter".to_string(),
            window_size: [1100.0, 750.0],
            domain: Domain::default(),
            figure: FigureStyle::default(),
            hotkeys: Hotkeys::default(),
        }
    }
}

impl FnPlotConfig {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::NoHome)?;
        Ok(PathBuf::from(home).join(".fnplot").join("config.yaml"))
    }

    pub fn from_yaml(s: &str) -> Result<Self, ConfigError> {
        let cfg: FnPlotConfig = serde_yaml::from_str(s)?;
        cfg.domain.validate().map_err(ConfigError::Domain)?;
        Ok(cfg)
    }

    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let s = serde_yaml::to_string(self)?;
        fs::write(&path, s).map_err(|source| ConfigError::Io { path, source })
    }

    /// Read the config file. `Ok(None)` when no file exists.
    pub fn load_from_default_path() -> Result<Option<Self>, ConfigError> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(None);
        }
        let s = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml(&s).map(Some)
    }

    /// Config file contents, or defaults when the file is missing or broken.
    pub fn load_or_default() -> Self {
        match Self::load_from_default_path() {
            Ok(Some(cfg)) => {
                tracing::info!("loaded configuration file");
                cfg
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring configuration file: {}", e);
                Self::default()
            }
        }
    }
}
