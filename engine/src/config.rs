use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use pulse_types::ui::UiOptions;

const DEFAULT_ANIMATION_MS: u64 = 1000;
const DEFAULT_DELAY_BASE_MS: u64 = 500;
const DEFAULT_DELAY_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Default, Deserialize)]
pub struct PulseConfig {
    pub app: Option<AppConfig>,
    pub board: Option<BoardConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable motion effects (spinner cycling, highlight decay).
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct BoardConfig {
    /// Duration a triggered class stays on its widget, in milliseconds.
    pub animation_ms: Option<u64>,
    /// Base delay fed to the delay calculator, in milliseconds.
    pub delay_base_ms: Option<u64>,
    /// Multiplier applied to the base delay.
    pub delay_multiplier: Option<f64>,
}

impl PulseConfig {
    /// `~/.pulse/config.toml`, when a home directory exists.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".pulse").join("config.toml"))
    }

    /// Load the config file if present. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    /// Duration a triggered class stays attached. Default 1000 ms.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        let ms = self
            .board
            .as_ref()
            .and_then(|b| b.animation_ms)
            .unwrap_or(DEFAULT_ANIMATION_MS);
        Duration::from_millis(ms)
    }

    /// Base delay for the delay calculator. Default 500 ms.
    #[must_use]
    pub fn delay_base(&self) -> Duration {
        let ms = self
            .board
            .as_ref()
            .and_then(|b| b.delay_base_ms)
            .unwrap_or(DEFAULT_DELAY_BASE_MS);
        Duration::from_millis(ms)
    }

    /// Multiplier for the delay calculator. Default 2.0.
    #[must_use]
    pub fn delay_multiplier(&self) -> f64 {
        self.board
            .as_ref()
            .and_then(|b| b.delay_multiplier)
            .unwrap_or(DEFAULT_DELAY_MULTIPLIER)
    }
}
