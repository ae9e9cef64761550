//! Kit configuration
//!
//! All options are optional in the JSON form; anything missing falls back to
//! the defaults of the owning component.
//!
//! ```json
//! {
//!   "flow": { "spacing": 8.0 },
//!   "transition": { "fadeDuration": 0.8, "veilColor": "#000000" },
//!   "dev": { "backdropPicker": true }
//! }
//! ```

use app_layout::FlowConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::navigation::{FadeCutConfig, MAX_FADE_DURATION};
use crate::theme::is_hex_color;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config is not valid JSON or has the wrong shape
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but holds an unusable value
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Developer tooling switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevConfig {
    /// Show the backdrop picker
    #[serde(default = "debug_build")]
    pub backdrop_picker: bool,
}

fn debug_build() -> bool {
    cfg!(debug_assertions)
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            backdrop_picker: debug_build(),
        }
    }
}

/// Complete kit configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Flow layout options
    #[serde(default)]
    pub flow: FlowConfig,
    /// Fade-cut transition options
    #[serde(default)]
    pub transition: FadeCutConfig,
    /// Developer tooling
    #[serde(default)]
    pub dev: DevConfig,
}

impl UiConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: UiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!("Loaded UI config from {}", path.display());
        Ok(config)
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        let spacing = self.flow.spacing;
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "flow spacing must be a finite, non-negative number, got {}",
                spacing
            )));
        }

        let fade = self.transition.fade_duration;
        if fade > MAX_FADE_DURATION {
            return Err(ConfigError::Invalid(format!(
                "fade duration must be at most {}s, got {}s",
                MAX_FADE_DURATION.as_secs_f64(),
                fade.as_secs_f64()
            )));
        }

        if !is_hex_color(&self.transition.veil_color) {
            return Err(ConfigError::Invalid(format!(
                "veil color must be #RRGGBB or #RRGGBBAA, got {:?}",
                self.transition.veil_color
            )));
        }

        Ok(())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
