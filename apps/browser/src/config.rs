use crate::error::{Result, WrapErr};
use ::config::{config_dir, constants, data_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use view_core::{DisplayStrings, PAGE_SIZE, PreviewLimits};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    pub page_size: usize,
    /// Where CSV exports are written
    pub export_dir: PathBuf,
    pub display: DisplayConfig,
    pub strings: DisplayStrings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Printed before a highlighted term
    pub highlight_open: String,
    pub highlight_close: String,
    pub summary_preview_chars: usize,
    pub body_preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            export_dir: data_dir().join("exports"),
            display: DisplayConfig::default(),
            strings: DisplayStrings::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let limits = PreviewLimits::default();
        Self {
            highlight_open: "**".to_string(),
            highlight_close: "**".to_string(),
            summary_preview_chars: limits.summary_chars,
            body_preview_chars: limits.body_chars,
        }
    }
}

impl DisplayConfig {
    pub fn limits(&self) -> PreviewLimits {
        PreviewLimits {
            summary_chars: self.summary_preview_chars,
            body_chars: self.body_preview_chars,
        }
    }
}

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        Self::load_from(&Self::path())
    }

    /// `browser.toml` in the config directory, which falls back to the temp
    /// dir like every other directory when there is no home.
    pub fn path() -> PathBuf {
        config_dir().join(constants::BROWSER_CONFIG_FILE_NAME)
    }

    /// Missing file means defaults.
    pub fn load_from(config_path: &Path) -> Result<Config> {
        match std::fs::read_to_string(config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str)
                .with_context(|| format!("Invalid configuration in {}", config_path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no configuration at {}, using defaults", config_path.display());
                Self::load_str("")
            }
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read configuration {}", config_path.display())),
        }
    }
}
