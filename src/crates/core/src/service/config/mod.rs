//! Configuration
//!
//! `config.toml` holds model and endpoint settings. The API key never lives
//! here; it is read from the environment on each call.

use crate::util::errors::{PatentProError, PatentProResult};
use log::{debug, info};
use patentpro_ai_adapters::{
    AdapterSettings, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, MAX_THINKING_BUDGET,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "PATENTPRO_CONFIG";
const APP_DIR_NAME: &str = "patentpro";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatentProConfig {
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub thinking_budget: u32,
    /// Ask for thought summaries alongside the answer.
    pub include_thoughts: bool,
}

impl Default for PatentProConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            thinking_budget: MAX_THINKING_BUDGET,
            include_thoughts: false,
        }
    }
}

impl PatentProConfig {
    /// `$PATENTPRO_CONFIG`, else `<config dir>/patentpro/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
        }
    }

    /// Loads the default config file; a missing file yields defaults.
    pub fn load() -> PatentProResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> PatentProResult<Self> {
        if !path.exists() {
            debug!("Config file not found, using defaults: {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PatentProError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content)
            .map_err(|e| PatentProError::config(format!("{}: {}", path.display(), e)))?;
        info!(
            "Loaded config: path={}, model={}",
            path.display(),
            config.model
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> PatentProResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| PatentProError::config(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> PatentProResult<()> {
        if self.model.trim().is_empty() {
            return Err(PatentProError::config("model must not be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(PatentProError::config(format!(
                "base_url must be an http(s) URL: {}",
                self.base_url
            )));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(PatentProError::config(format!(
                "temperature out of range [0, 2]: {}",
                self.temperature
            )));
        }
        if !(1..=MAX_THINKING_BUDGET).contains(&self.thinking_budget) {
            return Err(PatentProError::config(format!(
                "thinking_budget out of range [1, {}]: {}",
                MAX_THINKING_BUDGET, self.thinking_budget
            )));
        }
        Ok(())
    }

    pub fn adapter_settings(&self) -> AdapterSettings {
        AdapterSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            thinking_budget: self.thinking_budget,
            include_thoughts: self.include_thoughts,
        }
    }
}
