// src/config.rs
//
// Run configuration: built-in defaults plus an optional on-disk override.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = ".github/unit-test-generator.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfiguration {
    pub enabled: bool,
    pub frameworks: BTreeMap<String, String>,
    pub ai_settings: AiSettings,
    pub min_file_size: usize,
    pub max_files_per_pr: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub seed: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Default for RunConfiguration {
    fn default() -> Self {
        let frameworks = [
            ("csharp", "xunit"),
            ("java", "junit5"),
            ("javascript", "jest"),
            ("typescript", "jest"),
            ("python", "pytest"),
        ]
        .into_iter()
        .map(|(lang, fw)| (lang.to_string(), fw.to_string()))
        .collect();

        Self {
            enabled: true,
            frameworks,
            ai_settings: AiSettings::default(),
            min_file_size: 10,
            max_files_per_pr: 20,
        }
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: 0.1,
            max_tokens: 4000,
            seed: 12345,
        }
    }
}

impl RunConfiguration {
    /// Loads the configuration once per run. Any failure is logged and
    /// replaced by the built-in defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from {}", path.display());
                cfg
            }
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                info!("No configuration at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        let cfg = Self::parse(path, &raw).map_err(|message| ConfigError::Parse {
            path: display,
            message,
        })?;

        cfg.validate()?;
        Ok(cfg)
    }

    fn parse(path: &Path, raw: &str) -> Result<Self, String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => toml::from_str(raw).map_err(|e| e.to_string()),
            Some("json") => serde_json::from_str(raw).map_err(|e| e.to_string()),
            _ => {
                // An empty YAML document deserializes to unit, not a map.
                if raw.trim().is_empty() {
                    return Ok(Self::default());
                }
                serde_yaml::from_str(raw).map_err(|e| e.to_string())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.ai_settings.temperature;
        if !(0.0..=2.0).contains(&t) {
            return Err(ConfigError::Invalid(format!(
                "ai_settings.temperature must be within 0.0-2.0, got {t}"
            )));
        }

        if self.ai_settings.max_tokens == 0 {
            return Err(ConfigError::Invalid(
                "ai_settings.max_tokens must be positive".into(),
            ));
        }

        if self.ai_settings.model.trim().is_empty() {
            return Err(ConfigError::Invalid("ai_settings.model is empty".into()));
        }

        Ok(())
    }
}
