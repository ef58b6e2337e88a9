use std::collections::HashSet;
use std::path::Path;

use hermes_core::RegistryError;
use log::info;
use thiserror::Error;

use super::types::{PresetConfig, PresetConfigFile};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("No presets in config")]
    NoPresets,
    #[error("Duplicate preset id: {0}")]
    DuplicatePreset(String),
    #[error("Preset {preset}: invalid instrument: {source}")]
    InvalidInstrument {
        preset: String,
        #[source]
        source: RegistryError,
    },
    #[error("Preset {preset}: {field} '{token}' does not resolve to a {domain}")]
    UnresolvedToken {
        preset: String,
        field: &'static str,
        token: String,
        domain: &'static str,
    },
}

/// Load preset configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PresetConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config = load_config_from_str(&content)?;
    info!(
        "Loaded {} presets from {}",
        config.presets.len(),
        path.as_ref().display()
    );
    Ok(config)
}

/// Load preset configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<PresetConfigFile, ConfigError> {
    let config: PresetConfigFile = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded presets
pub fn load_default_config() -> Result<PresetConfigFile, ConfigError> {
    let default_config = include_str!("presets.json");
    load_config_from_str(default_config)
}

impl PresetConfigFile {
    /// Get only enabled presets
    pub fn enabled_presets(&self) -> Vec<&PresetConfig> {
        self.presets.iter().filter(|p| p.enabled).collect()
    }

    /// Get a specific preset by ID
    pub fn get_preset(&self, id: &str) -> Option<&PresetConfig> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.is_empty() {
            return Err(ConfigError::NoPresets);
        }
        let mut seen = HashSet::new();
        for preset in &self.presets {
            if !seen.insert(preset.id.as_str()) {
                return Err(ConfigError::DuplicatePreset(preset.id.clone()));
            }
        }
        Ok(())
    }
}
