//! Configuration file support for Fitdesk.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitdesk/config.toml`.

use crate::types::DietType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub plans: PlanConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Defaults applied when plan-generation flags are omitted
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_meal_count")]
    pub default_meal_count: u32,

    #[serde(default = "default_diet_type")]
    pub default_diet_type: DietType,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            default_meal_count: default_meal_count(),
            default_diet_type: default_diet_type(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("fitdesk")
}

fn default_meal_count() -> u32 {
    4
}

fn default_diet_type() -> DietType {
    DietType::Balanced
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        if config.plans.default_meal_count == 0 {
            return Err(Error::Config(
                "plans.default_meal_count must be at least 1".into(),
            ));
        }
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("fitdesk").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.plans.default_meal_count, 4);
        assert_eq!(config.plans.default_diet_type, DietType::Balanced);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            config.plans.default_meal_count,
            parsed.plans.default_meal_count
        );
        assert_eq!(
            config.plans.default_diet_type,
            parsed.plans.default_diet_type
        );
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[plans]
default_meal_count = 5
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.plans.default_meal_count, 5);
        assert_eq!(config.plans.default_diet_type, DietType::Balanced); // default
    }

    #[test]
    fn test_diet_type_from_toml() {
        let toml_str = r#"
[plans]
default_diet_type = "Low Carb"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.plans.default_diet_type, DietType::LowCarb);
    }

    #[test]
    fn test_zero_meal_count_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[plans]\ndefault_meal_count = 0\n").unwrap();

        let result = Config::load_from(&path);
        assert!(result.is_err());
    }
}
