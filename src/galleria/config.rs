use crate::error::{GalleriaError, Result};
use crate::controls::EngineOptions;
use crate::model::DEFAULT_NOUN;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Configuration for galleria, stored in .galleria/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleriaConfig {
    /// Quiescence window for live search, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Noun used in the status line ("Showing all 3 artworks")
    #[serde(default = "default_noun")]
    pub noun: String,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_noun() -> String {
    DEFAULT_NOUN.to_string()
}

impl Default for GalleriaConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            noun: default_noun(),
        }
    }
}

impl GalleriaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GalleriaError::Io)?;
        let config: GalleriaConfig =
            serde_json::from_str(&content).map_err(GalleriaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GalleriaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GalleriaError::Serialization)?;
        fs::write(config_path, content).map_err(GalleriaError::Io)?;
        Ok(())
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            debounce_window: self.debounce_window(),
            noun: self.noun.clone(),
        }
    }

    /// Current value of a config key, by its CLI name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "debounce-ms" => Ok(self.debounce_ms.to_string()),
            "noun" => Ok(self.noun.clone()),
            other => Err(GalleriaError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Sets a config key from its CLI name and a textual value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "debounce-ms" => {
                self.debounce_ms = value.trim().parse().map_err(|_| {
                    GalleriaError::Config(format!("debounce-ms must be a whole number: {}", value))
                })?;
            }
            "noun" => {
                let noun = value.trim();
                if noun.is_empty() {
                    return Err(GalleriaError::Config("noun cannot be empty".into()));
                }
                self.noun = noun.to_string();
            }
            other => {
                return Err(GalleriaError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub const KEYS: [&'static str; 2] = ["debounce-ms", "noun"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GalleriaConfig::default();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.noun, "artworks");
        assert_eq!(config.debounce_window(), Duration::from_millis(300));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = GalleriaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, GalleriaConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join(".galleria");

        let mut config = GalleriaConfig::default();
        config.set("debounce-ms", "150").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = GalleriaConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.debounce_ms, 150);
        assert_eq!(loaded.noun, "artworks");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"noun": "prints"}"#).unwrap();

        let loaded = GalleriaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.noun, "prints");
        assert_eq!(loaded.debounce_ms, 300);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = GalleriaConfig::default();
        assert!(matches!(
            config.set("debounce-ms", "soon"),
            Err(GalleriaError::Config(_))
        ));
        assert!(config.set("noun", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
        assert_eq!(config, GalleriaConfig::default());
    }
}
