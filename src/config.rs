use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Path opened at startup
    pub initial_path: String,
    pub tick_rate_ms: u64,
    /// Key-value storage file; defaults to `<config_dir>/tutorlms/storage.json`
    pub storage_path: Option<PathBuf>,
    pub log_level: String,
    pub sync_current_page: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
            tick_rate_ms: 250,
            storage_path: None,
            log_level: "info".to_string(),
            sync_current_page: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, config_content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("tutorlms"))
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Tick interval, never below 50ms
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms.max(50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tutorlms").join("config.json");
        let config = Config {
            initial_path: "/analytics".to_string(),
            tick_rate_ms: 100,
            storage_path: Some(dir.path().join("storage.json")),
            log_level: "debug".to_string(),
            sync_current_page: false,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "initial_path": "/practice" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.initial_path, "/practice");
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.sync_current_page);
    }

    #[test]
    fn test_tick_rate_floor() {
        let config = Config { tick_rate_ms: 1, ..Config::default() };
        assert_eq!(config.tick_rate(), std::time::Duration::from_millis(50));
    }
}
