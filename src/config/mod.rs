use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    domain::reservation::Platform,
    errors::CoreError,
    utils::{app_data_dir, config_backups_dir_in, ensure_dir, persistence},
};

const CONFIG_FILE: &str = "config.json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub default_platforms: Vec<Platform>,
    pub processing_delay_ms: u64,
    pub settle_delay_ms: u64,
    pub approval_rate: f64,
    pub availability_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            default_platforms: Platform::all().to_vec(),
            processing_delay_ms: 2000,
            settle_delay_ms: 1500,
            approval_rate: 0.9,
            availability_rate: 0.8,
        }
    }
}

impl Config {
    pub fn processor_timing(&self) -> crate::checkout::ProcessorTiming {
        crate::checkout::ProcessorTiming {
            processing_delay: std::time::Duration::from_millis(self.processing_delay_ms),
            settle_delay: std::time::Duration::from_millis(self.settle_delay_ms),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
    backups_dir: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, CoreError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, CoreError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, CoreError> {
        ensure_dir(&base)?;
        let backups_dir = config_backups_dir_in(&base);
        ensure_dir(&backups_dir)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
            backups_dir,
        })
    }

    /// Loads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, CoreError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        persistence::load_json_from_path(&self.path)
    }

    pub fn save(&self, config: &Config) -> Result<(), CoreError> {
        persistence::save_json_to_path(config, &self.path)
    }

    /// Snapshots the current config file into the backups directory.
    pub fn backup(&self) -> Result<Option<PathBuf>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let stamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let target = self.backups_dir.join(format!("config_{stamp}.json"));
        fs::copy(&self.path, &target)?;
        Ok(Some(target))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert!(manager.backup().unwrap().is_none());
    }

    #[test]
    fn save_load_and_backup_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();

        let mut config = Config::default();
        config.approval_rate = 0.5;
        config.processing_delay_ms = 100;
        manager.save(&config).unwrap();

        assert_eq!(manager.load().unwrap(), config);
        let backup = manager.backup().unwrap().expect("backup created");
        assert!(backup.exists());
    }
}
