use crate::core::models::Config;
use crate::core::traits::StorageBackend;
use crate::utils::APP_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct JsonStorageBackend {
    file_path: PathBuf,
}

impl JsonStorageBackend {
    pub fn new() -> Result<Self> {
        let mut path = dirs::config_dir().context("Could not find config directory")?;
        path.push(APP_NAME);

        fs::create_dir_all(&path)?;

        path.push("config.json");
        Ok(Self { file_path: path })
    }

    /// Backend rooted at an explicit file, for tests.
    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl StorageBackend for JsonStorageBackend {
    fn load(&self) -> Result<Config> {
        if !self.file_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&self.file_path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    fn save(&self, config: &Config) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
