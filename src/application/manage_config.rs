//! Config management use case

use crate::error::{Result, VocabError};
use crate::infrastructure::config::{validate_date_format, validate_slot, DEFAULT_DATE_FORMAT};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::path::PathBuf;

/// Keys accepted by `config`
pub const CONFIG_KEYS: &str = "slot, seed, date_format, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "slot" => Ok(config.slot),
            "seed" => Ok(config
                .seed
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "date_format" => Ok(config.date_format),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value; an empty `seed` or `date_format` resets it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "slot" => {
                validate_slot(value)?;
                config.slot = value.to_string();
            }
            "seed" => {
                config.seed = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "date_format" => {
                config.date_format = if value.is_empty() {
                    DEFAULT_DATE_FORMAT.to_string()
                } else {
                    validate_date_format(value)?;
                    value.to_string()
                };
            }
            "created" => {
                return Err(VocabError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        tracing::info!(key, value, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> VocabError {
    VocabError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, CONFIG_KEYS
    ))
}
