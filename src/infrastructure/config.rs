//! Configuration management

use crate::domain::Entry;
use crate::error::{Result, VocabError};
use crate::infrastructure::persistence::{decode_entries, DEFAULT_SLOT};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Header format used when printing a day, e.g. `Wed Jan 10 2024`
pub const DEFAULT_DATE_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the persistence slot under `.vocab/`
    #[serde(default = "default_slot")]
    pub slot: String,
    /// Seed entries file, relative to the journal root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
    /// strftime format for day headers
    #[serde(default = "default_date_format")]
    pub date_format: String,
    pub created: DateTime<Utc>,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            slot: default_slot(),
            seed: None,
            date_format: default_date_format(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .vocab/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".vocab").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VocabError::NotVocabDirectory(path.to_path_buf())
            } else {
                VocabError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| VocabError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .vocab/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let vocab_dir = path.join(".vocab");
        let config_path = vocab_dir.join("config.toml");

        if !vocab_dir.exists() {
            fs::create_dir(&vocab_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Reject values that would break the slot path or day headers
    pub fn validate(&self) -> Result<()> {
        validate_slot(&self.slot)?;
        validate_date_format(&self.date_format)
    }

    /// Seed entries for a journal rooted at `root`; empty when no seed file is configured
    pub fn load_seed(&self, root: &Path) -> Result<Vec<Entry>> {
        let Some(seed) = &self.seed else {
            return Ok(Vec::new());
        };

        let seed_path = root.join(seed);
        let text = fs::read_to_string(&seed_path).map_err(|e| {
            VocabError::Config(format!(
                "Failed to read seed file {}: {}",
                seed_path.display(),
                e
            ))
        })?;

        decode_entries(&text).map_err(|e| {
            VocabError::Config(format!(
                "Seed file {} is not a valid entry list: {}",
                seed_path.display(),
                e
            ))
        })
    }
}

/// Slot names become file names, so keep them to a single plain path segment
pub fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(VocabError::Config(format!(
            "Invalid slot name: '{}'. Use letters, digits, '-' or '_'",
            slot
        )))
    }
}

/// Day headers are printed with this format, so it must be valid strftime that a
/// plain date can render (no time or zone specifiers such as `%H` or `%z`)
pub fn validate_date_format(format: &str) -> Result<()> {
    let parses = !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    let renders = parses && write!(String::new(), "{}", NaiveDate::MIN.format(format)).is_ok();
    if !renders {
        return Err(VocabError::Config(format!(
            "Invalid date_format: '{}'. Expected a strftime pattern such as '{}'",
            format, DEFAULT_DATE_FORMAT
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.slot, "entries");
        assert_eq!(config.seed, None);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            slot: "words".to_string(),
            seed: Some(PathBuf::from("seed.json")),
            ..Config::default()
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".vocab/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.slot, "words");
        assert_eq!(loaded.seed, Some(PathBuf::from("seed.json")));
        assert_eq!(loaded.date_format, config.date_format);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".vocab")).unwrap();
        fs::write(
            temp.path().join(".vocab/config.toml"),
            "created = \"2024-01-10T08:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.slot, DEFAULT_SLOT);
        assert_eq!(loaded.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            VocabError::NotVocabDirectory(_) => {}
            other => panic!("Expected NotVocabDirectory error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_bad_slot() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".vocab")).unwrap();
        fs::write(
            temp.path().join(".vocab/config.toml"),
            "slot = \"../escape\"\ncreated = \"2024-01-10T08:00:00Z\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(VocabError::Config(_))
        ));
    }

    #[test]
    fn test_validate_slot() {
        assert!(validate_slot("entries").is_ok());
        assert!(validate_slot("vocab_2024-b").is_ok());
        assert!(validate_slot("").is_err());
        assert!(validate_slot("a/b").is_err());
        assert!(validate_slot("..").is_err());
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format(DEFAULT_DATE_FORMAT).is_ok());
        assert!(validate_date_format("%Y-%m-%d").is_ok());
        assert!(validate_date_format("%Q").is_err());
        assert!(validate_date_format("%H").is_err());
        assert!(validate_date_format("%H:%M").is_err());
        assert!(validate_date_format("%d %z").is_err());
    }

    #[test]
    fn test_load_rejects_time_only_date_format() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".vocab")).unwrap();
        fs::write(
            temp.path().join(".vocab/config.toml"),
            "date_format = \"%H:%M\"\ncreated = \"2024-01-10T08:00:00Z\"\n",
        )
        .unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            VocabError::Config(msg) => assert!(msg.contains("Invalid date_format")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_seed_unset_is_empty() {
        let temp = TempDir::new().unwrap();
        let seed = Config::default().load_seed(temp.path()).unwrap();
        assert!(seed.is_empty());
    }

    #[test]
    fn test_load_seed_from_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("seed.json"),
            r#"[{"key":"serendipity","value":"a happy accident","createdAt":"2024-01-01"}]"#,
        )
        .unwrap();
        let config = Config {
            seed: Some(PathBuf::from("seed.json")),
            ..Config::default()
        };

        let seed = config.load_seed(temp.path()).unwrap();

        assert_eq!(
            seed,
            vec![Entry::new(
                "serendipity",
                "a happy accident",
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
            )]
        );
    }

    #[test]
    fn test_load_seed_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            seed: Some(PathBuf::from("nope.json")),
            ..Config::default()
        };

        match config.load_seed(temp.path()).unwrap_err() {
            VocabError::Config(msg) => assert!(msg.contains("nope.json")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
