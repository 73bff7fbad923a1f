//! Journal directory discovery and layout

use crate::error::{Result, VocabError};
use crate::infrastructure::persistence::FileSlot;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that pins the journal root
pub const ROOT_ENV: &str = "VOCAB_ROOT";

/// Abstract access to a journal's metadata directory
pub trait JournalRepository {
    /// Get the root directory of this journal
    fn root(&self) -> &Path;

    /// Load configuration from .vocab/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .vocab/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .vocab directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .vocab directory
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the journal root: VOCAB_ROOT first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_vocab_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(VocabError::Config(format!(
                "{} is set to '{}' but no .vocab directory found. \
                Run 'vocab init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .vocab is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_vocab_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| VocabError::NotVocabDirectory(start.to_path_buf()))
    }

    fn has_vocab_dir(path: &Path) -> bool {
        path.join(".vocab").is_dir()
    }

    /// Persistence slot named by `config`
    pub fn slot(&self, config: &Config) -> FileSlot {
        FileSlot::new(&self.root, &config.slot)
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_vocab_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let vocab_dir = self.root.join(".vocab");

        if vocab_dir.exists() {
            return Err(VocabError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&vocab_dir)?;
        Ok(())
    }
}
