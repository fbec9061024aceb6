//! User configuration, read from `<config dir>/notesift/config.toml`.

use crate::error::{NoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notes file used when `--notes` is not given.
    pub notes_file: Option<PathBuf>,

    /// Default tracing filter (e.g. `"info"` or `"notesift=debug"`).
    pub log_level: Option<String>,
}

impl Config {
    /// Location of the config file, if the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notesift").join("config.toml"))
    }

    /// Load the user config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| NoteError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Pick the notes file: the CLI flag first, then the config.
    pub fn resolve_notes_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        let path = cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.notes_file.clone())
            .ok_or(NoteError::NotesFileNotConfigured)?;

        if !path.is_file() {
            return Err(NoteError::NotesFileNotFound(path));
        }
        Ok(path)
    }
}
