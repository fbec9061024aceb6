//! Error types and exit codes for notesift.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes returned by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const NOTES_FILE_NOT_FOUND: i32 = 3;
}

/// Main error type for notesift operations.
///
/// Filtering itself never fails; these come from store lookups and from
/// loading notes files or configuration.
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Notes file not found: {0}")]
    NotesFileNotFound(PathBuf),

    #[error("No notes file given; pass --notes or set notes_file in the config")]
    NotesFileNotConfigured,

    #[error("Unsupported notes file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl NoteError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NoteError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            NoteError::NotesFileNotFound(_) => exit_code::NOTES_FILE_NOT_FOUND,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for notesift operations.
pub type Result<T> = std::result::Result<T, NoteError>;
