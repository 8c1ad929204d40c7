//! Error types for session management.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while running or persisting a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No character with this name.
    #[error("no character named \"{0}\"")]
    CharacterNotFound(String),

    /// No mob with this name.
    #[error("no mob named \"{0}\"")]
    MobNotFound(String),

    /// A character with this name already exists.
    #[error("a character named \"{0}\" already exists")]
    DuplicateCharacter(String),

    /// A mob with this name already exists.
    #[error("a mob named \"{0}\" already exists")]
    DuplicateMob(String),

    /// No world item matches the given name or index.
    #[error("no item \"{0}\" in the world")]
    WorldItemNotFound(String),

    /// The save file was written by an incompatible version.
    #[error("unsupported session schema {found} (expected {expected})")]
    UnsupportedSchema {
        /// Version found in the file.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// Mechanics engine error.
    #[error("{0}")]
    Mech(#[from] ash_mechanics::MechError),

    /// Inventory or catalog error.
    #[error("{0}")]
    Core(#[from] ash_core::CoreError),

    /// Reading or writing the save file failed.
    #[error("session file: {0}")]
    Io(#[from] std::io::Error),

    /// The save file is not valid session JSON.
    #[error("session format: {0}")]
    Json(#[from] serde_json::Error),
}
