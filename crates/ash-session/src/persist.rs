//! JSON persistence for sessions.
//!
//! The whole session graph is written as one pretty-printed document. The
//! schema version is checked before the rest of the file is parsed.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SessionError, SessionResult};
use crate::session::{SCHEMA_VERSION, Session};

#[derive(Deserialize)]
struct Header {
    schema_version: u32,
}

impl Session {
    /// Serialize the session to pretty JSON.
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a session from JSON, rejecting other schema versions.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        let header: Header = serde_json::from_str(json)?;
        if header.schema_version != SCHEMA_VERSION {
            return Err(SessionError::UnsupportedSchema {
                found: header.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        let session: Self = serde_json::from_str(json)?;
        session.config.rules.validate()?;
        Ok(session)
    }

    /// Write the session to `path`.
    pub fn save(&self, path: &Path) -> SessionResult<()> {
        fs::write(path, self.to_json()?)?;
        tracing::info!("Saved session to {:?}", path);
        Ok(())
    }

    /// Read a session from `path`.
    pub fn load(path: &Path) -> SessionResult<Self> {
        let json = fs::read_to_string(path)?;
        let session = Self::from_json(&json)?;
        tracing::info!(
            "Loaded session from {:?} ({} characters, {} mobs, {} world items)",
            path,
            session.characters.len(),
            session.mobs.len(),
            session.world.len()
        );
        Ok(session)
    }
}
