//! Session state and persistence for Ashen Ledger.
//!
//! A [`Session`] owns every character, mob, and loose item in a campaign and
//! moves items between them. It saves to and loads from a single JSON file.

pub mod config;
pub mod error;
pub mod persist;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use session::{SCHEMA_VERSION, Session};
