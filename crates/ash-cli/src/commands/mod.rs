pub mod character;
pub mod combat;
pub mod equip;
pub mod init;
pub mod inventory;
pub mod item;
pub mod mob;
pub mod progress;
pub mod status;

use std::path::Path;

use ash_core::Item;
use ash_session::Session;
use colored::Colorize;

/// Load the session file.
fn load(path: &Path) -> Result<Session, String> {
    if !path.exists() {
        return Err(format!(
            "no session at {} (run `ash init` first)",
            path.display()
        ));
    }
    Session::load(path).map_err(|e| format!("cannot load {}: {e}", path.display()))
}

/// Write the session file.
fn save(session: &Session, path: &Path) -> Result<(), String> {
    session
        .save(path)
        .map_err(|e| format!("cannot write {}: {e}", path.display()))
}

/// Load, run one mutation, and save if it succeeded.
fn mutate<T>(
    path: &Path,
    op: impl FnOnce(&mut Session) -> Result<T, String>,
) -> Result<T, String> {
    let mut session = load(path)?;
    let out = op(&mut session)?;
    save(&session, path)?;
    Ok(out)
}

/// One-line item summary used by listings and confirmations.
fn describe(item: &Item) -> String {
    let mut line = format!("{} [{}]", item.name.bold(), item.kind);
    if item.is_equipped() {
        line.push_str(&format!(" {}", "(equipped)".green()));
    }
    line
}
