use std::path::Path;

use ash_core::Stat;
use colored::Colorize;

pub fn add_souls(path: &Path, character: &str, amount: u64) -> Result<(), String> {
    super::mutate(path, |session| {
        let total = session
            .act(character, |c, _| Ok(c.add_souls(amount)))
            .map_err(|e| e.to_string())?;
        println!("  {} gains {amount} souls ({total})", character.bold());
        Ok(())
    })
}

pub fn remove_souls(path: &Path, character: &str, amount: u64) -> Result<(), String> {
    super::mutate(path, |session| {
        let total = session
            .act(character, |c, _| Ok(c.remove_souls(amount)))
            .map_err(|e| e.to_string())?;
        println!("  {} loses up to {amount} souls ({total})", character.bold());
        Ok(())
    })
}

pub fn consume_soul(path: &Path, character: &str, item: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        let value = session
            .act(character, |c, _| c.consume_soul_item(item))
            .map_err(|e| e.to_string())?;
        let total = session
            .character(character)
            .map_err(|e| e.to_string())?
            .souls();
        println!(
            "  {} crushes {} for {value} souls ({total})",
            character.bold(),
            item.cyan()
        );
        Ok(())
    })
}

pub fn level(path: &Path, character: &str, stat: &str) -> Result<(), String> {
    let stat = stat.parse::<Stat>().map_err(|e| e.to_string())?;
    super::mutate(path, |session| {
        let up = session
            .level_stat(character, stat)
            .map_err(|e| e.to_string())?;
        println!(
            "  {} reaches level {} ({} {}, spent {}, next {})",
            character.bold(),
            up.level.to_string().green(),
            up.stat,
            up.value,
            up.spent,
            up.next_cost
        );
        Ok(())
    })
}
