use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn list(path: &Path, character: Option<&str>) -> Result<(), String> {
    let session = super::load(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    match character {
        Some(name) => {
            let c = session.character(name).map_err(|e| e.to_string())?;
            if c.inventory().is_empty() {
                println!("  {} carries nothing.", c.name());
                return Ok(());
            }
            table.set_header(vec!["Name", "Kind", "Details", "Equipped"]);
            for item in c.inventory().iter() {
                table.add_row(vec![
                    item.name.clone(),
                    item.kind.label().to_string(),
                    item.kind.to_string(),
                    if item.is_equipped() { "yes" } else { "" }.to_string(),
                ]);
            }
            println!("{table}");
            println!();
            println!("  {} item(s)", c.inventory().len());
        }
        None => {
            if session.world().is_empty() {
                println!("  The world is empty.");
                return Ok(());
            }
            table.set_header(vec!["#", "Name", "Kind", "Details"]);
            for (index, item) in session.world().iter().enumerate() {
                table.add_row(vec![
                    index.to_string(),
                    item.name.clone(),
                    item.kind.label().to_string(),
                    item.kind.to_string(),
                ]);
            }
            println!("{table}");
            println!();
            println!("  {} item(s) in the world", session.world().len());
        }
    }
    Ok(())
}

pub fn pickup(path: &Path, character: &str, item: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        let name = session.pickup(character, item).map_err(|e| e.to_string())?;
        println!("  {} picks up {}", character.bold(), name.cyan());
        Ok(())
    })
}

pub fn drop(path: &Path, character: &str, item: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        session
            .drop_item(character, item)
            .map_err(|e| e.to_string())?;
        println!("  {} drops {}", character.bold(), item.cyan());
        Ok(())
    })
}

pub fn consume(path: &Path, character: &str, item: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        let left = session
            .act(character, |c, _| c.use_consumable(item))
            .map_err(|e| e.to_string())?;
        if left == 0 {
            println!("  {} uses the last {}", character.bold(), item.cyan());
        } else {
            println!("  {} uses {} ({left} left)", character.bold(), item.cyan());
        }
        Ok(())
    })
}

pub fn restock(path: &Path, character: &str, item: &str, quantity: u32) -> Result<(), String> {
    super::mutate(path, |session| {
        let amount = session
            .act(character, |c, _| c.restock(item, quantity))
            .map_err(|e| e.to_string())?;
        println!("  {} now has {amount} x {}", character.bold(), item.cyan());
        Ok(())
    })
}

pub fn delete(path: &Path, character: &str, item: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        session
            .act(character, |c, _| c.delete_item(item))
            .map_err(|e| e.to_string())?;
        println!("  {} destroys {}", character.bold(), item.cyan());
        Ok(())
    })
}
