use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(path: &Path) -> Result<(), String> {
    let session = super::load(path)?;

    println!(
        "  {} (updated {})",
        session.config().campaign.bold(),
        session.updated_at().format("%Y-%m-%d %H:%M")
    );
    let rules = session.rules();
    println!(
        "  {}",
        format!(
            "up to {} rings, first level costs {} souls",
            rules.ring_limit, rules.base_soul_cost
        )
        .dimmed()
    );
    println!();

    let characters: Vec<_> = session.characters().collect();
    if characters.is_empty() {
        println!("  No characters.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Character", "Lvl", "HP", "Mana", "AC", "Souls"]);
        for c in &characters {
            let hp = format!("{:.1}/{:.1}", c.hp().current, c.hp().max);
            let mana = format!("{:.1}/{:.1}", c.mana().current, c.mana().max);
            let name = if c.is_dead() {
                format!("{} (dead)", c.name())
            } else {
                c.name().to_string()
            };
            table.add_row(vec![
                name,
                c.level().to_string(),
                hp,
                mana,
                c.armor_class().to_string(),
                c.souls().to_string(),
            ]);
        }
        println!("{table}");
    }
    println!();

    let mobs: Vec<_> = session.mobs().collect();
    if mobs.is_empty() {
        println!("  No mobs.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Mob", "HP", "AC", "Abilities"]);
        for mob in &mobs {
            let abilities: Vec<&str> = mob.abilities().iter().map(|a| a.name.as_str()).collect();
            let abilities = if abilities.is_empty() {
                "—".to_string()
            } else {
                abilities.join(", ")
            };
            table.add_row(vec![
                mob.name.clone(),
                mob.hp.to_string(),
                mob.armor_class.to_string(),
                abilities,
            ]);
        }
        println!("{table}");
    }
    println!();

    println!("  {} item(s) in the world", session.world().len());
    Ok(())
}
