use std::path::Path;

use ash_core::{ArmorSlot, Attributes, Stat};
use ash_mechanics::Character;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn new(path: &Path, name: &str, attributes: Attributes, level: u32) -> Result<(), String> {
    super::mutate(path, |session| {
        let c = session
            .create_character(name, attributes, level)
            .map_err(|e| e.to_string())?;
        println!(
            "  Created {} (level {}, {}, {}, {} spell slots)",
            c.name().bold(),
            c.level(),
            c.hp(),
            c.mana(),
            c.spell_slots().total
        );
        Ok(())
    })
}

pub fn show(path: &Path, name: &str) -> Result<(), String> {
    let session = super::load(path)?;
    let c = session.character(name).map_err(|e| e.to_string())?;
    print_sheet(c);
    Ok(())
}

fn print_sheet(c: &Character) {
    let status = if c.is_dead() {
        "dead".red().to_string()
    } else {
        "alive".green().to_string()
    };
    println!("  {} [level {}, {}]", c.name().bold(), c.level(), status);
    println!();

    let mut stats = Table::new();
    stats.set_content_arrangement(ContentArrangement::Dynamic);
    stats.set_header(Stat::ALL.iter().map(|s| s.abbrev()).collect::<Vec<_>>());
    stats.add_row(
        Stat::ALL
            .iter()
            .map(|&s| c.attributes().get(s).to_string())
            .collect::<Vec<_>>(),
    );
    println!("{stats}");
    println!();

    let slots = c.spell_slots();
    println!("  {}", c.hp());
    println!("  {}", c.mana());
    println!("  spell slots: {}/{}", slots.remaining(), slots.total);
    println!("  armor class: {}", c.armor_class());
    println!("  souls:       {} (next level {})", c.souls(), c.soul_cost());
    println!();

    let name_of = |id| {
        c.inventory()
            .find(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| "?".to_string())
    };
    for slot in ArmorSlot::ALL {
        let held = c
            .loadout()
            .armor(slot)
            .map(name_of)
            .unwrap_or_else(|| "—".dimmed().to_string());
        println!("  {:<8} {held}", format!("{slot}:"));
    }
    let weapon = c
        .loadout()
        .weapon()
        .map(name_of)
        .unwrap_or_else(|| "—".dimmed().to_string());
    println!("  {:<8} {weapon}", "weapon:");
    let rings: Vec<String> = c.loadout().rings().iter().copied().map(name_of).collect();
    if rings.is_empty() {
        println!("  {:<8} {}", "rings:", "—".dimmed());
    } else {
        println!("  {:<8} {}", "rings:", rings.join(", "));
    }
    println!();

    if c.inventory().is_empty() {
        println!("  Inventory is empty.");
    } else {
        println!("  Inventory:");
        for item in c.inventory().iter() {
            println!("    {}", super::describe(item));
        }
    }
}
