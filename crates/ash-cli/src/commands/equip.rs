use std::path::Path;

use ash_mechanics::{EquipOutcome, UnequipOutcome};
use colored::Colorize;

pub fn equip(path: &Path, character: &str, item: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        let outcome = session.equip(character, item).map_err(|e| e.to_string())?;
        let detail = match outcome {
            EquipOutcome::Armor { slot, armor_class } => {
                format!("{slot} slot, AC {armor_class}")
            }
            EquipOutcome::Weapon => "weapon slot".to_string(),
            EquipOutcome::Ring { worn } => format!("{worn} ring(s) worn"),
            EquipOutcome::Spell { remaining } => format!("{remaining} spell slot(s) left"),
        };
        println!(
            "  {} equips {} ({detail})",
            character.bold(),
            item.green()
        );
        Ok(())
    })
}

pub fn unequip(path: &Path, character: &str, item: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        let outcome = session
            .unequip(character, item)
            .map_err(|e| e.to_string())?;
        let detail = match outcome {
            UnequipOutcome::Armor { slot, armor_class } => {
                format!("{slot} slot, AC {armor_class}")
            }
            UnequipOutcome::Weapon => "weapon slot".to_string(),
            UnequipOutcome::Ring { worn } => format!("{worn} ring(s) worn"),
            UnequipOutcome::Spell { remaining } => format!("{remaining} spell slot(s) left"),
        };
        println!(
            "  {} unequips {} ({detail})",
            character.bold(),
            item.yellow()
        );
        Ok(())
    })
}
