use std::path::Path;

use ash_core::Mob;
use colored::Colorize;

pub fn new(path: &Path, name: &str, hp: u32, ac: u32) -> Result<(), String> {
    super::mutate(path, |session| {
        let mob = Mob::new(name, hp, ac);
        println!("  Spawned {}", mob.to_string().bold());
        session.add_mob(mob).map_err(|e| e.to_string())
    })
}

pub fn heal(path: &Path, name: &str, amount: u32) -> Result<(), String> {
    super::mutate(path, |session| {
        let hp = session.heal_mob(name, amount).map_err(|e| e.to_string())?;
        println!("  {} heals {amount} (HP {hp})", name.bold());
        Ok(())
    })
}

pub fn assign(path: &Path, mob: &str, item: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        let ability = session
            .assign_ability(mob, item)
            .map_err(|e| e.to_string())?;
        println!("  {} gains ability {}", mob.bold(), ability.cyan());
        Ok(())
    })
}

pub fn forget(path: &Path, mob: &str, ability: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        session
            .remove_ability(mob, ability)
            .map_err(|e| e.to_string())?;
        println!("  {} loses ability {}", mob.bold(), ability.cyan());
        Ok(())
    })
}
