use std::path::Path;

use ash_mechanics::DamageOutcome;
use colored::Colorize;

pub fn damage(path: &Path, target: &str, amount: u32, is_mob: bool) -> Result<(), String> {
    super::mutate(path, |session| {
        let outcome = if is_mob {
            session.damage_mob(target, amount)
        } else {
            session.damage_character(target, amount)
        }
        .map_err(|e| e.to_string())?;
        match outcome {
            DamageOutcome::Wounded { remaining } => {
                println!("  {} takes {amount} damage (HP {remaining:.1})", target.bold());
            }
            DamageOutcome::Died if is_mob => {
                println!("  {} takes {amount} damage and is {}", target.bold(), "slain".red());
            }
            DamageOutcome::Died => {
                println!("  {} takes {amount} damage and {}", target.bold(), "dies".red());
            }
        }
        Ok(())
    })
}

pub fn drink(path: &Path, character: &str, flask: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        let sip = session
            .act(character, |c, _| c.drink_flask(flask))
            .map_err(|e| e.to_string())?;
        let c = session.character(character).map_err(|e| e.to_string())?;
        let track = match sip.flask_type {
            ash_core::FlaskType::Health => c.hp(),
            ash_core::FlaskType::Mana => c.mana(),
        };
        if sip.charges == 0 && sip.restored <= 0.0 {
            println!("  {} is empty", flask.cyan());
        } else {
            println!(
                "  {} drinks {} (+{:.1}, {track}, {} charge(s) left)",
                character.bold(),
                flask.cyan(),
                sip.restored,
                sip.charges
            );
        }
        Ok(())
    })
}

pub fn upgrade_flask(path: &Path, character: &str, flask: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        let max = session
            .act(character, |c, _| c.upgrade_flask(flask))
            .map_err(|e| e.to_string())?;
        println!("  {} now holds {max} charges", flask.cyan());
        Ok(())
    })
}

pub fn rest(path: &Path, character: Option<&str>) -> Result<(), String> {
    super::mutate(path, |session| {
        match character {
            Some(name) => {
                let flasks = session
                    .act(name, |c, _| Ok(c.rest_at_bonfire()))
                    .map_err(|e| e.to_string())?;
                println!(
                    "  {} rests at the bonfire ({flasks} flask(s) refilled)",
                    name.bold()
                );
            }
            None => {
                let rested = session.rest_all();
                println!("  {rested} character(s) rest at the bonfire");
            }
        }
        Ok(())
    })
}

pub fn mana(path: &Path, character: &str, amount: f64) -> Result<(), String> {
    super::mutate(path, |session| {
        let spent = session
            .act(character, |c, _| c.spend_mana(amount))
            .map_err(|e| e.to_string())?;
        let c = session.character(character).map_err(|e| e.to_string())?;
        if spent {
            println!("  {} spends {amount} mana ({})", character.bold(), c.mana());
        } else {
            println!("  {} lacks the mana ({})", character.bold(), c.mana());
        }
        Ok(())
    })
}

pub fn cast(path: &Path, character: &str, spell: &str) -> Result<(), String> {
    super::mutate(path, |session| {
        let cast = session
            .act(character, |c, _| c.cast_spell(spell))
            .map_err(|e| e.to_string())?;
        let c = session.character(character).map_err(|e| e.to_string())?;
        if cast {
            println!("  {} casts {} ({})", character.bold(), spell.magenta(), c.mana());
        } else {
            println!("  {} lacks the mana for {} ({})", character.bold(), spell.magenta(), c.mana());
        }
        Ok(())
    })
}
