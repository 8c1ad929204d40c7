use std::path::Path;

use ash_core::{
    Armor, ArmorSlot, Attributes, Consumable, EstusFlask, FlaskType, Item, ItemKind,
    Requirements, Ring, SoulItem, Spell, Weapon,
};

use crate::{ItemAction, RequirementArgs};

pub fn run(path: &Path, action: ItemAction) -> Result<(), String> {
    let item = build(action)?;
    super::mutate(path, |session| {
        let line = super::describe(&item);
        let index = session.add_world_item(item);
        println!("  Created #{index} {line}");
        Ok(())
    })
}

fn build(action: ItemAction) -> Result<Item, String> {
    let (name, description, kind): (String, String, ItemKind) = match action {
        ItemAction::Weapon {
            name,
            dice,
            requirements,
            description,
        } => {
            let (count, faces) = parse_dice(&dice)?;
            let weapon = Weapon::new(count, faces, requirements.into());
            (name, description, weapon.into())
        }
        ItemAction::Spell {
            name,
            dice,
            requirements,
            mana_cost,
            slots,
            description,
        } => {
            let (count, faces) = parse_dice(&dice)?;
            let profile = Weapon::new(count, faces, requirements.into());
            (name, description, Spell::new(profile, mana_cost, slots).into())
        }
        ItemAction::Ring {
            name,
            vigor,
            attunement,
            strength,
            dexterity,
            intelligence,
            faith,
            description,
        } => {
            let bonuses =
                Attributes::new(vigor, attunement, strength, dexterity, intelligence, faith);
            (name, description, Ring::new(bonuses).into())
        }
        ItemAction::Armor {
            name,
            slot,
            ac,
            requirements,
            description,
        } => {
            let slot = slot.parse::<ArmorSlot>().map_err(|e| e.to_string())?;
            (name, description, Armor::new(slot, ac, requirements.into()).into())
        }
        ItemAction::Flask {
            name,
            hp,
            mana,
            charges,
            max_charges,
            modifier,
            flask_type,
            description,
        } => {
            let flask_type = flask_type
                .parse::<FlaskType>()
                .map_err(|e| e.to_string())?;
            let flask = EstusFlask::new(hp, mana, charges, max_charges, modifier, flask_type);
            (name, description, flask.into())
        }
        ItemAction::Soul {
            name,
            value,
            description,
        } => (name, description, SoulItem::new(value).into()),
        ItemAction::Consumable {
            name,
            amount,
            description,
        } => {
            if amount == 0 {
                return Err("a consumable stack needs at least one unit".to_string());
            }
            (name, description, Consumable::new(amount).into())
        }
    };
    if name.trim().is_empty() {
        return Err("item name cannot be empty".to_string());
    }
    Ok(Item::new(name, kind).with_description(description))
}

impl From<RequirementArgs> for Requirements {
    fn from(args: RequirementArgs) -> Self {
        Requirements::new(args.strength, args.dexterity, args.intelligence, args.faith)
    }
}

/// Parse dice notation such as `2d6`.
fn parse_dice(notation: &str) -> Result<(u32, u32), String> {
    let invalid = || format!("invalid dice \"{notation}\" (expected e.g. 2d6)");
    let (count, faces) = notation
        .trim()
        .to_lowercase()
        .split_once('d')
        .map(|(c, f)| (c.to_string(), f.to_string()))
        .ok_or_else(invalid)?;
    let count = if count.is_empty() {
        1
    } else {
        count.parse().map_err(|_| invalid())?
    };
    let faces = faces.parse().map_err(|_| invalid())?;
    Ok((count, faces))
}
