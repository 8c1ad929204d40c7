//! Character sheets: primary stats, derived tracks, currency, and inventory.
//!
//! Fields are private to the crate so that caps, slots, and equipped flags
//! only change through the engine operations in [`crate::equipment`],
//! [`crate::leveling`], and [`crate::combat`].

pub mod track;

pub use track::Track;

use ash_core::{Attributes, Inventory, Item};
use serde::{Deserialize, Serialize};

use crate::equipment::Loadout;
use crate::error::MechResult;
use crate::rules::Rules;

/// Spell-slot budget: a total derived from attunement and the share in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSlots {
    /// Slots granted by attunement.
    pub total: u32,
    /// Slots consumed by equipped spells.
    pub used: u32,
}

impl SpellSlots {
    /// Slots still free. Zero if a ring removal left more in use than granted.
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) hp: Track,
    pub(crate) mana: Track,
    pub(crate) spell_slots: SpellSlots,
    pub(crate) armor_class: u32,
    pub(crate) souls: u64,
    pub(crate) level: u32,
    pub(crate) soul_cost: u64,
    pub(crate) loadout: Loadout,
    pub(crate) inventory: Inventory,
}

impl Character {
    /// Create a character with full HP and mana. Level is at least 1.
    pub fn new(name: impl Into<String>, attributes: Attributes, level: u32, rules: &Rules) -> Self {
        Self {
            name: name.into(),
            attributes,
            hp: Track::new("HP", rules.max_hp(attributes.vigor)),
            mana: Track::new("Mana", rules.max_mana(attributes.attunement)),
            spell_slots: SpellSlots {
                total: rules.spell_slots(attributes.attunement),
                used: 0,
            },
            armor_class: 0,
            souls: 0,
            level: level.max(1),
            soul_cost: rules.base_soul_cost,
            loadout: Loadout::default(),
            inventory: Inventory::new(),
        }
    }

    /// Recompute max HP, max mana, and the spell-slot total from current stats.
    ///
    /// Current HP and mana are clamped down if their maximum shrank.
    pub fn recompute_caps(&mut self, rules: &Rules) {
        self.hp.set_max(rules.max_hp(self.attributes.vigor));
        self.mana.set_max(rules.max_mana(self.attributes.attunement));
        self.spell_slots.total = rules.spell_slots(self.attributes.attunement);
    }

    /// Character name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current primary stats, ring bonuses included.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Health track.
    pub fn hp(&self) -> &Track {
        &self.hp
    }

    /// Mana track.
    pub fn mana(&self) -> &Track {
        &self.mana
    }

    /// Spell-slot budget.
    pub fn spell_slots(&self) -> SpellSlots {
        self.spell_slots
    }

    /// Armor class from worn armor.
    pub fn armor_class(&self) -> u32 {
        self.armor_class
    }

    /// Soul currency.
    pub fn souls(&self) -> u64 {
        self.souls
    }

    /// Character level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Souls needed for the next level.
    pub fn soul_cost(&self) -> u64 {
        self.soul_cost
    }

    /// Equipped item identities.
    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    /// Owned items.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns true once HP has reached zero.
    pub fn is_dead(&self) -> bool {
        self.hp.is_empty()
    }

    /// Check whether `item` could be received without error.
    pub fn can_receive(&self, item: &Item) -> MechResult<()> {
        Ok(self.inventory.accepts(item)?)
    }

    /// Take ownership of an item. Consumables stack by name.
    pub fn receive(&mut self, item: Item) -> MechResult<()> {
        Ok(self.inventory.insert(item)?)
    }

    /// Give up ownership of an unequipped item.
    pub fn give_up(&mut self, name: &str) -> MechResult<Item> {
        Ok(self.inventory.remove(name)?)
    }

    /// Delete an unequipped item outright.
    pub fn delete_item(&mut self, name: &str) -> MechResult<()> {
        self.give_up(name)?;
        tracing::debug!(character = %self.name, item = name, "deleted item");
        Ok(())
    }

    /// Use one unit of a consumable. Returns the units left.
    pub fn use_consumable(&mut self, name: &str) -> MechResult<u32> {
        let left = self.inventory.consume(name)?;
        tracing::debug!(character = %self.name, item = name, left, "used consumable");
        Ok(left)
    }

    /// Add units to a consumable stack. Returns the new amount.
    pub fn restock(&mut self, name: &str, quantity: u32) -> MechResult<u32> {
        Ok(self.inventory.restock(name, quantity)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash_core::{Consumable, CoreError, Ring};

    use crate::error::MechError;

    fn knight() -> Character {
        Character::new(
            "Solaire",
            Attributes::new(12, 11, 13, 12, 8, 16),
            1,
            &Rules::default(),
        )
    }

    #[test]
    fn new_character_starts_full() {
        let c = knight();
        assert!((c.hp().max - 24.0).abs() < f64::EPSILON);
        assert!(c.hp().is_full());
        assert!((c.mana().max - 275.0).abs() < f64::EPSILON);
        assert!(c.mana().is_full());
        assert_eq!(c.spell_slots().total, 2);
        assert_eq!(c.spell_slots().remaining(), 2);
        assert_eq!(c.soul_cost(), 500);
        assert_eq!(c.souls(), 0);
        assert_eq!(c.armor_class(), 0);
    }

    #[test]
    fn level_floor_is_one() {
        let c = Character::new("Nameless", Attributes::default(), 0, &Rules::default());
        assert_eq!(c.level(), 1);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut c = knight();
        let rules = Rules::default();
        c.recompute_caps(&rules);
        let once = c.clone();
        c.recompute_caps(&rules);
        assert_eq!(c, once);
    }

    #[test]
    fn consumables_and_restock() {
        let mut c = knight();
        c.receive(Item::new("Green Blossom", Consumable::new(2)))
            .unwrap();
        assert_eq!(c.restock("Green Blossom", 3).unwrap(), 5);
        assert_eq!(c.use_consumable("Green Blossom").unwrap(), 4);
        assert_eq!(
            c.use_consumable("Moss"),
            Err(MechError::Core(CoreError::NotFound("Moss".to_string())))
        );
    }

    #[test]
    fn delete_and_give_up() {
        let mut c = knight();
        c.receive(Item::new("Ring of Sacrifice", Ring::new(Attributes::default())))
            .unwrap();
        let item = c.give_up("Ring of Sacrifice").unwrap();
        assert!(c.inventory().is_empty());
        c.receive(item).unwrap();
        c.delete_item("Ring of Sacrifice").unwrap();
        assert!(c.inventory().is_empty());
    }
}
