use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::item::{Item, ItemKind};

/// A hostile creature tracked by the session.
///
/// Abilities are weapon (or spell) items kept purely for narration; they
/// never affect the mob's numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mob {
    /// Unique name within the session.
    pub name: String,
    /// Current hit points.
    pub hp: u32,
    /// Armor class.
    pub armor_class: u32,
    abilities: Inventory,
}

impl Mob {
    /// Create a mob at full health with no abilities.
    pub fn new(name: impl Into<String>, hp: u32, armor_class: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            armor_class,
            abilities: Inventory::new(),
        }
    }

    /// Apply damage. Returns true when the mob is dead afterwards.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.is_dead()
    }

    /// Add hit points. Mobs have no maximum. Returns the new total.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_add(amount);
        self.hp
    }

    /// Returns true once hit points reach zero.
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Store an ability. Only weapons and spells qualify.
    pub fn add_ability(&mut self, item: Item) -> CoreResult<()> {
        self.accepts_ability(&item)?;
        self.abilities.insert(item)
    }

    /// Check whether `item` could be stored as an ability.
    pub fn accepts_ability(&self, item: &Item) -> CoreResult<()> {
        match item.kind {
            ItemKind::Weapon(_) | ItemKind::Spell(_) => self.abilities.accepts(item),
            _ => Err(CoreError::WrongKind {
                name: item.name.clone(),
                expected: "weapon or spell",
            }),
        }
    }

    /// Remove an ability by name and hand it back.
    pub fn remove_ability(&mut self, name: &str) -> CoreResult<Item> {
        self.abilities.remove(name)
    }

    /// The ability store.
    pub fn abilities(&self) -> &Inventory {
        &self.abilities
    }
}

impl fmt::Display for Mob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HP {}, AC {})", self.name, self.hp, self.armor_class)
    }
}
