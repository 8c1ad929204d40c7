//! Campaign session state.
//!
//! `Session` is the single owner of every character, mob, and loose item.
//! Items move between the world pool, character inventories, and mob
//! ability stores; a move either completes or leaves both sides untouched.

use std::collections::BTreeMap;

use ash_core::{Attributes, Item, Mob, Stat};
use ash_mechanics::{
    Character, Combatant, DamageOutcome, EquipOutcome, LevelUp, MechResult, Rules, UnequipOutcome,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};

/// Save-file schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

fn strike(target: &mut impl Combatant, amount: u32) -> DamageOutcome {
    let outcome = target.apply_damage(amount);
    tracing::info!("'{}' takes {amount} damage ({outcome:?})", target.label());
    outcome
}

/// Everything tracked in one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub(crate) schema_version: u32,
    pub(crate) config: SessionConfig,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) characters: BTreeMap<String, Character>,
    pub(crate) mobs: BTreeMap<String, Mob>,
    pub(crate) world: Vec<Item>,
}

impl Session {
    /// Start an empty session.
    pub fn new(config: SessionConfig) -> Self {
        let now = Utc::now();
        Self {
            schema_version: SCHEMA_VERSION,
            config,
            created_at: now,
            updated_at: now,
            characters: BTreeMap::new(),
            mobs: BTreeMap::new(),
            world: Vec::new(),
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The rules in force.
    pub fn rules(&self) -> &Rules {
        &self.config.rules
    }

    /// When the session was started.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When state last changed.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // -- Characters --

    /// Register a character.
    pub fn add_character(&mut self, character: Character) -> SessionResult<()> {
        let name = character.name().to_string();
        if self.characters.contains_key(&name) {
            return Err(SessionError::DuplicateCharacter(name));
        }
        tracing::info!("Added character '{name}'");
        self.characters.insert(name, character);
        self.touch();
        Ok(())
    }

    /// Create a character under this session's rules and register it.
    pub fn create_character(
        &mut self,
        name: &str,
        attributes: Attributes,
        level: u32,
    ) -> SessionResult<&Character> {
        let character = Character::new(name, attributes, level, &self.config.rules);
        self.add_character(character)?;
        self.character(name)
    }

    /// Look up a character.
    pub fn character(&self, name: &str) -> SessionResult<&Character> {
        self.characters
            .get(name)
            .ok_or_else(|| SessionError::CharacterNotFound(name.to_string()))
    }

    /// Look up a character mutably.
    pub fn character_mut(&mut self, name: &str) -> SessionResult<&mut Character> {
        self.characters
            .get_mut(name)
            .ok_or_else(|| SessionError::CharacterNotFound(name.to_string()))
    }

    /// All characters in name order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    /// Run a mechanics operation against a character under this session's rules.
    pub fn act<T>(
        &mut self,
        name: &str,
        op: impl FnOnce(&mut Character, &Rules) -> MechResult<T>,
    ) -> SessionResult<T> {
        let character = self
            .characters
            .get_mut(name)
            .ok_or_else(|| SessionError::CharacterNotFound(name.to_string()))?;
        let out = op(character, &self.config.rules)?;
        self.touch();
        Ok(out)
    }

    /// Equip an item from a character's inventory.
    pub fn equip(&mut self, character: &str, item: &str) -> SessionResult<EquipOutcome> {
        self.act(character, |c, rules| c.equip(item, rules))
    }

    /// Unequip an item in a character's inventory.
    pub fn unequip(&mut self, character: &str, item: &str) -> SessionResult<UnequipOutcome> {
        self.act(character, |c, rules| c.unequip(item, rules))
    }

    /// Spend souls to raise a character's stat.
    pub fn level_stat(&mut self, character: &str, stat: Stat) -> SessionResult<LevelUp> {
        self.act(character, |c, rules| c.level_stat(stat, rules))
    }

    /// Damage a character. Dead characters stay in the session.
    pub fn damage_character(&mut self, name: &str, amount: u32) -> SessionResult<DamageOutcome> {
        let outcome = self.act(name, |c, _| Ok(strike(c, amount)))?;
        if outcome.is_death() {
            tracing::info!("Character '{name}' has died");
        }
        Ok(outcome)
    }

    /// Rest every character at a bonfire. Returns how many rested.
    pub fn rest_all(&mut self) -> usize {
        for character in self.characters.values_mut() {
            character.rest_at_bonfire();
        }
        self.touch();
        self.characters.len()
    }

    // -- Mobs --

    /// Register a mob.
    pub fn add_mob(&mut self, mob: Mob) -> SessionResult<()> {
        if self.mobs.contains_key(&mob.name) {
            return Err(SessionError::DuplicateMob(mob.name));
        }
        tracing::info!("Added mob '{}'", mob.name);
        self.mobs.insert(mob.name.clone(), mob);
        self.touch();
        Ok(())
    }

    /// Look up a mob.
    pub fn mob(&self, name: &str) -> SessionResult<&Mob> {
        self.mobs
            .get(name)
            .ok_or_else(|| SessionError::MobNotFound(name.to_string()))
    }

    fn mob_mut(&mut self, name: &str) -> SessionResult<&mut Mob> {
        self.mobs
            .get_mut(name)
            .ok_or_else(|| SessionError::MobNotFound(name.to_string()))
    }

    /// All living mobs in name order.
    pub fn mobs(&self) -> impl Iterator<Item = &Mob> {
        self.mobs.values()
    }

    /// Damage a mob. A mob reduced to zero HP is removed along with its abilities.
    pub fn damage_mob(&mut self, name: &str, amount: u32) -> SessionResult<DamageOutcome> {
        let outcome = strike(self.mob_mut(name)?, amount);
        if outcome.is_death() {
            self.mobs.remove(name);
            tracing::info!("Mob '{name}' was slain");
        }
        self.touch();
        Ok(outcome)
    }

    /// Heal a mob. Returns its new HP.
    pub fn heal_mob(&mut self, name: &str, amount: u32) -> SessionResult<u32> {
        let hp = self.mob_mut(name)?.heal(amount);
        self.touch();
        Ok(hp)
    }

    // -- World pool and transfers --

    /// Items lying in the world, in insertion order.
    pub fn world(&self) -> &[Item] {
        &self.world
    }

    /// Put an item into the world pool. Returns its index.
    pub fn add_world_item(&mut self, item: Item) -> usize {
        self.world.push(item);
        self.touch();
        self.world.len() - 1
    }

    /// Resolve a world item by exact name, falling back to its index.
    pub fn find_world_item(&self, key: &str) -> SessionResult<usize> {
        if let Some(pos) = self.world.iter().position(|item| item.name == key) {
            return Ok(pos);
        }
        match key.parse::<usize>() {
            Ok(index) if index < self.world.len() => Ok(index),
            _ => Err(SessionError::WorldItemNotFound(key.to_string())),
        }
    }

    /// Move a world item into a character's inventory. Returns the item name.
    ///
    /// A consumable merges into a stack of the same name; any other name
    /// clash leaves the item in the world.
    pub fn pickup(&mut self, character: &str, key: &str) -> SessionResult<String> {
        let index = self.find_world_item(key)?;
        let owner = self
            .characters
            .get_mut(character)
            .ok_or_else(|| SessionError::CharacterNotFound(character.to_string()))?;
        owner.can_receive(&self.world[index])?;
        let item = self.world.remove(index);
        let name = item.name.clone();
        owner.receive(item)?;
        tracing::info!("'{character}' picked up '{name}'");
        self.touch();
        Ok(name)
    }

    /// Move an unequipped item from a character back to the world.
    pub fn drop_item(&mut self, character: &str, item: &str) -> SessionResult<()> {
        let dropped = self.character_mut(character)?.give_up(item)?;
        tracing::info!("'{character}' dropped '{item}'");
        self.world.push(dropped);
        self.touch();
        Ok(())
    }

    /// Move a weapon or spell from the world into a mob's ability store.
    pub fn assign_ability(&mut self, mob: &str, key: &str) -> SessionResult<String> {
        let index = self.find_world_item(key)?;
        let target = self
            .mobs
            .get_mut(mob)
            .ok_or_else(|| SessionError::MobNotFound(mob.to_string()))?;
        target.accepts_ability(&self.world[index])?;
        let item = self.world.remove(index);
        let name = item.name.clone();
        target.add_ability(item)?;
        tracing::info!("Mob '{mob}' learned '{name}'");
        self.touch();
        Ok(name)
    }

    /// Move an ability from a mob back to the world.
    pub fn remove_ability(&mut self, mob: &str, ability: &str) -> SessionResult<()> {
        let item = self.mob_mut(mob)?.remove_ability(ability)?;
        self.world.push(item);
        self.touch();
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
