//! Leveling and the soul economy.

use ash_core::Stat;

use crate::error::{MechError, MechResult};
use crate::rules::Rules;
use crate::sheet::Character;

/// The result of spending souls on a stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// The stat that was raised.
    pub stat: Stat,
    /// Its value afterwards.
    pub value: u32,
    /// Character level afterwards.
    pub level: u32,
    /// Souls paid.
    pub spent: u64,
    /// Cost of the following level.
    pub next_cost: u64,
}

impl Character {
    /// Spend the current soul cost to raise `stat` by one and gain a level.
    ///
    /// Caps are recomputed; current HP and mana stay where they were.
    pub fn level_stat(&mut self, stat: Stat, rules: &Rules) -> MechResult<LevelUp> {
        let cost = self.soul_cost;
        if self.souls < cost {
            return Err(MechError::InsufficientSouls {
                have: self.souls,
                need: cost,
            });
        }

        let value = self.attributes.get_mut(stat);
        *value = value.saturating_add(1);
        let value = *value;
        self.recompute_caps(rules);

        self.level = self.level.saturating_add(1);
        self.souls = self.souls.saturating_sub(cost);
        self.soul_cost = rules.next_soul_cost(cost);

        tracing::debug!(
            character = %self.name,
            %stat,
            value,
            level = self.level,
            spent = cost,
            "leveled up"
        );
        Ok(LevelUp {
            stat,
            value,
            level: self.level,
            spent: cost,
            next_cost: self.soul_cost,
        })
    }

    /// Award souls. Returns the new total.
    pub fn add_souls(&mut self, amount: u64) -> u64 {
        self.souls = self.souls.saturating_add(amount);
        self.souls
    }

    /// Spend or lose souls, flooring at zero. Returns the new total.
    pub fn remove_souls(&mut self, amount: u64) -> u64 {
        self.souls = self.souls.saturating_sub(amount);
        self.souls
    }

    /// Destroy a soul item and add its value to the currency. Returns the value gained.
    pub fn consume_soul_item(&mut self, name: &str) -> MechResult<u64> {
        let value = self.inventory.take_soul(name)?;
        self.add_souls(value);
        tracing::debug!(character = %self.name, item = name, value, "consumed soul item");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash_core::{Attributes, CoreError, Item, Requirements, SoulItem, Weapon};

    fn pyromancer() -> Character {
        Character::new(
            "Laurentius",
            Attributes::new(10, 12, 12, 9, 10, 8),
            1,
            &Rules::default(),
        )
    }

    #[test]
    fn insufficient_souls_mutates_nothing() {
        let rules = Rules::default();
        let mut c = pyromancer();
        c.add_souls(499);
        let before = c.clone();
        assert_eq!(
            c.level_stat(Stat::Vigor, &rules).unwrap_err(),
            MechError::InsufficientSouls {
                have: 499,
                need: 500
            }
        );
        assert_eq!(c, before);
    }

    #[test]
    fn vigor_level_raises_cap_not_current() {
        let rules = Rules::default();
        let mut c = pyromancer();
        c.hp.drain(5.0);
        c.add_souls(1200);

        let up = c.level_stat(Stat::Vigor, &rules).unwrap();
        assert_eq!(
            up,
            LevelUp {
                stat: Stat::Vigor,
                value: 11,
                level: 2,
                spent: 500,
                next_cost: 550,
            }
        );
        assert_eq!(c.souls(), 700);
        assert_eq!(c.soul_cost(), 550);
        assert!((c.hp().max - 22.0).abs() < f64::EPSILON);
        assert!((c.hp().current - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn attunement_level_adds_slot_and_mana_cap() {
        let rules = Rules::default();
        let mut c = Character::new("Griggs", Attributes::new(10, 14, 8, 8, 16, 8), 1, &rules);
        c.add_souls(500);
        c.level_stat(Stat::Attunement, &rules).unwrap();
        assert_eq!(c.spell_slots().total, 3);
        assert!((c.mana().max - 375.0).abs() < f64::EPSILON);
        assert!((c.mana().current - 350.0).abs() < f64::EPSILON);
        assert_eq!(c.souls(), 0);
    }

    #[test]
    fn cost_compounds() {
        let rules = Rules::default();
        let mut c = pyromancer();
        c.add_souls(10_000);
        for stat in [Stat::Strength, Stat::Dexterity, Stat::Faith] {
            c.level_stat(stat, &rules).unwrap();
        }
        assert_eq!(c.level(), 4);
        assert_eq!(c.soul_cost(), 665);
        assert_eq!(c.souls(), 10_000 - 500 - 550 - 605);
    }

    #[test]
    fn remove_souls_floors_at_zero() {
        let mut c = pyromancer();
        c.add_souls(100);
        assert_eq!(c.remove_souls(30), 70);
        assert_eq!(c.remove_souls(500), 0);
    }

    #[test]
    fn consume_soul_item() {
        let mut c = pyromancer();
        c.receive(Item::new("Soul of a Lost Undead", SoulItem::new(200)))
            .unwrap();
        c.receive(Item::new("Club", Weapon::new(1, 6, Requirements::default())))
            .unwrap();
        assert_eq!(c.consume_soul_item("Soul of a Lost Undead").unwrap(), 200);
        assert_eq!(c.souls(), 200);
        assert!(!c.inventory().contains("Soul of a Lost Undead"));
        assert!(matches!(
            c.consume_soul_item("Club"),
            Err(MechError::Core(CoreError::WrongKind { .. }))
        ));
    }
}
