//! Equipment slots and the equip/unequip state machine.
//!
//! Slots remember item identities; the items themselves stay in the
//! character's inventory with their `equipped` flag set, which is what keeps
//! an equipped item from being dropped or deleted.

use std::fmt;

use ash_core::{Armor, ArmorSlot, ItemId, ItemKind, Requirements, Ring, Spell, Weapon};
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::rules::Rules;
use crate::sheet::Character;

/// A place an item can be equipped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// One of the five armor slots.
    Armor(ArmorSlot),
    /// The single weapon slot.
    Weapon,
    /// The ring set.
    Ring,
    /// The spell-slot budget.
    Spell,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Armor(slot) => write!(f, "{slot}"),
            Self::Weapon => write!(f, "weapon"),
            Self::Ring => write!(f, "ring"),
            Self::Spell => write!(f, "spell"),
        }
    }
}

/// The identities of everything a character has equipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    armor: [Option<ItemId>; 5],
    weapon: Option<ItemId>,
    rings: Vec<ItemId>,
}

impl Loadout {
    /// The item in an armor slot.
    pub fn armor(&self, slot: ArmorSlot) -> Option<ItemId> {
        self.armor[slot.index()]
    }

    /// The equipped weapon.
    pub fn weapon(&self) -> Option<ItemId> {
        self.weapon
    }

    /// Worn rings, in the order they were put on.
    pub fn rings(&self) -> &[ItemId] {
        &self.rings
    }
}

/// What a successful equip changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquipOutcome {
    /// Armor went into a slot.
    Armor {
        /// The filled slot.
        slot: ArmorSlot,
        /// Armor class afterwards.
        armor_class: u32,
    },
    /// The weapon slot was filled.
    Weapon,
    /// A ring was put on.
    Ring {
        /// Rings worn afterwards.
        worn: usize,
    },
    /// A spell was attuned.
    Spell {
        /// Spell slots left afterwards.
        remaining: u32,
    },
}

/// What a successful unequip changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnequipOutcome {
    /// Armor left a slot.
    Armor {
        /// The emptied slot.
        slot: ArmorSlot,
        /// Armor class afterwards.
        armor_class: u32,
    },
    /// The weapon slot was emptied.
    Weapon,
    /// A ring was taken off.
    Ring {
        /// Rings worn afterwards.
        worn: usize,
    },
    /// A spell was released.
    Spell {
        /// Spell slots left afterwards.
        remaining: u32,
    },
}

impl Character {
    /// Equip the named inventory item, dispatching on its kind.
    ///
    /// Fails without changing anything if a requirement is unmet, the slot
    /// is taken, or the budget (rings, spell slots) is exhausted.
    pub fn equip(&mut self, name: &str, rules: &Rules) -> MechResult<EquipOutcome> {
        let item = self.inventory.get(name)?;
        let (id, kind) = (item.id, item.kind.clone());
        let outcome = match kind {
            ItemKind::Armor(armor) => self.equip_armor(name, id, armor)?,
            ItemKind::Weapon(weapon) => self.equip_weapon(name, id, weapon)?,
            ItemKind::Ring(ring) => self.equip_ring(name, id, ring, rules)?,
            ItemKind::Spell(spell) => self.equip_spell(name, spell)?,
            ItemKind::Flask(_) | ItemKind::Soul(_) | ItemKind::Consumable(_) => {
                return Err(MechError::NotEquippable(name.to_string()));
            }
        };
        self.inventory.get_mut(name)?.set_equipped(true);
        tracing::debug!(character = %self.name, item = name, ?outcome, "equipped");
        Ok(outcome)
    }

    /// Unequip the named inventory item, dispatching on its kind.
    pub fn unequip(&mut self, name: &str, rules: &Rules) -> MechResult<UnequipOutcome> {
        let item = self.inventory.get(name)?;
        let (id, kind) = (item.id, item.kind.clone());
        let outcome = match kind {
            ItemKind::Armor(armor) => self.unequip_armor(name, id, armor)?,
            ItemKind::Weapon(_) => self.unequip_weapon(name, id)?,
            ItemKind::Ring(ring) => self.unequip_ring(name, id, ring, rules)?,
            ItemKind::Spell(spell) => self.unequip_spell(name, spell)?,
            ItemKind::Flask(_) | ItemKind::Soul(_) | ItemKind::Consumable(_) => {
                return Err(MechError::NotEquippable(name.to_string()));
            }
        };
        self.inventory.get_mut(name)?.set_equipped(false);
        tracing::debug!(character = %self.name, item = name, ?outcome, "unequipped");
        Ok(outcome)
    }

    fn check_requirements(&self, name: &str, requirements: &Requirements) -> MechResult<()> {
        match requirements.first_unmet(&self.attributes) {
            Some((stat, need)) => Err(MechError::RequirementNotMet {
                item: name.to_string(),
                stat,
                have: self.attributes.get(stat),
                need,
            }),
            None => Ok(()),
        }
    }

    fn equip_armor(&mut self, name: &str, id: ItemId, armor: Armor) -> MechResult<EquipOutcome> {
        self.check_requirements(name, &armor.requirements)?;
        let cell = &mut self.loadout.armor[armor.slot.index()];
        if cell.is_some() {
            return Err(MechError::SlotOccupied(Slot::Armor(armor.slot)));
        }
        *cell = Some(id);
        self.armor_class = self.armor_class.saturating_add(armor.armor_class);
        Ok(EquipOutcome::Armor {
            slot: armor.slot,
            armor_class: self.armor_class,
        })
    }

    fn unequip_armor(
        &mut self,
        name: &str,
        id: ItemId,
        armor: Armor,
    ) -> MechResult<UnequipOutcome> {
        let cell = &mut self.loadout.armor[armor.slot.index()];
        match *cell {
            None => return Err(MechError::SlotEmpty(Slot::Armor(armor.slot))),
            Some(held) if held != id => return Err(MechError::NotEquipped(name.to_string())),
            Some(_) => *cell = None,
        }
        self.armor_class = self.armor_class.saturating_sub(armor.armor_class);
        Ok(UnequipOutcome::Armor {
            slot: armor.slot,
            armor_class: self.armor_class,
        })
    }

    fn equip_weapon(&mut self, name: &str, id: ItemId, weapon: Weapon) -> MechResult<EquipOutcome> {
        self.check_requirements(name, &weapon.requirements)?;
        if self.loadout.weapon.is_some() {
            return Err(MechError::SlotOccupied(Slot::Weapon));
        }
        self.loadout.weapon = Some(id);
        Ok(EquipOutcome::Weapon)
    }

    fn unequip_weapon(&mut self, name: &str, id: ItemId) -> MechResult<UnequipOutcome> {
        match self.loadout.weapon {
            None => Err(MechError::SlotEmpty(Slot::Weapon)),
            Some(held) if held != id => Err(MechError::NotEquipped(name.to_string())),
            Some(_) => {
                self.loadout.weapon = None;
                Ok(UnequipOutcome::Weapon)
            }
        }
    }

    fn equip_ring(
        &mut self,
        name: &str,
        id: ItemId,
        ring: Ring,
        rules: &Rules,
    ) -> MechResult<EquipOutcome> {
        if self.loadout.rings.len() >= rules.ring_limit {
            return Err(MechError::RingLimitReached(rules.ring_limit));
        }
        if self.loadout.rings.contains(&id) {
            return Err(MechError::AlreadyEquipped(name.to_string()));
        }
        self.attributes.add(&ring.bonuses);
        self.recompute_caps(rules);
        self.loadout.rings.push(id);
        Ok(EquipOutcome::Ring {
            worn: self.loadout.rings.len(),
        })
    }

    fn unequip_ring(
        &mut self,
        name: &str,
        id: ItemId,
        ring: Ring,
        rules: &Rules,
    ) -> MechResult<UnequipOutcome> {
        if self.loadout.rings.is_empty() {
            return Err(MechError::NoRingsEquipped);
        }
        let Some(pos) = self.loadout.rings.iter().position(|&worn| worn == id) else {
            return Err(MechError::NotEquipped(name.to_string()));
        };
        self.attributes.subtract_floored(&ring.bonuses);
        self.recompute_caps(rules);
        self.loadout.rings.remove(pos);
        Ok(UnequipOutcome::Ring {
            worn: self.loadout.rings.len(),
        })
    }

    fn equip_spell(&mut self, name: &str, spell: Spell) -> MechResult<EquipOutcome> {
        if spell.is_equipped() {
            return Err(MechError::AlreadyEquipped(name.to_string()));
        }
        let remaining = self.spell_slots.remaining();
        if spell.slot_cost > remaining {
            return Err(MechError::InsufficientSpellSlots {
                need: spell.slot_cost,
                remaining,
            });
        }
        self.spell_slots.used += spell.slot_cost;
        Ok(EquipOutcome::Spell {
            remaining: self.spell_slots.remaining(),
        })
    }

    fn unequip_spell(&mut self, name: &str, spell: Spell) -> MechResult<UnequipOutcome> {
        if !spell.is_equipped() {
            return Err(MechError::NotEquipped(name.to_string()));
        }
        self.spell_slots.used = self.spell_slots.used.saturating_sub(spell.slot_cost);
        Ok(UnequipOutcome::Spell {
            remaining: self.spell_slots.remaining(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash_core::{Attributes, Consumable, CoreError, Item, Stat};
    use proptest::prelude::*;

    fn character(strength: u32, attunement: u32) -> Character {
        Character::new(
            "Oscar",
            Attributes::new(20, attunement, strength, 12, 10, 10),
            1,
            &Rules::default(),
        )
    }

    fn helm(name: &str, ac: u32, strength: u32) -> Item {
        Item::new(
            name,
            Armor::new(
                ArmorSlot::Helmet,
                ac,
                Requirements::new(strength, 0, 0, 0),
            ),
        )
    }

    fn ring(name: &str, bonuses: Attributes) -> Item {
        Item::new(name, Ring::new(bonuses))
    }

    fn spell(name: &str, slot_cost: u32) -> Item {
        let profile = Weapon::new(1, 6, Requirements::default());
        Item::new(name, Spell::new(profile, 20, slot_cost))
    }

    #[test]
    fn armor_equip_and_unequip() {
        let rules = Rules::default();
        let mut c = character(14, 10);
        c.receive(helm("Elite Knight Helm", 4, 12)).unwrap();

        let out = c.equip("Elite Knight Helm", &rules).unwrap();
        assert_eq!(
            out,
            EquipOutcome::Armor {
                slot: ArmorSlot::Helmet,
                armor_class: 4
            }
        );
        assert!(c.inventory().get("Elite Knight Helm").unwrap().is_equipped());
        assert!(c.loadout().armor(ArmorSlot::Helmet).is_some());

        let out = c.unequip("Elite Knight Helm", &rules).unwrap();
        assert_eq!(
            out,
            UnequipOutcome::Armor {
                slot: ArmorSlot::Helmet,
                armor_class: 0
            }
        );
        assert!(!c.inventory().get("Elite Knight Helm").unwrap().is_equipped());
        assert_eq!(c.loadout().armor(ArmorSlot::Helmet), None);
    }

    #[test]
    fn requirement_reports_first_failing_stat() {
        let rules = Rules::default();
        let mut c = character(8, 10);
        c.receive(helm("Giant Helm", 6, 18)).unwrap();
        let err = c.equip("Giant Helm", &rules).unwrap_err();
        assert_eq!(
            err,
            MechError::RequirementNotMet {
                item: "Giant Helm".to_string(),
                stat: Stat::Strength,
                have: 8,
                need: 18,
            }
        );
        assert_eq!(c.armor_class(), 0);
        assert!(!c.inventory().get("Giant Helm").unwrap().is_equipped());
    }

    #[test]
    fn occupied_slot_keeps_occupant() {
        let rules = Rules::default();
        let mut c = character(14, 10);
        c.receive(helm("Knight Helm", 3, 0)).unwrap();
        c.receive(helm("Xanthous Crown", 1, 0)).unwrap();
        c.equip("Knight Helm", &rules).unwrap();
        let first = c.loadout().armor(ArmorSlot::Helmet);

        let err = c.equip("Xanthous Crown", &rules).unwrap_err();
        assert_eq!(err, MechError::SlotOccupied(Slot::Armor(ArmorSlot::Helmet)));
        assert_eq!(c.loadout().armor(ArmorSlot::Helmet), first);
        assert_eq!(c.armor_class(), 3);
        assert!(!c.inventory().get("Xanthous Crown").unwrap().is_equipped());
    }

    #[test]
    fn unequip_reports_empty_or_other_occupant() {
        let rules = Rules::default();
        let mut c = character(14, 10);
        c.receive(helm("Knight Helm", 3, 0)).unwrap();
        c.receive(helm("Xanthous Crown", 1, 0)).unwrap();
        assert_eq!(
            c.unequip("Knight Helm", &rules).unwrap_err(),
            MechError::SlotEmpty(Slot::Armor(ArmorSlot::Helmet))
        );
        c.equip("Knight Helm", &rules).unwrap();
        assert_eq!(
            c.unequip("Xanthous Crown", &rules).unwrap_err(),
            MechError::NotEquipped("Xanthous Crown".to_string())
        );
        assert_eq!(c.armor_class(), 3);
    }

    #[test]
    fn weapon_slot() {
        let rules = Rules::default();
        let mut c = character(14, 10);
        c.receive(Item::new(
            "Zweihander",
            Weapon::new(2, 10, Requirements::new(24, 10, 0, 0)),
        ))
        .unwrap();
        c.receive(Item::new(
            "Broadsword",
            Weapon::new(1, 8, Requirements::new(10, 10, 0, 0)),
        ))
        .unwrap();
        c.receive(Item::new(
            "Dagger",
            Weapon::new(1, 4, Requirements::default()),
        ))
        .unwrap();

        assert!(matches!(
            c.equip("Zweihander", &rules),
            Err(MechError::RequirementNotMet {
                stat: Stat::Strength,
                ..
            })
        ));
        assert_eq!(
            c.unequip("Broadsword", &rules).unwrap_err(),
            MechError::SlotEmpty(Slot::Weapon)
        );
        assert_eq!(c.equip("Broadsword", &rules).unwrap(), EquipOutcome::Weapon);
        assert_eq!(
            c.equip("Dagger", &rules).unwrap_err(),
            MechError::SlotOccupied(Slot::Weapon)
        );
        assert_eq!(c.unequip("Broadsword", &rules).unwrap(), UnequipOutcome::Weapon);
        assert_eq!(c.loadout().weapon(), None);
    }

    #[test]
    fn ring_adjusts_stats_and_caps() {
        let rules = Rules::default();
        let mut c = character(10, 10);
        c.receive(ring("Ring of Favor", Attributes::new(5, 5, 2, 0, 0, 0)))
            .unwrap();

        c.equip("Ring of Favor", &rules).unwrap();
        assert_eq!(c.attributes().vigor, 25);
        assert_eq!(c.attributes().strength, 12);
        assert!((c.hp().max - 50.0).abs() < f64::EPSILON);
        assert!((c.mana().max - 375.0).abs() < f64::EPSILON);
        assert_eq!(c.spell_slots().total, 3);
        // Current values are not raised by a bigger cap.
        assert!((c.hp().current - 40.0).abs() < f64::EPSILON);

        c.unequip("Ring of Favor", &rules).unwrap();
        assert_eq!(c.attributes().vigor, 20);
        assert!((c.hp().max - 40.0).abs() < f64::EPSILON);
        assert_eq!(c.loadout().rings().len(), 0);
    }

    #[test]
    fn ring_removal_clamps_current() {
        let rules = Rules::default();
        let mut c = character(10, 10);
        c.receive(ring("Cloranthy Ring", Attributes::new(10, 0, 0, 0, 0, 0)))
            .unwrap();
        c.equip("Cloranthy Ring", &rules).unwrap();
        c.hp.refill();
        assert!((c.hp().current - 60.0).abs() < f64::EPSILON);
        c.unequip("Cloranthy Ring", &rules).unwrap();
        assert!((c.hp().current - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fifth_ring_is_refused() {
        let rules = Rules::default();
        let mut c = character(10, 10);
        for i in 0..5 {
            c.receive(ring(&format!("Ring {i}"), Attributes::new(1, 0, 0, 0, 0, 0)))
                .unwrap();
        }
        for i in 0..4 {
            c.equip(&format!("Ring {i}"), &rules).unwrap();
        }
        let before = *c.attributes();
        assert_eq!(
            c.equip("Ring 4", &rules).unwrap_err(),
            MechError::RingLimitReached(4)
        );
        assert_eq!(*c.attributes(), before);
        assert_eq!(c.loadout().rings().len(), 4);
        assert!(!c.inventory().get("Ring 4").unwrap().is_equipped());
    }

    #[test]
    fn ring_errors() {
        let rules = Rules::default();
        let mut c = character(10, 10);
        c.receive(ring("Dusk Crown", Attributes::default())).unwrap();
        c.receive(ring("Dark Wood Grain", Attributes::default()))
            .unwrap();
        assert_eq!(
            c.unequip("Dusk Crown", &rules).unwrap_err(),
            MechError::NoRingsEquipped
        );
        c.equip("Dusk Crown", &rules).unwrap();
        assert_eq!(
            c.equip("Dusk Crown", &rules).unwrap_err(),
            MechError::AlreadyEquipped("Dusk Crown".to_string())
        );
        assert_eq!(
            c.unequip("Dark Wood Grain", &rules).unwrap_err(),
            MechError::NotEquipped("Dark Wood Grain".to_string())
        );
    }

    #[test]
    fn spell_slot_budget() {
        let rules = Rules::default();
        let mut c = character(10, 10);
        c.receive(spell("Soul Arrow", 1)).unwrap();
        c.receive(spell("Crystal Soul Spear", 2)).unwrap();

        assert_eq!(
            c.equip("Soul Arrow", &rules).unwrap(),
            EquipOutcome::Spell { remaining: 1 }
        );
        assert_eq!(
            c.equip("Crystal Soul Spear", &rules).unwrap_err(),
            MechError::InsufficientSpellSlots {
                need: 2,
                remaining: 1
            }
        );
        assert_eq!(
            c.equip("Soul Arrow", &rules).unwrap_err(),
            MechError::AlreadyEquipped("Soul Arrow".to_string())
        );
        assert_eq!(
            c.unequip("Crystal Soul Spear", &rules).unwrap_err(),
            MechError::NotEquipped("Crystal Soul Spear".to_string())
        );
        assert_eq!(
            c.unequip("Soul Arrow", &rules).unwrap(),
            UnequipOutcome::Spell { remaining: 2 }
        );
    }

    #[test]
    fn non_equippable_and_missing() {
        let rules = Rules::default();
        let mut c = character(10, 10);
        c.receive(Item::new("Firebomb", Consumable::new(3))).unwrap();
        assert_eq!(
            c.equip("Firebomb", &rules).unwrap_err(),
            MechError::NotEquippable("Firebomb".to_string())
        );
        assert_eq!(
            c.unequip("Moonlight Greatsword", &rules).unwrap_err(),
            MechError::Core(CoreError::NotFound("Moonlight Greatsword".to_string()))
        );
    }

    #[test]
    fn equipped_items_cannot_be_dropped() {
        let rules = Rules::default();
        let mut c = character(14, 10);
        c.receive(helm("Knight Helm", 3, 0)).unwrap();
        c.equip("Knight Helm", &rules).unwrap();
        assert_eq!(
            c.delete_item("Knight Helm").unwrap_err(),
            MechError::Core(CoreError::StillEquipped("Knight Helm".to_string()))
        );
    }

    #[test]
    fn loadout_survives_serde() {
        let rules = Rules::default();
        let mut c = character(14, 10);
        c.receive(helm("Knight Helm", 3, 0)).unwrap();
        c.receive(ring("Dusk Crown", Attributes::new(0, 2, 0, 0, 0, 0)))
            .unwrap();
        c.equip("Knight Helm", &rules).unwrap();
        c.equip("Dusk Crown", &rules).unwrap();

        let json = serde_json::to_string(&c).unwrap();
        let mut back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        back.unequip("Dusk Crown", &rules).unwrap();
        assert_eq!(back.attributes().attunement, 10);
        assert_eq!(
            back.unequip("Knight Helm", &rules).unwrap(),
            UnequipOutcome::Armor {
                slot: ArmorSlot::Helmet,
                armor_class: 0
            }
        );
    }

    proptest! {
        #[test]
        fn ring_round_trip_restores_stats(
            base in prop::array::uniform6(0u32..60),
            bonus in prop::array::uniform6(0u32..15),
        ) {
            let rules = Rules::default();
            let [vig, att, str_, dex, int, fth] = base;
            let [bv, ba, bs, bd, bi, bf] = bonus;
            let mut c = Character::new(
                "Prop",
                Attributes::new(vig, att, str_, dex, int, fth),
                1,
                &rules,
            );
            c.receive(ring("Test Ring", Attributes::new(bv, ba, bs, bd, bi, bf)))
                .unwrap();
            let stats = *c.attributes();
            let (hp_max, mana_max) = (c.hp().max, c.mana().max);
            let slots = c.spell_slots().total;

            c.equip("Test Ring", &rules).unwrap();
            c.unequip("Test Ring", &rules).unwrap();

            prop_assert_eq!(*c.attributes(), stats);
            prop_assert!((c.hp().max - hp_max).abs() < f64::EPSILON);
            prop_assert!((c.mana().max - mana_max).abs() < f64::EPSILON);
            prop_assert_eq!(c.spell_slots().total, slots);
        }
    }
}
