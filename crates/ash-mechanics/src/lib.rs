//! Character stat and equipment engine for Ashen Ledger.
//!
//! Derives health, mana, and spell capacity from primary stats, runs the
//! slot-based equip/unequip state machine, the leveling and soul economy,
//! and resource consumption (damage, flasks, bonfire rest, mana).

pub mod combat;
pub mod equipment;
pub mod error;
pub mod leveling;
pub mod rules;
pub mod sheet;

pub use combat::{Combatant, DamageOutcome, FlaskDrink};
pub use equipment::{EquipOutcome, Loadout, Slot, UnequipOutcome};
pub use error::{MechError, MechResult};
pub use leveling::LevelUp;
pub use rules::{Curve, MAX_RINGS, Rules};
pub use sheet::{Character, SpellSlots, Track};
