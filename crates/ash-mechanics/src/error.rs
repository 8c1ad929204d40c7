//! Error types for the mechanics engine.

use ash_core::{CoreError, Stat};

use crate::equipment::Slot;

/// Errors that can occur during mechanics operations.
///
/// Every variant is recoverable: the failing operation leaves the
/// character untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MechError {
    /// A stat is below what the item requires.
    #[error("cannot equip \"{item}\": {stat} is {have}, needs {need}")]
    RequirementNotMet {
        /// The item being equipped.
        item: String,
        /// The first stat that fell short.
        stat: Stat,
        /// The character's current value.
        have: u32,
        /// The required value.
        need: u32,
    },

    /// The target slot already holds an item.
    #[error("{0} slot is already occupied; unequip it first")]
    SlotOccupied(Slot),

    /// The slot has nothing to unequip.
    #[error("{0} slot is empty")]
    SlotEmpty(Slot),

    /// The ring limit is reached.
    #[error("already wearing {0} rings; remove one first")]
    RingLimitReached(usize),

    /// No ring is worn.
    #[error("no rings are equipped")]
    NoRingsEquipped,

    /// A spell costs more slots than remain.
    #[error("not enough spell slots: needs {need}, {remaining} remaining")]
    InsufficientSpellSlots {
        /// Slots the spell costs.
        need: u32,
        /// Slots currently free.
        remaining: u32,
    },

    /// The named item is not currently equipped.
    #[error("\"{0}\" is not equipped")]
    NotEquipped(String),

    /// The named item is already equipped.
    #[error("\"{0}\" is already equipped")]
    AlreadyEquipped(String),

    /// The item kind has no slot.
    #[error("\"{0}\" cannot be equipped")]
    NotEquippable(String),

    /// Not enough souls to level up.
    #[error("not enough souls: have {have}, need {need}")]
    InsufficientSouls {
        /// Souls held.
        have: u64,
        /// Cost of the next level.
        need: u64,
    },

    /// An inventory or catalog error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
