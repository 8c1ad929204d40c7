//! Core types for Ashen Ledger: the item catalog, primary stats, inventories, and mobs.
//!
//! This crate holds plain data and the bookkeeping rules of item ownership.
//! Derived attributes, equipment, and leveling live in `ash-mechanics`.

/// Error types used throughout the crate.
pub mod error;
/// Name-keyed item containers with stacking and consumption.
pub mod inventory;
/// The polymorphic item catalog.
pub mod item;
/// Mobs and their ability stores.
pub mod mob;
/// Primary stats, requirement blocks, and bonus blocks.
pub mod stat;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the inventory container.
pub use inventory::Inventory;
/// Re-export item types.
pub use item::{
    Armor, ArmorSlot, Consumable, EstusFlask, FlaskType, Item, ItemId, ItemKind, Ring, SoulItem,
    Spell, Weapon,
};
/// Re-export the mob type.
pub use mob::Mob;
/// Re-export stat types.
pub use stat::{Attributes, Requirements, Stat};
