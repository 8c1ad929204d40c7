use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::stat::{Attributes, Requirements};

/// Unique identifier for every item instance.
///
/// Names key inventories, but two containers may hold items with the same
/// name; the ID is what equipment slots remember.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An item instance: identity, name, flavour text, and kind-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identity.
    pub id: ItemId,
    /// Display name; also the inventory key.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Kind-specific data.
    pub kind: ItemKind,
}

impl Item {
    /// Create an item with an empty description.
    pub fn new(name: impl Into<String>, kind: impl Into<ItemKind>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: String::new(),
            kind: kind.into(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if the item is currently equipped by its owner.
    pub fn is_equipped(&self) -> bool {
        match &self.kind {
            ItemKind::Weapon(w) => w.equipped,
            ItemKind::Spell(s) => s.weapon.equipped,
            ItemKind::Ring(r) => r.equipped,
            ItemKind::Armor(a) => a.equipped,
            ItemKind::Flask(_) | ItemKind::Soul(_) | ItemKind::Consumable(_) => false,
        }
    }

    /// Set the equipped flag. Returns false for kinds that cannot be equipped.
    pub fn set_equipped(&mut self, equipped: bool) -> bool {
        let flag = match &mut self.kind {
            ItemKind::Weapon(w) => &mut w.equipped,
            ItemKind::Spell(s) => &mut s.weapon.equipped,
            ItemKind::Ring(r) => &mut r.equipped,
            ItemKind::Armor(a) => &mut a.equipped,
            ItemKind::Flask(_) | ItemKind::Soul(_) | ItemKind::Consumable(_) => return false,
        };
        *flag = equipped;
        true
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.kind)?;
        if self.is_equipped() {
            write!(f, " (equipped)")?;
        }
        Ok(())
    }
}

/// The kind of an item, carrying its kind-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// A melee or ranged weapon.
    Weapon(Weapon),
    /// A castable spell; equipping costs spell slots.
    Spell(Spell),
    /// A ring granting stat bonuses while worn.
    Ring(Ring),
    /// A piece of armor for one of the five armor slots.
    Armor(Armor),
    /// A rechargeable Estus flask.
    Flask(EstusFlask),
    /// A soul item, converted to currency on use.
    Soul(SoulItem),
    /// A stack of consumables.
    Consumable(Consumable),
}

impl ItemKind {
    /// Lowercase kind name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weapon(_) => "weapon",
            Self::Spell(_) => "spell",
            Self::Ring(_) => "ring",
            Self::Armor(_) => "armor",
            Self::Flask(_) => "flask",
            Self::Soul(_) => "soul",
            Self::Consumable(_) => "consumable",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon(w) => write!(f, "weapon {}, {}", w.dice(), w.requirements),
            Self::Spell(s) => write!(
                f,
                "spell {}, {} mana, {} slot(s), {}",
                s.weapon.dice(),
                s.mana_cost,
                s.slot_cost,
                s.weapon.requirements
            ),
            Self::Ring(r) => write!(f, "ring, {}", r.bonuses),
            Self::Armor(a) => write!(
                f,
                "{} armor, +{} AC, {}",
                a.slot, a.armor_class, a.requirements
            ),
            Self::Flask(fl) => write!(
                f,
                "{} flask, restores {:.1}, {}/{} charges",
                fl.flask_type,
                fl.restore_amount(),
                fl.charges,
                fl.max_charges
            ),
            Self::Soul(s) => write!(f, "soul worth {}", s.value),
            Self::Consumable(c) => write!(f, "consumable x{}", c.amount),
        }
    }
}

macro_rules! impl_into_kind {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ItemKind {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_into_kind! {
    Weapon => Weapon,
    Spell => Spell,
    Ring => Ring,
    Armor => Armor,
    EstusFlask => Flask,
    SoulItem => Soul,
    Consumable => Consumable,
}

/// A weapon: damage dice (recorded, never rolled) and stat requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Number of damage dice.
    pub dice_count: u32,
    /// Faces per damage die.
    pub dice_faces: u32,
    /// Stats needed to wield it.
    pub requirements: Requirements,
    /// Whether the weapon is in its owner's weapon slot.
    pub equipped: bool,
}

impl Weapon {
    /// Create an unequipped weapon.
    pub fn new(dice_count: u32, dice_faces: u32, requirements: Requirements) -> Self {
        Self {
            dice_count,
            dice_faces,
            requirements,
            equipped: false,
        }
    }

    /// Dice notation, e.g. `2d6`.
    pub fn dice(&self) -> String {
        format!("{}d{}", self.dice_count, self.dice_faces)
    }
}

/// A spell: a weapon profile plus casting and attunement costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Damage dice and requirements; its `equipped` flag tracks attunement.
    pub weapon: Weapon,
    /// Mana spent per cast.
    pub mana_cost: u32,
    /// Spell slots consumed while equipped.
    pub slot_cost: u32,
}

impl Spell {
    /// Create an unequipped spell.
    pub fn new(weapon: Weapon, mana_cost: u32, slot_cost: u32) -> Self {
        Self {
            weapon,
            mana_cost,
            slot_cost,
        }
    }

    /// Whether the spell currently occupies spell slots.
    pub fn is_equipped(&self) -> bool {
        self.weapon.equipped
    }
}

/// A ring. Rings have bonuses, never requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring {
    /// Stat bonuses applied while worn.
    pub bonuses: Attributes,
    /// Whether the ring is worn.
    pub equipped: bool,
}

impl Ring {
    /// Create an unequipped ring.
    pub fn new(bonuses: Attributes) -> Self {
        Self {
            bonuses,
            equipped: false,
        }
    }
}

/// The five armor slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSlot {
    /// Slot 0.
    Helmet,
    /// Slot 1.
    Arms,
    /// Slot 2.
    Chest,
    /// Slot 3.
    Legs,
    /// Slot 4.
    Boots,
}

impl ArmorSlot {
    /// All slots in index order.
    pub const ALL: [ArmorSlot; 5] = [
        ArmorSlot::Helmet,
        ArmorSlot::Arms,
        ArmorSlot::Chest,
        ArmorSlot::Legs,
        ArmorSlot::Boots,
    ];

    /// Slot index (0-4).
    pub fn index(self) -> usize {
        match self {
            Self::Helmet => 0,
            Self::Arms => 1,
            Self::Chest => 2,
            Self::Legs => 3,
            Self::Boots => 4,
        }
    }

    /// Look up a slot by index.
    pub fn from_index(index: usize) -> Result<Self, CoreError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| CoreError::InvalidAmount(format!("armor slot {index} (expected 0-4)")))
    }
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Helmet => write!(f, "helmet"),
            Self::Arms => write!(f, "arms"),
            Self::Chest => write!(f, "chest"),
            Self::Legs => write!(f, "legs"),
            Self::Boots => write!(f, "boots"),
        }
    }
}

impl FromStr for ArmorSlot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(index) = lower.parse::<usize>() {
            return Self::from_index(index);
        }
        match lower.as_str() {
            "helmet" | "head" => Ok(Self::Helmet),
            "arms" | "arm" => Ok(Self::Arms),
            "chest" => Ok(Self::Chest),
            "legs" | "leg" => Ok(Self::Legs),
            "boots" | "boot" => Ok(Self::Boots),
            other => Err(CoreError::InvalidAmount(format!("unknown armor slot '{other}'"))),
        }
    }
}

/// A piece of armor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    /// Stats needed to wear it.
    pub requirements: Requirements,
    /// Armor class added while worn.
    pub armor_class: u32,
    /// The slot it occupies.
    pub slot: ArmorSlot,
    /// Whether the armor is worn.
    pub equipped: bool,
}

impl Armor {
    /// Create an unequipped piece of armor.
    pub fn new(slot: ArmorSlot, armor_class: u32, requirements: Requirements) -> Self {
        Self {
            requirements,
            armor_class,
            slot,
            equipped: false,
        }
    }
}

/// Which resource a flask restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlaskType {
    /// Restores HP.
    Health,
    /// Restores mana.
    Mana,
}

impl fmt::Display for FlaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Health => write!(f, "health"),
            Self::Mana => write!(f, "mana"),
        }
    }
}

impl FromStr for FlaskType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "health" | "hp" | "0" => Ok(Self::Health),
            "mana" | "mp" | "1" => Ok(Self::Mana),
            other => Err(CoreError::InvalidAmount(format!("unknown flask type '{other}'"))),
        }
    }
}

/// A rechargeable Estus flask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstusFlask {
    /// HP restored per draught (already scaled by the upgrade modifier).
    pub hp_restore: f64,
    /// Mana restored per draught (already scaled by the upgrade modifier).
    pub mana_restore: f64,
    /// Remaining charges.
    pub charges: u32,
    /// Charges after a bonfire rest.
    pub max_charges: u32,
    /// Which resource the flask restores.
    pub flask_type: FlaskType,
}

impl EstusFlask {
    /// Create a flask. Restore amounts are scaled once by `1 + 0.1 * modifier`;
    /// starting charges are capped at `max_charges`.
    pub fn new(
        hp: u32,
        mana: u32,
        charges: u32,
        max_charges: u32,
        modifier: u32,
        flask_type: FlaskType,
    ) -> Self {
        let scale = 1.0 + 0.1 * f64::from(modifier);
        Self {
            hp_restore: f64::from(hp) * scale,
            mana_restore: f64::from(mana) * scale,
            charges: charges.min(max_charges),
            max_charges,
            flask_type,
        }
    }

    /// The amount one draught restores for this flask's type.
    pub fn restore_amount(&self) -> f64 {
        match self.flask_type {
            FlaskType::Health => self.hp_restore,
            FlaskType::Mana => self.mana_restore,
        }
    }

    /// Spend one charge. Returns the restore amount, or zero when empty.
    pub fn drink(&mut self) -> f64 {
        if self.charges == 0 {
            return 0.0;
        }
        self.charges -= 1;
        self.restore_amount()
    }

    /// Refill every charge.
    pub fn refill(&mut self) {
        self.charges = self.max_charges;
    }

    /// Add one maximum charge and refill.
    pub fn upgrade(&mut self) {
        self.max_charges = self.max_charges.saturating_add(1);
        self.refill();
    }
}

/// A soul item worth a fixed amount of currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoulItem {
    /// Souls granted when consumed.
    pub value: u64,
}

impl SoulItem {
    /// Create a soul item.
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

/// A stack of identical consumables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    /// Units in the stack.
    pub amount: u32,
}

impl Consumable {
    /// Create a stack.
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }
}
