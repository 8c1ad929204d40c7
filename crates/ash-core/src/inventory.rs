use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::{EstusFlask, Item, ItemId, ItemKind};

/// Items owned by one character or mob, keyed by name.
///
/// Consumables with the same name stack; any other name clash is rejected.
/// Equipped items cannot leave the container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<String, Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `item` could be inserted without error.
    pub fn accepts(&self, item: &Item) -> CoreResult<()> {
        match (self.items.get(&item.name), &item.kind) {
            (None, _) => Ok(()),
            (Some(held), ItemKind::Consumable(_))
                if matches!(held.kind, ItemKind::Consumable(_)) =>
            {
                Ok(())
            }
            (Some(_), _) => Err(CoreError::DuplicateName(item.name.clone())),
        }
    }

    /// Insert an item, merging consumable stacks with the same name.
    pub fn insert(&mut self, item: Item) -> CoreResult<()> {
        self.accepts(&item)?;
        if let (Some(held), ItemKind::Consumable(incoming)) =
            (self.items.get_mut(&item.name), &item.kind)
        {
            if let ItemKind::Consumable(stack) = &mut held.kind {
                stack.amount = stack.amount.saturating_add(incoming.amount);
            }
            return Ok(());
        }
        self.items.insert(item.name.clone(), item);
        Ok(())
    }

    /// Look up an item by name.
    pub fn get(&self, name: &str) -> CoreResult<&Item> {
        self.items
            .get(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))
    }

    /// Look up an item by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> CoreResult<&mut Item> {
        self.items
            .get_mut(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))
    }

    /// Find an item by identity.
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.values().find(|item| item.id == id)
    }

    /// Returns true if an item with this name is held.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Remove an item. Equipped items are refused.
    pub fn remove(&mut self, name: &str) -> CoreResult<Item> {
        if self.get(name)?.is_equipped() {
            return Err(CoreError::StillEquipped(name.to_string()));
        }
        self.items
            .remove(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))
    }

    /// Use one unit of a consumable stack. Returns the units left; the entry
    /// is removed once nothing would remain.
    pub fn consume(&mut self, name: &str) -> CoreResult<u32> {
        let item = self.get_mut(name)?;
        let ItemKind::Consumable(stack) = &mut item.kind else {
            return Err(CoreError::WrongKind {
                name: name.to_string(),
                expected: "consumable",
            });
        };
        if stack.amount <= 1 {
            self.items.remove(name);
            return Ok(0);
        }
        stack.amount -= 1;
        Ok(stack.amount)
    }

    /// Add `quantity` units to an existing consumable stack. Returns the new amount.
    pub fn restock(&mut self, name: &str, quantity: u32) -> CoreResult<u32> {
        if quantity == 0 {
            return Err(CoreError::InvalidAmount(
                "restock quantity must be positive".to_string(),
            ));
        }
        let item = self.get_mut(name)?;
        let ItemKind::Consumable(stack) = &mut item.kind else {
            return Err(CoreError::WrongKind {
                name: name.to_string(),
                expected: "consumable",
            });
        };
        stack.amount = stack.amount.saturating_add(quantity);
        Ok(stack.amount)
    }

    /// Remove a soul item and return its value.
    pub fn take_soul(&mut self, name: &str) -> CoreResult<u64> {
        let ItemKind::Soul(soul) = self.get(name)?.kind else {
            return Err(CoreError::WrongKind {
                name: name.to_string(),
                expected: "soul item",
            });
        };
        self.items.remove(name);
        Ok(soul.value)
    }

    /// All Estus flasks, mutably.
    pub fn flasks_mut(&mut self) -> impl Iterator<Item = &mut EstusFlask> {
        self.items.values_mut().filter_map(|item| match &mut item.kind {
            ItemKind::Flask(flask) => Some(flask),
            _ => None,
        })
    }

    /// All items in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Consumable, FlaskType, Ring, SoulItem, Weapon};
    use crate::stat::{Attributes, Requirements};

    fn sword() -> Item {
        Item::new("Longsword", Weapon::new(1, 8, Requirements::default()))
    }

    #[test]
    fn insert_and_get() {
        let mut inv = Inventory::new();
        inv.insert(sword()).unwrap();
        assert_eq!(inv.len(), 1);
        assert!(inv.contains("Longsword"));
        assert_eq!(inv.get("Longsword").unwrap().name, "Longsword");
        assert_eq!(
            inv.get("Club"),
            Err(CoreError::NotFound("Club".to_string()))
        );
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut inv = Inventory::new();
        inv.insert(sword()).unwrap();
        assert_eq!(
            inv.insert(sword()),
            Err(CoreError::DuplicateName("Longsword".to_string()))
        );
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn consumables_stack_on_insert() {
        let mut inv = Inventory::new();
        inv.insert(Item::new("Firebomb", Consumable::new(3))).unwrap();
        inv.insert(Item::new("Firebomb", Consumable::new(2))).unwrap();
        assert_eq!(inv.len(), 1);
        let ItemKind::Consumable(stack) = inv.get("Firebomb").unwrap().kind else {
            panic!("expected consumable");
        };
        assert_eq!(stack.amount, 5);
    }

    #[test]
    fn non_consumable_inserted_whole_after_stacking() {
        let mut inv = Inventory::new();
        inv.insert(Item::new("Firebomb", Consumable::new(1))).unwrap();
        inv.insert(Item::new("Firebomb", Consumable::new(1))).unwrap();
        let item = sword();
        let id = item.id;
        inv.insert(item).unwrap();
        assert_eq!(inv.len(), 2);
        let held = inv.get("Longsword").unwrap();
        assert_eq!(held.id, id);
        assert!(matches!(held.kind, ItemKind::Weapon(_)));
    }

    #[test]
    fn consume_decrements_then_removes() {
        let mut inv = Inventory::new();
        inv.insert(Item::new("Firebomb", Consumable::new(2))).unwrap();
        assert_eq!(inv.consume("Firebomb").unwrap(), 1);
        assert!(inv.contains("Firebomb"));
        assert_eq!(inv.consume("Firebomb").unwrap(), 0);
        assert!(!inv.contains("Firebomb"));
    }

    #[test]
    fn consume_wrong_kind() {
        let mut inv = Inventory::new();
        inv.insert(sword()).unwrap();
        assert!(matches!(
            inv.consume("Longsword"),
            Err(CoreError::WrongKind { .. })
        ));
        assert!(inv.contains("Longsword"));
    }

    #[test]
    fn restock_adds_quantity() {
        let mut inv = Inventory::new();
        inv.insert(Item::new("Throwing Knife", Consumable::new(1)))
            .unwrap();
        assert_eq!(inv.restock("Throwing Knife", 9).unwrap(), 10);
        assert!(matches!(
            inv.restock("Throwing Knife", 0),
            Err(CoreError::InvalidAmount(_))
        ));
    }

    #[test]
    fn take_soul_removes_item() {
        let mut inv = Inventory::new();
        inv.insert(Item::new("Large Soul", SoulItem::new(1000)))
            .unwrap();
        assert_eq!(inv.take_soul("Large Soul").unwrap(), 1000);
        assert!(inv.is_empty());
        assert!(inv.take_soul("Large Soul").is_err());
    }

    #[test]
    fn remove_refuses_equipped() {
        let mut inv = Inventory::new();
        let mut ring = Item::new("Havel's Ring", Ring::new(Attributes::default()));
        ring.set_equipped(true);
        inv.insert(ring).unwrap();
        assert_eq!(
            inv.remove("Havel's Ring"),
            Err(CoreError::StillEquipped("Havel's Ring".to_string()))
        );
        inv.get_mut("Havel's Ring").unwrap().set_equipped(false);
        assert!(inv.remove("Havel's Ring").is_ok());
    }

    #[test]
    fn flasks_mut_visits_only_flasks() {
        let mut inv = Inventory::new();
        inv.insert(Item::new(
            "Estus",
            EstusFlask::new(50, 0, 0, 3, 0, FlaskType::Health),
        ))
        .unwrap();
        inv.insert(sword()).unwrap();
        let mut seen = 0;
        for flask in inv.flasks_mut() {
            flask.refill();
            seen += 1;
        }
        assert_eq!(seen, 1);
    }

    #[test]
    fn find_by_id() {
        let mut inv = Inventory::new();
        let item = sword();
        let id = item.id;
        inv.insert(item).unwrap();
        assert_eq!(inv.find(id).unwrap().name, "Longsword");
        assert!(inv.find(ItemId::new()).is_none());
    }
}
