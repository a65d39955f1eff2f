//! Paged inventory grid.
//!
//! Every [`ItemInstance`] sits in at most one slot. Moves take the item out
//! of its source before placing it, so an instance is never reachable from
//! two slots at once.

use super::types::ItemInstance;
use crate::core::error::ActionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub page: usize,
    pub slot: usize,
}

impl SlotRef {
    pub const fn new(page: usize, slot: usize) -> Self {
        Self { page, slot }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pages: Vec<Vec<Option<ItemInstance>>>,
}

impl Inventory {
    pub fn new(page_count: usize, slots_per_page: usize) -> Self {
        Self {
            pages: vec![vec![None; slots_per_page]; page_count],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn slots_per_page(&self) -> usize {
        self.pages.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_valid(&self, at: SlotRef) -> bool {
        self.pages.get(at.page).is_some_and(|p| at.slot < p.len())
    }

    pub fn get(&self, at: SlotRef) -> Option<&ItemInstance> {
        self.pages.get(at.page)?.get(at.slot)?.as_ref()
    }

    pub fn get_mut(&mut self, at: SlotRef) -> Option<&mut ItemInstance> {
        self.pages.get_mut(at.page)?.get_mut(at.slot)?.as_mut()
    }

    /// Removes and returns whatever occupies `at`.
    pub fn take(&mut self, at: SlotRef) -> Option<ItemInstance> {
        self.pages.get_mut(at.page)?.get_mut(at.slot)?.take()
    }

    /// Places an item into an empty slot, handing it back if the slot is
    /// occupied or out of range.
    pub fn place(&mut self, at: SlotRef, item: ItemInstance) -> Result<(), ItemInstance> {
        match self.pages.get_mut(at.page).and_then(|p| p.get_mut(at.slot)) {
            Some(slot @ None) => {
                *slot = Some(item);
                Ok(())
            }
            _ => Err(item),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotRef, &ItemInstance)> {
        self.pages.iter().enumerate().flat_map(|(page, slots)| {
            slots
                .iter()
                .enumerate()
                .filter_map(move |(slot, item)| item.as_ref().map(|i| (SlotRef::new(page, slot), i)))
        })
    }

    pub fn first_empty(&self) -> Option<SlotRef> {
        self.pages.iter().enumerate().find_map(|(page, slots)| {
            slots
                .iter()
                .position(Option::is_none)
                .map(|slot| SlotRef::new(page, slot))
        })
    }

    pub fn find_template(&self, template_id: &str) -> Option<SlotRef> {
        self.iter()
            .find(|(_, item)| item.template_id == template_id)
            .map(|(at, _)| at)
    }

    /// Where the item with `instance_id` currently sits.
    pub fn find_instance(&self, instance_id: u64) -> Option<SlotRef> {
        self.iter()
            .find(|(_, item)| item.instance_id == instance_id)
            .map(|(at, _)| at)
    }

    pub fn count_of(&self, template_id: &str) -> u32 {
        self.iter()
            .filter(|(_, item)| item.template_id == template_id)
            .map(|(_, item)| item.quantity)
            .sum()
    }

    /// Quantity left over after topping up existing stacks, without mutating.
    fn remainder_after_merge(&self, item: &ItemInstance) -> u32 {
        if !item.is_stackable() {
            return item.quantity;
        }
        let max = item.max_stack();
        let mut remaining = item.quantity;
        for (_, existing) in self.iter() {
            if remaining == 0 {
                break;
            }
            if existing.can_stack_with(item) {
                remaining -= remaining.min(max.saturating_sub(existing.quantity));
            }
        }
        remaining
    }

    pub fn can_add(&self, item: &ItemInstance) -> bool {
        let remaining = self.remainder_after_merge(item);
        remaining == 0 || (remaining <= item.max_stack() && self.first_empty().is_some())
    }

    /// Adds an item, filling existing stacks of the same template first and
    /// then the first empty slot. On failure nothing changes and the item is
    /// handed back to the caller.
    pub fn add(&mut self, mut item: ItemInstance) -> Result<(), ItemInstance> {
        if !self.can_add(&item) {
            return Err(item);
        }
        if item.is_stackable() {
            let max = item.max_stack();
            for slot in self.pages.iter_mut().flatten().flatten() {
                if item.quantity == 0 {
                    break;
                }
                if slot.can_stack_with(&item) && slot.quantity < max {
                    let moved = item.quantity.min(max - slot.quantity);
                    slot.quantity += moved;
                    item.quantity -= moved;
                }
            }
            if item.quantity == 0 {
                return Ok(());
            }
        }
        match self.first_empty() {
            Some(at) => self.place(at, item),
            None => Err(item),
        }
    }

    /// Moves a stack from `from` to `to`.
    ///
    /// Empty target: relocate. Same stackable template with room: merge up
    /// to capacity, remainder stays at `from`. Anything else: swap.
    pub fn move_item(&mut self, from: SlotRef, to: SlotRef) -> Result<(), ActionError> {
        if !self.is_valid(from) || !self.is_valid(to) {
            return Err(ActionError::EmptySlot);
        }
        if from == to {
            return Ok(());
        }
        let Some(mut moving) = self.take(from) else {
            return Err(ActionError::EmptySlot);
        };
        match self.take(to) {
            None => {
                let _ = self.place(to, moving);
            }
            Some(mut target) => {
                let max = target.max_stack();
                if target.can_stack_with(&moving) && target.quantity < max {
                    let moved = moving.quantity.min(max - target.quantity);
                    target.quantity += moved;
                    moving.quantity -= moved;
                    let _ = self.place(to, target);
                    if moving.quantity > 0 {
                        let _ = self.place(from, moving);
                    }
                } else {
                    let _ = self.place(to, moving);
                    let _ = self.place(from, target);
                }
            }
        }
        Ok(())
    }

    /// Splits `amount` off the stack at `from` into the first empty slot.
    /// `new_instance_id` becomes the id of the split-off stack.
    pub fn split(&mut self, from: SlotRef, amount: u32, new_instance_id: u64) -> Result<SlotRef, ActionError> {
        let target = self.first_empty().ok_or(ActionError::InventoryFull)?;
        let source = self.get_mut(from).ok_or(ActionError::EmptySlot)?;
        if amount == 0 || amount >= source.quantity {
            return Err(ActionError::CannotUse);
        }
        source.quantity -= amount;
        let mut split = source.clone();
        split.instance_id = new_instance_id;
        split.quantity = amount;
        let _ = self.place(target, split);
        Ok(target)
    }

    /// Consumes one unit of the stack at `at`, clearing the slot at zero.
    pub fn consume_one(&mut self, at: SlotRef) -> bool {
        let Some(item) = self.get_mut(at) else {
            return false;
        };
        item.quantity = item.quantity.saturating_sub(1);
        if item.quantity == 0 {
            self.take(at);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::Rarity;

    fn item(id: u64, template_id: &str, quantity: u32) -> ItemInstance {
        ItemInstance {
            instance_id: id,
            template_id: template_id.to_string(),
            quantity,
            upgrade_level: 0,
            rarity: Rarity::Normal,
            extra_bonuses: Vec::new(),
        }
    }

    #[test]
    fn test_add_fills_first_empty_slot() {
        let mut inv = Inventory::new(2, 45);
        inv.add(item(1, "sword_1", 1)).unwrap();
        assert_eq!(inv.get(SlotRef::new(0, 0)).unwrap().instance_id, 1);
        inv.add(item(2, "sword_1", 1)).unwrap();
        assert_eq!(inv.get(SlotRef::new(0, 1)).unwrap().instance_id, 2);
    }

    #[test]
    fn test_add_merges_stackables() {
        let mut inv = Inventory::new(1, 4);
        inv.add(item(1, "potion_red", 150)).unwrap();
        inv.add(item(2, "potion_red", 100)).unwrap();
        assert_eq!(inv.get(SlotRef::new(0, 0)).unwrap().quantity, 200);
        let overflow = inv.get(SlotRef::new(0, 1)).unwrap();
        assert_eq!(overflow.quantity, 50);
        assert_eq!(overflow.instance_id, 2);
        assert_eq!(inv.count_of("potion_red"), 250);
    }

    #[test]
    fn test_add_to_full_inventory_is_noop() {
        let mut inv = Inventory::new(1, 2);
        inv.add(item(1, "sword_1", 1)).unwrap();
        inv.add(item(2, "potion_red", 200)).unwrap();
        let before = inv.clone();
        let rejected = inv.add(item(3, "potion_red", 5)).unwrap_err();
        assert_eq!(rejected.instance_id, 3);
        assert_eq!(inv, before, "failed add must not mutate");
    }

    #[test]
    fn test_full_inventory_still_merges_into_existing_stack() {
        let mut inv = Inventory::new(1, 1);
        inv.add(item(1, "potion_red", 10)).unwrap();
        assert!(inv.add(item(2, "potion_red", 5)).is_ok());
        assert_eq!(inv.count_of("potion_red"), 15);
    }

    #[test]
    fn test_move_to_empty_relocates() {
        let mut inv = Inventory::new(1, 4);
        inv.add(item(1, "sword_1", 1)).unwrap();
        inv.move_item(SlotRef::new(0, 0), SlotRef::new(0, 3)).unwrap();
        assert!(inv.get(SlotRef::new(0, 0)).is_none());
        assert_eq!(inv.get(SlotRef::new(0, 3)).unwrap().instance_id, 1);
    }

    #[test]
    fn test_move_merges_with_remainder() {
        let mut inv = Inventory::new(1, 4);
        inv.place(SlotRef::new(0, 0), item(1, "potion_red", 150)).unwrap();
        inv.place(SlotRef::new(0, 1), item(2, "potion_red", 120)).unwrap();
        inv.move_item(SlotRef::new(0, 0), SlotRef::new(0, 1)).unwrap();
        assert_eq!(inv.get(SlotRef::new(0, 1)).unwrap().quantity, 200);
        assert_eq!(inv.get(SlotRef::new(0, 0)).unwrap().quantity, 70);
    }

    #[test]
    fn test_move_swaps_incompatible() {
        let mut inv = Inventory::new(1, 4);
        inv.place(SlotRef::new(0, 0), item(1, "sword_1", 1)).unwrap();
        inv.place(SlotRef::new(0, 1), item(2, "potion_red", 3)).unwrap();
        inv.move_item(SlotRef::new(0, 0), SlotRef::new(0, 1)).unwrap();
        assert_eq!(inv.get(SlotRef::new(0, 0)).unwrap().instance_id, 2);
        assert_eq!(inv.get(SlotRef::new(0, 1)).unwrap().instance_id, 1);
    }

    #[test]
    fn test_move_swaps_full_stack() {
        let mut inv = Inventory::new(1, 4);
        inv.place(SlotRef::new(0, 0), item(1, "potion_red", 5)).unwrap();
        inv.place(SlotRef::new(0, 1), item(2, "potion_red", 200)).unwrap();
        inv.move_item(SlotRef::new(0, 0), SlotRef::new(0, 1)).unwrap();
        assert_eq!(inv.get(SlotRef::new(0, 0)).unwrap().quantity, 200);
        assert_eq!(inv.get(SlotRef::new(0, 1)).unwrap().quantity, 5);
    }

    #[test]
    fn test_move_never_duplicates() {
        let mut inv = Inventory::new(2, 3);
        inv.place(SlotRef::new(0, 0), item(1, "sword_1", 1)).unwrap();
        inv.move_item(SlotRef::new(0, 0), SlotRef::new(1, 2)).unwrap();
        let ids: Vec<u64> = inv.iter().map(|(_, i)| i.instance_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_move_from_empty_rejected() {
        let mut inv = Inventory::new(1, 4);
        assert_eq!(
            inv.move_item(SlotRef::new(0, 0), SlotRef::new(0, 1)),
            Err(ActionError::EmptySlot)
        );
    }

    #[test]
    fn test_split_stack() {
        let mut inv = Inventory::new(1, 4);
        inv.add(item(1, "potion_red", 10)).unwrap();
        let at = inv.split(SlotRef::new(0, 0), 4, 99).unwrap();
        assert_eq!(inv.get(SlotRef::new(0, 0)).unwrap().quantity, 6);
        let split = inv.get(at).unwrap();
        assert_eq!(split.quantity, 4);
        assert_eq!(split.instance_id, 99);
        assert!(inv.split(SlotRef::new(0, 0), 6, 100).is_err());
    }

    #[test]
    fn test_consume_one_clears_slot() {
        let mut inv = Inventory::new(1, 2);
        inv.add(item(1, "potion_red", 1)).unwrap();
        assert!(inv.consume_one(SlotRef::new(0, 0)));
        assert!(inv.get(SlotRef::new(0, 0)).is_none());
        assert!(!inv.consume_one(SlotRef::new(0, 0)));
    }
}
