//! Item instantiation from templates.

use super::types::ItemInstance;
use crate::content::items::item_template;

/// Hands out unique instance ids. Persisted with the save so ids stay unique
/// across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemIdAllocator {
    next: u64,
}

impl ItemIdAllocator {
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    pub fn next_id(&mut self) -> u64 {
        self.next = self.next.max(1);
        let id = self.next;
        self.next += 1;
        id
    }

    /// Value to persist so a restored allocator never reuses an id.
    pub fn peek(&self) -> u64 {
        self.next.max(1)
    }
}

/// Creates a fresh instance of `template_id`. Quantity is clamped to
/// `1..=max_stack`. Returns `None` for unknown templates.
pub fn create_item(template_id: &str, quantity: u32, ids: &mut ItemIdAllocator) -> Option<ItemInstance> {
    let template = item_template(template_id)?;
    Some(ItemInstance {
        instance_id: ids.next_id(),
        template_id: template.id.to_string(),
        quantity: quantity.clamp(1, template.max_stack.max(1)),
        upgrade_level: 0,
        rarity: template.rarity,
        extra_bonuses: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::Rarity;

    #[test]
    fn test_ids_are_unique() {
        let mut ids = ItemIdAllocator::default();
        let a = create_item("sword_1", 1, &mut ids).unwrap();
        let b = create_item("sword_1", 1, &mut ids).unwrap();
        assert_ne!(a.instance_id, b.instance_id);
    }

    #[test]
    fn test_quantity_clamped() {
        let mut ids = ItemIdAllocator::default();
        assert_eq!(create_item("sword_1", 5, &mut ids).unwrap().quantity, 1);
        assert_eq!(create_item("potion_red", 500, &mut ids).unwrap().quantity, 200);
        assert_eq!(create_item("potion_red", 0, &mut ids).unwrap().quantity, 1);
    }

    #[test]
    fn test_rarity_from_template() {
        let mut ids = ItemIdAllocator::default();
        let fms = create_item("full_moon_sword", 1, &mut ids).unwrap();
        assert_eq!(fms.rarity, Rarity::Rare);
    }

    #[test]
    fn test_unknown_template() {
        let mut ids = ItemIdAllocator::starting_at(7);
        assert!(create_item("nope", 1, &mut ids).is_none());
        assert_eq!(ids.peek(), 7, "unknown template must not burn an id");
    }
}
