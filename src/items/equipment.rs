use super::types::{ItemCategory, ItemInstance};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Shield,
    Boots,
    Necklace,
    Earrings,
    Bracelet,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 8] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Helmet,
        EquipmentSlot::Shield,
        EquipmentSlot::Boots,
        EquipmentSlot::Necklace,
        EquipmentSlot::Earrings,
        EquipmentSlot::Bracelet,
    ];

    /// The slot an item category is worn in, if it is wearable at all.
    pub fn for_category(category: ItemCategory) -> Option<Self> {
        match category {
            ItemCategory::Weapon => Some(EquipmentSlot::Weapon),
            ItemCategory::Armor => Some(EquipmentSlot::Armor),
            ItemCategory::Helmet => Some(EquipmentSlot::Helmet),
            ItemCategory::Shield => Some(EquipmentSlot::Shield),
            ItemCategory::Boots => Some(EquipmentSlot::Boots),
            ItemCategory::Necklace => Some(EquipmentSlot::Necklace),
            ItemCategory::Earring => Some(EquipmentSlot::Earrings),
            ItemCategory::Bracelet => Some(EquipmentSlot::Bracelet),
            _ => None,
        }
    }
}

/// Player equipment slots.
///
/// New slots need `#[serde(default)]` so older save files keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<ItemInstance>,
    pub armor: Option<ItemInstance>,
    pub helmet: Option<ItemInstance>,
    pub shield: Option<ItemInstance>,
    pub boots: Option<ItemInstance>,
    pub necklace: Option<ItemInstance>,
    pub earrings: Option<ItemInstance>,
    pub bracelet: Option<ItemInstance>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&ItemInstance> {
        self.slot_ref(slot).as_ref()
    }

    fn slot_ref(&self, slot: EquipmentSlot) -> &Option<ItemInstance> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Helmet => &self.helmet,
            EquipmentSlot::Shield => &self.shield,
            EquipmentSlot::Boots => &self.boots,
            EquipmentSlot::Necklace => &self.necklace,
            EquipmentSlot::Earrings => &self.earrings,
            EquipmentSlot::Bracelet => &self.bracelet,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<ItemInstance> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Helmet => &mut self.helmet,
            EquipmentSlot::Shield => &mut self.shield,
            EquipmentSlot::Boots => &mut self.boots,
            EquipmentSlot::Necklace => &mut self.necklace,
            EquipmentSlot::Earrings => &mut self.earrings,
            EquipmentSlot::Bracelet => &mut self.bracelet,
        }
    }

    /// Removes the item worn in `slot`.
    pub fn take(&mut self, slot: EquipmentSlot) -> Option<ItemInstance> {
        self.slot_mut(slot).take()
    }

    /// Puts `item` in `slot` and returns whatever was worn there before.
    pub fn replace(&mut self, slot: EquipmentSlot, item: ItemInstance) -> Option<ItemInstance> {
        self.slot_mut(slot).replace(item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &ItemInstance> {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot))
    }
}
