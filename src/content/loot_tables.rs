//! Loot table definitions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootReward {
    Gold,
    Item(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LootEntry {
    pub reward: LootReward,
    pub chance: f64,
    pub min_quantity: u32,
    pub max_quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LootTable {
    pub id: &'static str,
    pub entries: &'static [LootEntry],
    pub roll_count: u32,
}

const fn gold(chance: f64, min_quantity: u32, max_quantity: u32) -> LootEntry {
    LootEntry {
        reward: LootReward::Gold,
        chance,
        min_quantity,
        max_quantity,
    }
}

const fn item(id: &'static str, chance: f64, min_quantity: u32, max_quantity: u32) -> LootEntry {
    LootEntry {
        reward: LootReward::Item(id),
        chance,
        min_quantity,
        max_quantity,
    }
}

const WILD_DOG_ENTRIES: [LootEntry; 5] = [
    gold(0.8, 10, 30),
    item("potion_red", 0.1, 1, 1),
    item("sword_1", 0.05, 1, 1),
    item("dagger_1", 0.05, 1, 1),
    item("fan", 0.05, 1, 1),
];

const WOLF_ENTRIES: [LootEntry; 7] = [
    gold(0.9, 20, 50),
    item("wolf_fur", 0.2, 1, 1),
    item("potion_red", 0.15, 1, 2),
    item("long_sword", 0.05, 1, 1),
    item("amija", 0.05, 1, 1),
    item("short_bow", 0.05, 1, 1),
    item("iron_fan", 0.05, 1, 1),
];

const BEAR_ENTRIES: [LootEntry; 6] = [
    gold(1.0, 50, 100),
    item("glaive_1", 0.1, 1, 1),
    item("potion_red", 0.3, 2, 5),
    item("bamboo_sword", 0.05, 1, 1),
    item("nine_blades", 0.05, 1, 1),
    item("red_iron_blade", 0.02, 1, 1),
];

const TIGER_ENTRIES: [LootEntry; 5] = [
    gold(1.0, 100, 200),
    item("broad_sword", 0.05, 1, 1),
    item("scissor_dagger", 0.05, 1, 1),
    item("composite_bow", 0.05, 1, 1),
    item("antique_bell", 0.02, 1, 1),
];

const METIN_LOW_ENTRIES: [LootEntry; 6] = [
    gold(1.0, 500, 1000),
    item("potion_red_m", 1.0, 5, 10),
    item("book_aura", 0.3, 1, 1),
    item("full_moon_sword", 0.05, 1, 1),
    item("black_leaf_dagger", 0.05, 1, 1),
    item("autumn_wind_fan", 0.05, 1, 1),
];

pub static LOOT_TABLES: &[LootTable] = &[
    LootTable {
        id: "wild_dog_loot",
        entries: &WILD_DOG_ENTRIES,
        roll_count: 1,
    },
    LootTable {
        id: "wolf_loot",
        entries: &WOLF_ENTRIES,
        roll_count: 1,
    },
    LootTable {
        id: "bear_loot",
        entries: &BEAR_ENTRIES,
        roll_count: 2,
    },
    LootTable {
        id: "tiger_loot",
        entries: &TIGER_ENTRIES,
        roll_count: 2,
    },
    LootTable {
        id: "metin_loot_low",
        entries: &METIN_LOW_ENTRIES,
        roll_count: 3,
    },
];

pub fn loot_table(id: &str) -> Option<&'static LootTable> {
    LOOT_TABLES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::items::item_template;

    #[test]
    fn test_item_entries_resolve() {
        for table in LOOT_TABLES {
            for entry in table.entries {
                if let LootReward::Item(id) = entry.reward {
                    assert!(item_template(id).is_some(), "{} in {}", id, table.id);
                }
                assert!(entry.min_quantity <= entry.max_quantity);
                assert!((0.0..=1.0).contains(&entry.chance));
            }
        }
    }
}
