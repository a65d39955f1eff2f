//! Village NPCs and the shops they run.

use crate::core::geometry::Position;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpcRole {
    Shop,
    Teleporter,
    QuestGiver,
    Guard,
    Blacksmith,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpcDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub role: NpcRole,
    pub shop_id: Option<&'static str>,
    pub position: Position,
    pub heading: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopListing {
    pub item_id: &'static str,
    pub price: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub allow_sell: bool,
    pub listings: &'static [ShopListing],
}

impl ShopDefinition {
    pub fn price_of(&self, item_id: &str) -> Option<u64> {
        self.listings
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.price)
    }
}

const fn npc(
    id: &'static str,
    name: &'static str,
    role: NpcRole,
    x: f64,
    z: f64,
    heading: f64,
) -> NpcDefinition {
    NpcDefinition {
        id,
        name,
        role,
        shop_id: None,
        position: Position::new(x, z),
        heading,
    }
}

const fn merchant(id: &'static str, name: &'static str, shop_id: &'static str, x: f64, z: f64, heading: f64) -> NpcDefinition {
    NpcDefinition {
        id,
        name,
        role: NpcRole::Shop,
        shop_id: Some(shop_id),
        position: Position::new(x, z),
        heading,
    }
}

pub static NPCS: &[NpcDefinition] = &[
    merchant("v1_weapon_merchant", "Weapon Merchant", "v1_weapon_shop", 12.0, -5.0, -PI / 2.0),
    merchant("v1_armor_merchant", "Armor Merchant", "v1_armor_shop", 12.0, 5.0, -PI / 2.0),
    merchant("v1_potion_merchant", "General Store", "v1_potion_shop", -12.0, 0.0, PI / 2.0),
    npc("v1_general", "General", NpcRole::Guard, 0.0, -12.0, 0.0),
    npc("v1_old_man", "Old Man", NpcRole::QuestGiver, -5.0, -5.0, PI / 4.0),
    npc("v1_teleporter", "Teleporter", NpcRole::Teleporter, 20.0, 0.0, -PI / 2.0),
    npc("v1_storage_keeper", "Storage Keeper", NpcRole::QuestGiver, 0.0, -20.0, 0.0),
    npc("v1_stable_boy", "Stable Boy", NpcRole::QuestGiver, 20.0, -10.0, -PI / 2.0),
    npc("v1_fisherman", "Fisherman", NpcRole::QuestGiver, 0.0, -55.0, PI),
    npc("v1_guide", "City Guard", NpcRole::Guard, 0.0, 10.0, PI),
    npc("v1_blacksmith", "Blacksmith", NpcRole::Blacksmith, 8.0, 8.0, -PI / 4.0),
];

const fn listing(item_id: &'static str, price: u64) -> ShopListing {
    ShopListing { item_id, price }
}

const WEAPON_LISTINGS: [ShopListing; 17] = [
    listing("sword_1", 100),
    listing("long_sword", 500),
    listing("crescent_sword", 1500),
    listing("bamboo_sword", 3000),
    listing("broad_sword", 6000),
    listing("glaive_1", 500),
    listing("spear", 1000),
    listing("guillotine_blade", 3000),
    listing("dagger_1", 200),
    listing("amija", 600),
    listing("cobra_dagger", 1200),
    listing("short_bow", 400),
    listing("long_bow", 1200),
    listing("copper_bell", 300),
    listing("silver_bell", 800),
    listing("fan", 300),
    listing("iron_fan", 800),
];

const ARMOR_LISTINGS: [ShopListing; 5] = [
    listing("armor_1", 800),
    listing("cloth_armor", 1500),
    listing("leather_armor", 4000),
    listing("wooden_helmet", 600),
    listing("battle_shield", 500),
];

const POTION_LISTINGS: [ShopListing; 4] = [
    listing("potion_red", 200),
    listing("potion_red_m", 800),
    listing("potion_blue", 400),
    listing("potion_blue_m", 1600),
];

pub static SHOPS: &[ShopDefinition] = &[
    ShopDefinition {
        id: "v1_weapon_shop",
        name: "Weapon Shop",
        allow_sell: true,
        listings: &WEAPON_LISTINGS,
    },
    ShopDefinition {
        id: "v1_armor_shop",
        name: "Armor Shop",
        allow_sell: true,
        listings: &ARMOR_LISTINGS,
    },
    ShopDefinition {
        id: "v1_potion_shop",
        name: "General Store",
        allow_sell: true,
        listings: &POTION_LISTINGS,
    },
];

pub fn npc_definition(id: &str) -> Option<&'static NpcDefinition> {
    NPCS.iter().find(|n| n.id == id)
}

pub fn shop_definition(id: &str) -> Option<&'static ShopDefinition> {
    SHOPS.iter().find(|s| s.id == id)
}
