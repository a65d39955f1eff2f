//! Item catalog.

use crate::items::types::{
    Bonus, BonusType, ItemCategory, ItemEffect, ItemTemplate, PlayerClass, Rarity,
};

use BonusType::{Attack, AttackSpeed, Defense, MoveSpeed, SkillAttack};
use PlayerClass::{Ninja, Shaman, Sura, Warrior};

const BLADE_USERS: &[PlayerClass] = &[Warrior, Ninja, Sura];
const WARRIOR: &[PlayerClass] = &[Warrior];
const NINJA: &[PlayerClass] = &[Ninja];
const SHAMAN: &[PlayerClass] = &[Shaman];
const HEAVY_ARMOR: &[PlayerClass] = &[Warrior, Sura];
const LIGHT_ARMOR: &[PlayerClass] = &[Ninja, Shaman];
const POTION_STACK: u32 = 200;

const fn gear(
    id: &'static str,
    name: &'static str,
    category: ItemCategory,
    bonuses: &'static [Bonus],
    required_level: u32,
    classes: &'static [PlayerClass],
    rarity: Rarity,
) -> ItemTemplate {
    ItemTemplate {
        id,
        name,
        category,
        rarity,
        bonuses,
        required_level,
        classes,
        max_stack: 1,
        effect: ItemEffect::None,
        description: "",
    }
}

const fn weapon(
    id: &'static str,
    name: &'static str,
    bonuses: &'static [Bonus],
    required_level: u32,
    classes: &'static [PlayerClass],
) -> ItemTemplate {
    gear(id, name, ItemCategory::Weapon, bonuses, required_level, classes, Rarity::Normal)
}

const fn rare_weapon(
    id: &'static str,
    name: &'static str,
    bonuses: &'static [Bonus],
    required_level: u32,
    classes: &'static [PlayerClass],
    rarity: Rarity,
) -> ItemTemplate {
    gear(id, name, ItemCategory::Weapon, bonuses, required_level, classes, rarity)
}

const fn potion(id: &'static str, name: &'static str, effect: ItemEffect, description: &'static str) -> ItemTemplate {
    ItemTemplate {
        id,
        name,
        category: ItemCategory::Consumable,
        rarity: Rarity::Normal,
        bonuses: &[],
        required_level: 0,
        classes: &[],
        max_stack: POTION_STACK,
        effect,
        description,
    }
}

macro_rules! b {
    ($kind:ident, $value:expr) => {
        Bonus {
            kind: $kind,
            value: $value,
        }
    };
}

pub static ITEM_TEMPLATES: &[ItemTemplate] = &[
    // Swords
    weapon("sword_1", "Sword", &[b!(Attack, 15)], 0, BLADE_USERS),
    weapon("long_sword", "Long Sword", &[b!(Attack, 20)], 5, BLADE_USERS),
    weapon("crescent_sword", "Crescent Sword", &[b!(Attack, 26)], 10, BLADE_USERS),
    weapon("bamboo_sword", "Bamboo Sword", &[b!(Attack, 32)], 15, BLADE_USERS),
    weapon("broad_sword", "Broad Sword", &[b!(Attack, 38)], 20, BLADE_USERS),
    weapon("silver_sword", "Silver Sword", &[b!(Attack, 44), b!(AttackSpeed, 5)], 25, BLADE_USERS),
    rare_weapon("full_moon_sword", "Full Moon Sword", &[b!(Attack, 65), b!(SkillAttack, 15)], 30, BLADE_USERS, Rarity::Rare),
    weapon("bastard_sword", "Bastard Sword", &[b!(Attack, 52)], 36, BLADE_USERS),
    weapon("barbarian_sword", "Barbarian Sword", &[b!(Attack, 58)], 40, BLADE_USERS),
    weapon("bloody_sword", "Bloody Sword", &[b!(Attack, 64), b!(AttackSpeed, 8)], 45, BLADE_USERS),
    weapon("great_sword", "Great Sword", &[b!(Attack, 70)], 50, BLADE_USERS),
    weapon("wizard_sword", "Wizard Sword", &[b!(Attack, 76), b!(SkillAttack, 10)], 55, BLADE_USERS),
    weapon("half_moon_sword", "Half Moon Sword", &[b!(Attack, 82)], 60, BLADE_USERS),
    rare_weapon("battle_sword", "Battle Sword", &[b!(Attack, 90), b!(AttackSpeed, 15)], 65, BLADE_USERS, Rarity::Rare),
    rare_weapon("nymph_sword", "Nymph Sword", &[b!(Attack, 95), b!(AttackSpeed, 20)], 65, BLADE_USERS, Rarity::Rare),
    rare_weapon(
        "poison_sword",
        "Poison Sword",
        &[b!(Attack, 120), b!(AttackSpeed, 25), b!(SkillAttack, 20)],
        75,
        BLADE_USERS,
        Rarity::Legendary,
    ),
    // Two-handed
    weapon("glaive_1", "Glaive", &[b!(Attack, 25)], 5, WARRIOR),
    weapon("spear", "Spear", &[b!(Attack, 32)], 10, WARRIOR),
    weapon("guillotine_blade", "Guillotine Blade", &[b!(Attack, 40)], 15, WARRIOR),
    weapon("spider_spear", "Spider Spear", &[b!(Attack, 48)], 20, WARRIOR),
    weapon("guisarme", "Guisarme", &[b!(Attack, 56)], 25, WARRIOR),
    rare_weapon("red_iron_blade", "Red Iron Blade", &[b!(Attack, 85), b!(SkillAttack, 20)], 30, WARRIOR, Rarity::Rare),
    weapon("war_scythe", "War Scythe", &[b!(Attack, 64)], 32, WARRIOR),
    weapon("orchid_blade", "Orchid Blade", &[b!(Attack, 70)], 40, WARRIOR),
    weapon("partizan", "Partizan", &[b!(Attack, 95)], 65, WARRIOR),
    // Daggers
    weapon("dagger_1", "Dagger", &[b!(Attack, 12), b!(AttackSpeed, 20)], 0, NINJA),
    weapon("amija", "Amija", &[b!(Attack, 16)], 5, NINJA),
    weapon("cobra_dagger", "Cobra Dagger", &[b!(Attack, 22)], 10, NINJA),
    weapon("nine_blades", "Nine Blades", &[b!(Attack, 26)], 15, NINJA),
    weapon("scissor_dagger", "Scissor Dagger", &[b!(Attack, 30)], 20, NINJA),
    weapon("short_knife", "Short Knife", &[b!(Attack, 34)], 25, NINJA),
    rare_weapon("black_leaf_dagger", "Black Leaf Dagger", &[b!(Attack, 55), b!(SkillAttack, 18)], 30, NINJA, Rarity::Rare),
    weapon("face_dagger", "Face Dagger", &[b!(Attack, 40)], 32, NINJA),
    weapon("blitz_dagger", "Blitz Dagger", &[b!(Attack, 44)], 36, NINJA),
    weapon("bloody_dagger", "Bloody Dagger", &[b!(Attack, 50)], 40, NINJA),
    weapon("rib_knife", "Rib Knife", &[b!(Attack, 56)], 45, NINJA),
    weapon("chakram", "Chakram", &[b!(Attack, 62)], 50, NINJA),
    weapon("lightning_knife", "Lightning Knife", &[b!(Attack, 70)], 55, NINJA),
    rare_weapon("dragon_knife", "Dragon Knife", &[b!(Attack, 85)], 65, NINJA, Rarity::Rare),
    // Bows
    weapon("short_bow", "Short Bow", &[b!(Attack, 12)], 0, NINJA),
    weapon("long_bow", "Long Bow", &[b!(Attack, 18)], 5, NINJA),
    weapon("composite_bow", "Composite Bow", &[b!(Attack, 25)], 10, NINJA),
    rare_weapon("horn_bow", "Horn Bow", &[b!(Attack, 50), b!(SkillAttack, 15)], 30, NINJA, Rarity::Rare),
    weapon("unicorn_bow", "Unicorn Bow", &[b!(Attack, 60)], 45, NINJA),
    weapon("yellow_dragon_bow", "Yellow Dragon Bow", &[b!(Attack, 90)], 65, NINJA),
    // Bells
    weapon("copper_bell", "Copper Bell", &[b!(Attack, 14), b!(SkillAttack, 5)], 0, SHAMAN),
    weapon("silver_bell", "Silver Bell", &[b!(Attack, 18)], 5, SHAMAN),
    weapon("gold_bell", "Gold Bell", &[b!(Attack, 24)], 10, SHAMAN),
    weapon("jade_bell", "Jade Bell", &[b!(Attack, 28)], 15, SHAMAN),
    rare_weapon("antique_bell", "Antique Bell", &[b!(Attack, 45), b!(SkillAttack, 15)], 30, SHAMAN, Rarity::Rare),
    weapon("apricot_bell", "Apricot Bell", &[b!(Attack, 50)], 40, SHAMAN),
    weapon("thunder_bird_bell", "Thunder Bird Bell", &[b!(Attack, 65)], 55, SHAMAN),
    weapon("heaven_earth_bell", "Heaven & Earth Bell", &[b!(Attack, 85)], 65, SHAMAN),
    // Fans
    weapon("fan", "Fan", &[b!(Attack, 14)], 0, SHAMAN),
    weapon("iron_fan", "Iron Fan", &[b!(Attack, 18)], 5, SHAMAN),
    weapon("black_tiger_fan", "Black Tiger Fan", &[b!(Attack, 24)], 10, SHAMAN),
    weapon("peacock_fan", "Peacock Fan", &[b!(Attack, 30)], 20, SHAMAN),
    rare_weapon("autumn_wind_fan", "Autumn Wind Fan", &[b!(Attack, 45), b!(SkillAttack, 15)], 30, SHAMAN, Rarity::Rare),
    weapon("salvation_fan", "Salvation Fan", &[b!(Attack, 80), b!(AttackSpeed, 10)], 65, SHAMAN),
    // Armor and accessories
    gear("armor_1", "Monk Plate", ItemCategory::Armor, &[b!(Defense, 15)], 0, HEAVY_ARMOR, Rarity::Normal),
    gear(
        "cloth_armor",
        "Azure Suit",
        ItemCategory::Armor,
        &[b!(Defense, 12), b!(MoveSpeed, 5)],
        0,
        LIGHT_ARMOR,
        Rarity::Normal,
    ),
    gear("leather_armor", "Iron Plate", ItemCategory::Armor, &[b!(Defense, 25)], 9, HEAVY_ARMOR, Rarity::Normal),
    gear("wooden_helmet", "Wooden Helmet", ItemCategory::Helmet, &[b!(Defense, 5)], 0, &[], Rarity::Normal),
    gear("battle_shield", "Battle Shield", ItemCategory::Shield, &[b!(Defense, 10)], 0, &[], Rarity::Normal),
    // Potions
    potion("potion_red", "Red Potion (S)", ItemEffect::RestoreHp(200), "Restores 200 HP."),
    potion("potion_red_m", "Red Potion (M)", ItemEffect::RestoreHp(500), "Restores 500 HP."),
    potion("potion_blue", "Blue Potion (S)", ItemEffect::RestoreMp(50), "Restores 50 SP."),
    potion("potion_blue_m", "Blue Potion (M)", ItemEffect::RestoreMp(150), "Restores 150 SP."),
    // Materials
    ItemTemplate {
        id: "wolf_fur",
        name: "Wolf Fur",
        category: ItemCategory::Material,
        rarity: Rarity::Normal,
        bonuses: &[],
        required_level: 0,
        classes: &[],
        max_stack: 200,
        effect: ItemEffect::None,
        description: "Fur from a wolf.",
    },
    ItemTemplate {
        id: "book_aura",
        name: "Aura of Sword Book",
        category: ItemCategory::Material,
        rarity: Rarity::Normal,
        bonuses: &[],
        required_level: 0,
        classes: WARRIOR,
        max_stack: 1,
        effect: ItemEffect::SkillBook,
        description: "Skill book for Warriors.",
    },
];

pub fn item_template(id: &str) -> Option<&'static ItemTemplate> {
    ITEM_TEMPLATES.iter().find(|t| t.id == id)
}
