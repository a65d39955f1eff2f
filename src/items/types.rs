use crate::content::items::item_template;
use crate::core::constants::UPGRADE_BONUS_PER_LEVEL;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    Warrior,
    Ninja,
    Sura,
    Shaman,
}

impl PlayerClass {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::Warrior => "warrior",
            PlayerClass::Ninja => "ninja",
            PlayerClass::Sura => "sura",
            PlayerClass::Shaman => "shaman",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "warrior" => Some(PlayerClass::Warrior),
            "ninja" => Some(PlayerClass::Ninja),
            "sura" => Some(PlayerClass::Sura),
            "shaman" => Some(PlayerClass::Shaman),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Normal = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Normal => "Normal",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Helmet,
    Shield,
    Boots,
    Earring,
    Necklace,
    Bracelet,
    Consumable,
    Material,
    Quest,
    Stone,
    Costume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusType {
    Str,
    Dex,
    Vit,
    Int,
    MaxHp,
    Attack,
    SkillAttack,
    AttackSpeed,
    MoveSpeed,
    CritChance,
    Defense,
    ExpRate,
}

impl BonusType {
    /// Bonuses that grow with the item's upgrade level.
    pub fn scales_with_upgrade(&self) -> bool {
        matches!(
            self,
            BonusType::Attack | BonusType::Defense | BonusType::MaxHp
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    pub kind: BonusType,
    pub value: u32,
}

impl Bonus {
    pub const fn new(kind: BonusType, value: u32) -> Self {
        Self { kind, value }
    }
}

/// What happens when an item is used from the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    None,
    RestoreHp(u32),
    RestoreMp(u32),
    SkillBook,
}

/// Immutable definition shared by every instance of an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ItemCategory,
    pub rarity: Rarity,
    pub bonuses: &'static [Bonus],
    pub required_level: u32,
    /// Empty means any class may use it.
    pub classes: &'static [PlayerClass],
    pub max_stack: u32,
    pub effect: ItemEffect,
    pub description: &'static str,
}

impl ItemTemplate {
    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }

    pub fn allows_class(&self, class: PlayerClass) -> bool {
        self.classes.is_empty() || self.classes.contains(&class)
    }
}

/// A concrete owned item. Lives in exactly one inventory or equipment slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub instance_id: u64,
    pub template_id: String,
    pub quantity: u32,
    pub upgrade_level: u8,
    pub rarity: Rarity,
    #[serde(default)]
    pub extra_bonuses: Vec<Bonus>,
}

impl ItemInstance {
    pub fn template(&self) -> Option<&'static ItemTemplate> {
        item_template(&self.template_id)
    }

    pub fn name(&self) -> String {
        let base = self.template().map(|t| t.name).unwrap_or("Unknown Item");
        if self.upgrade_level > 0 {
            format!("{}+{}", base, self.upgrade_level)
        } else {
            base.to_string()
        }
    }

    pub fn max_stack(&self) -> u32 {
        self.template().map(|t| t.max_stack).unwrap_or(1).max(1)
    }

    pub fn is_stackable(&self) -> bool {
        self.max_stack() > 1
    }

    /// Two stacks may merge only if they share a template and that template stacks.
    pub fn can_stack_with(&self, other: &ItemInstance) -> bool {
        self.template_id == other.template_id && self.is_stackable()
    }

    pub fn category(&self) -> Option<ItemCategory> {
        self.template().map(|t| t.category)
    }

    /// Base plus extra bonuses, with attack/defense/hp types multiplied by
    /// `1 + 0.1 * upgrade_level` and floored per entry.
    pub fn effective_bonuses(&self) -> impl Iterator<Item = Bonus> + '_ {
        let base = self.template().map(|t| t.bonuses).unwrap_or(&[]);
        let factor = 1.0 + UPGRADE_BONUS_PER_LEVEL * self.upgrade_level as f64;
        base.iter()
            .chain(self.extra_bonuses.iter())
            .map(move |b| {
                if b.kind.scales_with_upgrade() {
                    Bonus::new(b.kind, (b.value as f64 * factor).floor() as u32)
                } else {
                    *b
                }
            })
    }

    pub fn bonus_total(&self, kind: BonusType) -> u32 {
        self.effective_bonuses()
            .filter(|b| b.kind == kind)
            .map(|b| b.value)
            .sum()
    }
}
