use super::attributes::PlayerStats;
use crate::core::constants::*;
use crate::items::{BonusType, Equipment};
use crate::skills::types::{ActiveBuff, StatModifiers};

/// Combat numbers derived from stats, gear and buffs. Never stored; always
/// recomputed so it cannot drift from its sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub magic: u32,
    pub speed: f64,
    pub attack_speed: f64,
    pub crit_chance: f64,
    pub evasion: f64,
}

impl DerivedStats {
    /// Stats with no gear and no buffs.
    pub fn from_stats(level: u32, stats: &PlayerStats) -> Self {
        Self::calculate_derived_stats(level, stats, &Equipment::new(), &[])
    }

    /// Calculates derived stats from level, raw stats, equipment bonuses and active buffs.
    ///
    /// Raw-stat bonuses on gear are added before the formulas run. Attack,
    /// defense and hp bonuses are already upgrade-scaled by the item.
    pub fn calculate_derived_stats(
        level: u32,
        stats: &PlayerStats,
        equipment: &Equipment,
        buffs: &[ActiveBuff],
    ) -> Self {
        let gear = |kind: BonusType| -> u32 {
            equipment
                .iter_equipped()
                .map(|item| item.bonus_total(kind))
                .sum()
        };

        let str_total = stats.str + gear(BonusType::Str);
        let vit_total = stats.vit + gear(BonusType::Vit);
        let dex_total = stats.dex + gear(BonusType::Dex);
        let int_total = stats.int + gear(BonusType::Int);

        let buff = buffs
            .iter()
            .fold(StatModifiers::default(), |acc, b| acc.combine(&b.modifiers));

        let max_hp = BASE_MAX_HP
            + level * MAX_HP_PER_LEVEL
            + vit_total * MAX_HP_PER_VIT
            + gear(BonusType::MaxHp)
            + buff.max_hp;
        let max_mp = BASE_MAX_MP + level * MAX_MP_PER_LEVEL + int_total * MAX_MP_PER_INT;
        let attack = level * 2 + str_total * 3 + dex_total + gear(BonusType::Attack) + buff.attack;
        let defense = vit_total * 2 + dex_total / 3 + gear(BonusType::Defense) + buff.defense;
        let magic = level * 5 + int_total * 4 + gear(BonusType::SkillAttack) + buff.magic;
        let speed = BASE_MOVE_SPEED
            + dex_total as f64 * 0.1
            + gear(BonusType::MoveSpeed) as f64
            + buff.speed;
        let attack_speed = 1.0
            + dex_total as f64 * 0.01
            + gear(BonusType::AttackSpeed) as f64 / 100.0
            + buff.attack_speed;
        let crit_chance =
            BASE_CRIT_CHANCE + dex_total as f64 * 0.005 + gear(BonusType::CritChance) as f64 / 100.0;
        let evasion = dex_total as f64 * 0.2;

        Self {
            max_hp,
            max_mp,
            attack,
            defense,
            magic,
            speed,
            attack_speed,
            crit_chance,
            evasion,
        }
    }
}
