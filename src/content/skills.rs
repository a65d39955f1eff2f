//! Skill definitions and their per-level tables.

use crate::character::attributes::StatKind;
use crate::core::constants::MAX_SKILL_LEVEL;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillShape {
    Cone { range: f64, angle: f64 },
    Circle { radius: f64 },
    Buff,
}

/// Values for one skill level, indexed `level - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillLevel {
    pub multiplier: f64,
    pub cooldown_reduction: f64,
    pub cost: u32,
}

/// Linear growth used to build the 20-level table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelCurve {
    pub multiplier_base: f64,
    pub multiplier_step: f64,
    pub cooldown_reduction_step: f64,
    pub cost_base: u32,
    pub cost_step: u32,
}

/// Attack buff granted by a buff-shaped skill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuffCurve {
    pub base_duration: f64,
    pub duration_per_level: f64,
    pub attack_base: f64,
    pub attack_per_level: f64,
    pub attack_per_stat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub shape: SkillShape,
    pub base_cooldown: f64,
    pub scaling: StatKind,
    pub base_power: u32,
    pub curve: LevelCurve,
    pub buff: Option<BuffCurve>,
}

impl SkillDefinition {
    /// Level table entry. `None` outside `1..=20`.
    pub fn level(&self, level: u8) -> Option<SkillLevel> {
        if level == 0 || level > MAX_SKILL_LEVEL {
            return None;
        }
        let i = (level - 1) as f64;
        let c = &self.curve;
        Some(SkillLevel {
            multiplier: c.multiplier_base + c.multiplier_step * i,
            cooldown_reduction: c.cooldown_reduction_step * i,
            cost: c.cost_base + c.cost_step * (level as u32 - 1),
        })
    }

    pub fn table(&self) -> Vec<SkillLevel> {
        (1..=MAX_SKILL_LEVEL).filter_map(|l| self.level(l)).collect()
    }
}

pub static SKILLS: &[SkillDefinition] = &[
    SkillDefinition {
        id: "aura_sword",
        name: "Aura of Sword",
        shape: SkillShape::Buff,
        base_cooldown: 60.0,
        scaling: StatKind::Str,
        base_power: 10,
        curve: LevelCurve {
            multiplier_base: 1.5,
            multiplier_step: 0.2,
            cooldown_reduction_step: 0.5,
            cost_base: 20,
            cost_step: 5,
        },
        buff: Some(BuffCurve {
            base_duration: 30.0,
            duration_per_level: 2.0,
            attack_base: 30.0,
            attack_per_level: 5.0,
            attack_per_stat: 0.5,
        }),
    },
    SkillDefinition {
        id: "whirlwind",
        name: "Whirlwind",
        shape: SkillShape::Circle { radius: 3.5 },
        base_cooldown: 15.0,
        scaling: StatKind::Str,
        base_power: 50,
        curve: LevelCurve {
            multiplier_base: 2.0,
            multiplier_step: 0.1,
            cooldown_reduction_step: 0.2,
            cost_base: 30,
            cost_step: 2,
        },
        buff: None,
    },
    SkillDefinition {
        id: "dash",
        name: "Dash",
        shape: SkillShape::Cone {
            range: 6.0,
            angle: PI / 3.0,
        },
        base_cooldown: 12.0,
        scaling: StatKind::Dex,
        base_power: 60,
        curve: LevelCurve {
            multiplier_base: 2.5,
            multiplier_step: 0.15,
            cooldown_reduction_step: 0.1,
            cost_base: 25,
            cost_step: 2,
        },
        buff: None,
    },
    SkillDefinition {
        id: "sword_spin",
        name: "Sword Spin",
        shape: SkillShape::Cone {
            range: 4.0,
            angle: PI,
        },
        base_cooldown: 20.0,
        scaling: StatKind::Str,
        base_power: 100,
        curve: LevelCurve {
            multiplier_base: 3.0,
            multiplier_step: 0.2,
            cooldown_reduction_step: 0.3,
            cost_base: 50,
            cost_step: 5,
        },
        buff: None,
    },
];

/// Skills placed in the quick slots of a new character, in slot order.
pub const DEFAULT_SKILL_SLOTS: [&str; 4] = ["aura_sword", "whirlwind", "dash", "sword_spin"];

pub fn skill_definition(id: &str) -> Option<&'static SkillDefinition> {
    SKILLS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_twenty_levels() {
        for skill in SKILLS {
            assert_eq!(skill.table().len(), 20, "{}", skill.id);
        }
    }

    #[test]
    fn test_level_bounds() {
        let skill = skill_definition("whirlwind").unwrap();
        assert!(skill.level(0).is_none());
        assert!(skill.level(21).is_none());
        let first = skill.level(1).unwrap();
        assert_eq!(first.cost, 30);
        assert!((first.multiplier - 2.0).abs() < 1e-9);
        assert_eq!(first.cooldown_reduction, 0.0);
        let last = skill.level(20).unwrap();
        assert_eq!(last.cost, 30 + 2 * 19);
        assert!((last.multiplier - 3.9).abs() < 1e-9);
    }

    #[test]
    fn test_cooldown_never_negative_at_max() {
        for skill in SKILLS {
            let max = skill.level(MAX_SKILL_LEVEL).unwrap();
            assert!(skill.base_cooldown - max.cooldown_reduction > 0.0);
        }
    }
}
