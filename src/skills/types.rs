use crate::content::skills::{skill_definition, SkillDefinition, DEFAULT_SKILL_SLOTS};
use crate::core::constants::SKILL_SLOT_COUNT;
use serde::{Deserialize, Serialize};

/// Flat stat deltas carried by a buff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatModifiers {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub magic: u32,
    pub speed: f64,
    pub attack_speed: f64,
}

impl StatModifiers {
    pub fn combine(&self, other: &StatModifiers) -> StatModifiers {
        StatModifiers {
            max_hp: self.max_hp + other.max_hp,
            attack: self.attack + other.attack,
            defense: self.defense + other.defense,
            magic: self.magic + other.magic,
            speed: self.speed + other.speed,
            attack_speed: self.attack_speed + other.attack_speed,
        }
    }
}

/// A timed modifier. Dropped once `remaining` reaches zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveBuff {
    pub skill_id: String,
    pub remaining: f64,
    pub modifiers: StatModifiers,
}

/// Player progress on one skill. Level 0 means unlearned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillState {
    pub skill_id: String,
    pub level: u8,
    pub cooldown: f64,
}

impl SkillState {
    pub fn new(skill_id: impl Into<String>) -> Self {
        Self {
            skill_id: skill_id.into(),
            level: 0,
            cooldown: 0.0,
        }
    }

    pub fn definition(&self) -> Option<&'static SkillDefinition> {
        skill_definition(&self.skill_id)
    }

    pub fn is_learned(&self) -> bool {
        self.level > 0
    }
}

/// The quick-slot bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBar {
    pub slots: Vec<Option<SkillState>>,
}

impl Default for SkillBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillBar {
    pub fn new() -> Self {
        let mut slots: Vec<Option<SkillState>> = DEFAULT_SKILL_SLOTS
            .iter()
            .map(|id| Some(SkillState::new(*id)))
            .collect();
        slots.resize(SKILL_SLOT_COUNT, None);
        Self { slots }
    }

    pub fn slot(&self, index: usize) -> Option<&SkillState> {
        self.slots.get(index)?.as_ref()
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut SkillState> {
        self.slots.get_mut(index)?.as_mut()
    }

    pub fn find_mut(&mut self, skill_id: &str) -> Option<&mut SkillState> {
        self.slots
            .iter_mut()
            .flatten()
            .find(|s| s.skill_id == skill_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillState> {
        self.slots.iter().flatten()
    }
}
