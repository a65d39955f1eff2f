//! Skill activation, buffs and cooldown bookkeeping.

use super::types::{ActiveBuff, SkillBar, StatModifiers};
use crate::character::attributes::PlayerStats;
use crate::character::player::Player;
use crate::content::skills::{skill_definition, SkillDefinition, SkillLevel, SkillShape};
use crate::core::constants::MAX_SKILL_LEVEL;
use crate::core::error::ActionError;
use crate::core::geometry::{in_circle, in_cone, Position};

/// A validated activation, ready to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCast {
    pub slot: usize,
    pub definition: &'static SkillDefinition,
    pub level: u8,
    pub damage: u32,
    pub cost: u32,
    pub cooldown: f64,
}

/// `floor((base_power + 3 * stat + magic) * multiplier)`
pub fn skill_damage(def: &SkillDefinition, entry: &SkillLevel, stats: &PlayerStats, magic: u32) -> u32 {
    let base = def.base_power + 3 * stats.get(def.scaling) + magic;
    (base as f64 * entry.multiplier).floor() as u32
}

/// Checks every activation precondition without touching the player.
///
/// Rejections are checked in order: empty slot, unlearned, cooling down,
/// not enough mana.
pub fn prepare_cast(player: &Player, slot: usize) -> Result<SkillCast, ActionError> {
    let state = player.skills.slot(slot).ok_or(ActionError::SkillSlotEmpty)?;
    let def = state
        .definition()
        .ok_or_else(|| ActionError::unknown("skill", state.skill_id.clone()))?;
    let entry = def.level(state.level).ok_or(ActionError::SkillNotLearned)?;
    if state.cooldown > 0.0 {
        return Err(ActionError::SkillOnCooldown);
    }
    if entry.cost as f64 > player.mp {
        return Err(ActionError::NotEnoughMana);
    }

    let magic = player.derived().magic;
    Ok(SkillCast {
        slot,
        definition: def,
        level: state.level,
        damage: skill_damage(def, &entry, &player.stats, magic),
        cost: entry.cost,
        cooldown: (def.base_cooldown - entry.cooldown_reduction).max(0.0),
    })
}

/// Deducts the cost and starts the cooldown.
pub fn commit_cast(player: &mut Player, cast: &SkillCast) {
    player.mp = (player.mp - cast.cost as f64).max(0.0);
    if let Some(state) = player.skills.slot_mut(cast.slot) {
        state.cooldown = cast.cooldown;
    }
}

/// The buff a buff-shaped skill grants at `level`, if it grants one.
pub fn build_buff(def: &SkillDefinition, level: u8, stats: &PlayerStats) -> Option<ActiveBuff> {
    let curve = def.buff?;
    let lvl = level as f64;
    let stat_part = (curve.attack_per_stat * stats.get(def.scaling) as f64).floor();
    let attack = curve.attack_base + curve.attack_per_level * lvl + stat_part;
    Some(ActiveBuff {
        skill_id: def.id.to_string(),
        remaining: curve.base_duration + curve.duration_per_level * lvl,
        modifiers: StatModifiers {
            attack: attack.max(0.0) as u32,
            ..StatModifiers::default()
        },
    })
}

/// Adds a buff, replacing any buff from the same skill.
pub fn apply_buff(buffs: &mut Vec<ActiveBuff>, buff: ActiveBuff) {
    buffs.retain(|b| b.skill_id != buff.skill_id);
    buffs.push(buff);
}

/// Whether `target` falls inside a damaging skill's area.
pub fn shape_contains(shape: SkillShape, origin: &Position, heading: f64, target: &Position) -> bool {
    match shape {
        SkillShape::Cone { range, angle } => in_cone(origin, heading, target, range, angle),
        SkillShape::Circle { radius } => in_circle(origin, target, radius),
        SkillShape::Buff => false,
    }
}

pub fn tick_cooldowns(bar: &mut SkillBar, delta: f64) {
    for state in bar.slots.iter_mut().flatten() {
        state.cooldown = (state.cooldown - delta).max(0.0);
    }
}

/// Counts buffs down and drops the expired ones. Returns how many expired.
pub fn tick_buffs(buffs: &mut Vec<ActiveBuff>, delta: f64) -> usize {
    let before = buffs.len();
    for buff in buffs.iter_mut() {
        buff.remaining -= delta;
    }
    buffs.retain(|b| b.remaining > 0.0);
    before - buffs.len()
}

/// Spends a skill point on the skill in `slot`. Returns the new level.
pub fn level_up_skill(player: &mut Player, slot: usize) -> Result<u8, ActionError> {
    let points = player.progression.skill_points;
    let state = player.skills.slot_mut(slot).ok_or(ActionError::SkillSlotEmpty)?;
    if skill_definition(&state.skill_id).is_none() {
        return Err(ActionError::unknown("skill", state.skill_id.clone()));
    }
    if state.level >= MAX_SKILL_LEVEL {
        return Err(ActionError::SkillMaxLevel);
    }
    if points == 0 {
        return Err(ActionError::NoSkillPoints);
    }
    state.level += 1;
    let level = state.level;
    player.progression.skill_points -= 1;
    Ok(level)
}
