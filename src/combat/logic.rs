use super::types::{DamageKind, DamageRoll};
use crate::core::constants::*;
use rand::Rng;

/// Power of a basic attack at a combo step: `20 * (1 + 0.2 * step)`.
pub fn basic_attack_power(step: usize) -> f64 {
    BASIC_ATTACK_POWER_UNIT * (1.0 + COMBO_POWER_STEP * step as f64)
}

/// Rolls the damage one hit deals to a target of `target_level`.
///
/// Crit multiplies by 1.5, then a uniform ±5% variance is applied and
/// floored, then `2 * target_level` is subtracted. Never below 1.
pub fn roll_damage<R: Rng>(
    kind: DamageKind,
    attack: u32,
    crit_chance: f64,
    target_level: u32,
    rng: &mut R,
) -> DamageRoll {
    let mut damage = match kind {
        DamageKind::Precomputed { amount } => amount as f64,
        DamageKind::BasicAttack { power } => attack as f64 * (power / BASIC_ATTACK_POWER_UNIT),
    };

    let crit = rng.gen::<f64>() < crit_chance;
    if crit {
        damage *= CRIT_MULTIPLIER;
    }

    let variance = DAMAGE_VARIANCE_MIN + rng.gen::<f64>() * DAMAGE_VARIANCE_SPAN;
    let damage = (damage * variance).floor().max(0.0) as u32;

    let defense = target_level * DEFENSE_PER_TARGET_LEVEL;
    DamageRoll {
        amount: damage.saturating_sub(defense).max(MIN_DAMAGE),
        crit,
    }
}

/// Knockback distance for a hit.
pub fn knockback_distance(finisher: bool) -> f64 {
    if finisher {
        KNOCKBACK_FINISHER
    } else {
        KNOCKBACK_NORMAL
    }
}
