use crate::core::events::TextColor;

/// How the incoming number should be read by the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageKind {
    /// Basic attack. `power` is relative to [`BASIC_ATTACK_POWER_UNIT`],
    /// so the raw damage is `attack * power / 20`.
    ///
    /// [`BASIC_ATTACK_POWER_UNIT`]: crate::core::constants::BASIC_ATTACK_POWER_UNIT
    BasicAttack { power: f64 },
    /// Already final before crit and variance, as skill damage is.
    Precomputed { amount: u32 },
}

/// One damage application against one actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRequest {
    pub kind: DamageKind,
    /// Unit vector pushing the target away from the player.
    pub knockback: Option<(f64, f64)>,
    pub finisher: bool,
}

impl DamageRequest {
    pub fn basic(power: f64, knockback: Option<(f64, f64)>, finisher: bool) -> Self {
        Self {
            kind: DamageKind::BasicAttack { power },
            knockback,
            finisher,
        }
    }

    pub fn skill(amount: u32, knockback: Option<(f64, f64)>) -> Self {
        Self {
            kind: DamageKind::Precomputed { amount },
            knockback,
            finisher: false,
        }
    }
}

/// Result of a damage roll, after crit, variance and target defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    pub amount: u32,
    pub crit: bool,
}

impl DamageRoll {
    pub fn color(&self) -> TextColor {
        if self.crit {
            TextColor::Yellow
        } else {
            TextColor::White
        }
    }
}
