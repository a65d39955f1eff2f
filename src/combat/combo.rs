//! Four-step basic attack combo.

use crate::core::constants::COMBO_STEPS;
use crate::core::error::ActionError;
use std::collections::BTreeSet;
use std::f64::consts::PI;

/// Timing and reach of one combo step. Times are in swing-seconds, which
/// run at `attack_speed` times real time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    pub duration: f64,
    pub hit_start: f64,
    pub hit_end: f64,
    pub range: f64,
    pub angle: f64,
}

pub const ATTACK_PROFILES: [AttackProfile; COMBO_STEPS] = [
    AttackProfile {
        duration: 0.5,
        hit_start: 0.15,
        hit_end: 0.35,
        range: 3.5,
        angle: PI / 2.0,
    },
    AttackProfile {
        duration: 0.5,
        hit_start: 0.15,
        hit_end: 0.35,
        range: 3.5,
        angle: PI / 2.0,
    },
    AttackProfile {
        duration: 0.6,
        hit_start: 0.2,
        hit_end: 0.4,
        range: 3.5,
        angle: PI / 3.0,
    },
    // Finisher
    AttackProfile {
        duration: 0.8,
        hit_start: 0.25,
        hit_end: 0.5,
        range: 4.0,
        angle: PI / 4.0,
    },
];

pub fn is_finisher(step: usize) -> bool {
    step == COMBO_STEPS - 1
}

/// The part of a swing that can land hits this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitWindow {
    pub step: usize,
    pub profile: AttackProfile,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComboState {
    pub step: usize,
    pub swinging: bool,
    /// Swing time elapsed in the current swing
    pub timer: f64,
    /// Real seconds since the last swing ended
    pub idle_time: f64,
    hit: BTreeSet<u64>,
}

impl ComboState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a swing. The combo restarts at step 0 if the last swing ended
    /// more than `reset_after` seconds ago.
    pub fn start(&mut self, reset_after: f64) -> Result<usize, ActionError> {
        if self.swinging {
            return Err(ActionError::AlreadyAttacking);
        }
        if self.idle_time > reset_after {
            self.step = 0;
        }
        self.swinging = true;
        self.timer = 0.0;
        self.hit.clear();
        Ok(self.step)
    }

    pub fn profile(&self) -> &'static AttackProfile {
        &ATTACK_PROFILES[self.step % COMBO_STEPS]
    }

    /// Advances the swing. Returns the hit window if the swing is inside it
    /// after advancing. A swing that reaches its duration ends and moves the
    /// combo to the next step.
    pub fn advance(&mut self, delta: f64, attack_speed: f64) -> Option<HitWindow> {
        if !self.swinging {
            self.idle_time += delta;
            return None;
        }

        let step = self.step;
        let profile = *self.profile();
        self.timer += delta * attack_speed;

        let window = (self.timer >= profile.hit_start && self.timer <= profile.hit_end)
            .then_some(HitWindow { step, profile });

        if self.timer >= profile.duration {
            self.swinging = false;
            self.idle_time = 0.0;
            self.step = (self.step + 1) % COMBO_STEPS;
        }

        window
    }

    /// Records a hit on `actor_id`. Returns `false` if it was already hit
    /// during this swing.
    pub fn mark_hit(&mut self, actor_id: u64) -> bool {
        self.hit.insert(actor_id)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
