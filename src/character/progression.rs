//! Experience curve, level-ups, stat and skill points.

use crate::core::constants::{
    LEVEL_UP_SKILL_POINTS, LEVEL_UP_STAT_POINTS, MAX_PLAYER_LEVEL, XP_CURVE_BASE, XP_CURVE_GROWTH,
};
use serde::{Deserialize, Serialize};

/// XP needed to advance from `level` to `level + 1`: `floor(300 * 1.5^(L-1))`.
pub fn xp_for_next_level(level: u32) -> u64 {
    let exponent = level.saturating_sub(1) as i32;
    (XP_CURVE_BASE * XP_CURVE_GROWTH.powi(exponent)).floor() as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub xp: u64,
    pub stat_points: u32,
    pub skill_points: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

impl Progression {
    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            stat_points: 0,
            skill_points: 0,
        }
    }

    pub fn xp_to_next(&self) -> u64 {
        xp_for_next_level(self.level)
    }

    /// Adds experience and applies every level-up it pays for.
    /// Returns the number of levels gained.
    pub fn gain_xp(&mut self, amount: u64) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let mut levelups = 0;

        while self.level < MAX_PLAYER_LEVEL {
            let needed = xp_for_next_level(self.level);
            if self.xp < needed {
                break;
            }
            self.xp -= needed;
            self.level += 1;
            self.stat_points += LEVEL_UP_STAT_POINTS;
            self.skill_points += LEVEL_UP_SKILL_POINTS;
            levelups += 1;
        }

        levelups
    }
}
