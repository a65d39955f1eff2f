//! The player's mutable state.

use super::attributes::{PlayerStats, StatKind};
use super::derived_stats::DerivedStats;
use super::progression::Progression;
use crate::core::config::WorldConfig;
use crate::core::constants::*;
use crate::core::error::ActionError;
use crate::core::geometry::Position;
use crate::items::{Equipment, Inventory, PlayerClass};
use crate::quests::QuestLog;
use crate::skills::types::{ActiveBuff, SkillBar};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub character_id: String,
    pub name: String,
    pub class: PlayerClass,
    pub hp: u32,
    pub mp: f64,
    pub position: Position,
    pub heading: f64,
    pub stats: PlayerStats,
    pub progression: Progression,
    pub yang: u64,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub skills: SkillBar,
    pub buffs: Vec<ActiveBuff>,
    pub quests: QuestLog,
    pub defeated: bool,
}

impl Player {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            character_id: uuid::Uuid::new_v4().to_string(),
            name: config.player_name.clone(),
            class: config.player_class,
            hp: PLAYER_START_HP,
            mp: PLAYER_START_MP as f64,
            position: Position::ORIGIN,
            heading: 0.0,
            stats: PlayerStats::new(),
            progression: Progression::new(),
            yang: 0,
            inventory: Inventory::new(config.inventory_pages, config.slots_per_page),
            equipment: Equipment::new(),
            skills: SkillBar::new(),
            buffs: Vec::new(),
            quests: QuestLog::default(),
            defeated: false,
        }
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn derived(&self) -> DerivedStats {
        DerivedStats::calculate_derived_stats(
            self.progression.level,
            &self.stats,
            &self.equipment,
            &self.buffs,
        )
    }

    /// Keeps hp and mp inside the current derived maxima.
    pub fn clamp_vitals(&mut self) {
        let derived = self.derived();
        self.hp = self.hp.min(derived.max_hp);
        self.mp = self.mp.clamp(0.0, derived.max_mp as f64);
    }

    pub fn heal(&mut self, amount: u32) {
        let max = self.derived().max_hp;
        self.hp = self.hp.saturating_add(amount).min(max);
    }

    pub fn restore_mp(&mut self, amount: f64) {
        let max = self.derived().max_mp as f64;
        self.mp = (self.mp + amount).min(max);
    }

    /// Applies incoming raw damage through the player's defense.
    /// Returns the damage actually dealt.
    pub fn take_damage(&mut self, raw: u32) -> u32 {
        let dealt = raw.saturating_sub(self.derived().defense).max(MIN_DAMAGE);
        self.hp = self.hp.saturating_sub(dealt);
        if self.hp == 0 {
            self.defeated = true;
        }
        dealt
    }

    pub fn increase_stat(&mut self, kind: StatKind) -> Result<(), ActionError> {
        if self.progression.stat_points == 0 {
            return Err(ActionError::NoStatPoints);
        }
        self.progression.stat_points -= 1;
        self.stats.add(kind, 1);
        Ok(())
    }
}
