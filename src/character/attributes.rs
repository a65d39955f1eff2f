use crate::core::constants::PLAYER_START_STAT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatKind {
    Str,
    Vit,
    Dex,
    Int,
}

impl StatKind {
    pub fn all() -> [StatKind; 4] {
        [StatKind::Str, StatKind::Vit, StatKind::Dex, StatKind::Int]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            StatKind::Str => "STR",
            StatKind::Vit => "VIT",
            StatKind::Dex => "DEX",
            StatKind::Int => "INT",
        }
    }
}

/// Raw allocatable stats. Only grow through spent stat points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    pub str: u32,
    pub vit: u32,
    pub dex: u32,
    pub int: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStats {
    pub fn new() -> Self {
        Self {
            str: PLAYER_START_STAT,
            vit: PLAYER_START_STAT,
            dex: PLAYER_START_STAT,
            int: PLAYER_START_STAT,
        }
    }

    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Str => self.str,
            StatKind::Vit => self.vit,
            StatKind::Dex => self.dex,
            StatKind::Int => self.int,
        }
    }

    pub fn add(&mut self, kind: StatKind, amount: u32) {
        match kind {
            StatKind::Str => self.str += amount,
            StatKind::Vit => self.vit += amount,
            StatKind::Dex => self.dex += amount,
            StatKind::Int => self.int += amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_start_at_five() {
        let stats = PlayerStats::new();
        for kind in StatKind::all() {
            assert_eq!(stats.get(kind), 5);
        }
    }

    #[test]
    fn test_add() {
        let mut stats = PlayerStats::new();
        stats.add(StatKind::Dex, 3);
        assert_eq!(stats.dex, 8);
        assert_eq!(stats.str, 5);
    }
}
