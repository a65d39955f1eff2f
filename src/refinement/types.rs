use crate::core::constants::MAX_UPGRADE_LEVEL;
use crate::items::ItemInstance;

/// Chance and price to go from `from_level` to `from_level + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefineStep {
    pub from_level: u8,
    pub success_chance: f64,
    pub cost: u64,
}

pub const REFINEMENT_TABLE: [RefineStep; MAX_UPGRADE_LEVEL as usize] = [
    RefineStep { from_level: 0, success_chance: 1.0, cost: 500 },
    RefineStep { from_level: 1, success_chance: 0.9, cost: 1_000 },
    RefineStep { from_level: 2, success_chance: 0.85, cost: 2_000 },
    RefineStep { from_level: 3, success_chance: 0.8, cost: 4_000 },
    RefineStep { from_level: 4, success_chance: 0.7, cost: 8_000 },
    RefineStep { from_level: 5, success_chance: 0.6, cost: 15_000 },
    RefineStep { from_level: 6, success_chance: 0.5, cost: 30_000 },
    RefineStep { from_level: 7, success_chance: 0.4, cost: 50_000 },
    RefineStep { from_level: 8, success_chance: 0.3, cost: 100_000 },
];

/// `None` once the item is at the maximum level.
pub fn refine_step(level: u8) -> Option<&'static RefineStep> {
    REFINEMENT_TABLE.get(level as usize)
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefinementOutcome {
    Upgraded { new_level: u8, cost: u64 },
    /// The roll failed and the item is gone.
    Destroyed { item: ItemInstance, cost: u64 },
}

impl RefinementOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RefinementOutcome::Upgraded { .. } => "Upgrade successful!",
            RefinementOutcome::Destroyed { .. } => "Upgrade failed. The item was destroyed.",
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, RefinementOutcome::Upgraded { .. })
    }
}
