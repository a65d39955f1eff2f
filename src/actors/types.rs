use crate::content::npcs::NpcRole;
use crate::core::geometry::Position;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    Chasing,
    Attacking,
    Returning,
    Dead,
}

/// Variant-specific payload of an [`Actor`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActorKind {
    /// Roaming creature driven by the AI state machine.
    Hostile,
    /// Village NPC. Never takes damage and never runs AI.
    Friendly {
        role: NpcRole,
        shop_id: Option<String>,
    },
    /// Stationary stone that summons waves as it loses health.
    Totem { triggered_waves: BTreeSet<u32> },
}

/// Any non-player agent in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: u64,
    pub template_id: String,
    pub name: String,
    pub kind: ActorKind,
    pub position: Position,
    pub spawn_origin: Position,
    pub heading: f64,
    pub hp: u32,
    pub max_hp: u32,
    pub level: u32,
    pub state: AiState,
    pub state_timer: f64,
    pub attack_timer: f64,
    pub aggroed: bool,
}

impl Actor {
    pub fn is_alive(&self) -> bool {
        self.state != AiState::Dead
    }

    pub fn is_hostile(&self) -> bool {
        matches!(self.kind, ActorKind::Hostile)
    }

    pub fn is_totem(&self) -> bool {
        matches!(self.kind, ActorKind::Totem { .. })
    }

    pub fn is_friendly(&self) -> bool {
        matches!(self.kind, ActorKind::Friendly { .. })
    }

    /// Alive and something the player can damage.
    pub fn is_targetable(&self) -> bool {
        self.is_alive() && !self.is_friendly()
    }

    pub fn hp_percent(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f64 * 100.0 / self.max_hp as f64
    }

    /// Subtracts damage, saturating at zero. Returns `true` on the killing blow.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.hp = self.hp.saturating_sub(amount);
        if self.hp == 0 {
            self.state = AiState::Dead;
            self.state_timer = 0.0;
            self.aggroed = false;
            return true;
        }
        false
    }
}
