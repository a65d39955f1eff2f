//! Events the simulation hands to the presentation layer.
//!
//! The core never touches rendering. Damage numbers, notifications and
//! other ephemeral feedback are queued here and drained by the host.

use super::geometry::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    Yellow,
    Red,
    Green,
    Gold,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    // ── Feedback ────────────────────────────────────────────────
    /// A number or short label floating above the world.
    FloatingText {
        position: Position,
        text: String,
        color: TextColor,
    },

    /// A chat-log style message to the player.
    Notification { sender: String, message: String },

    // ── Combat ──────────────────────────────────────────────────
    ActorDamaged {
        actor_id: u64,
        amount: u32,
        crit: bool,
    },

    ActorKilled {
        actor_id: u64,
        template_id: String,
        xp: u64,
    },

    PlayerDamaged { amount: u32 },

    PlayerDefeated,

    WaveSpawned {
        totem_id: u64,
        wave_index: u32,
        count: u32,
    },

    // ── Progression ─────────────────────────────────────────────
    LevelUp { level: u32 },

    QuestObjectiveComplete { quest_id: String },

    QuestCompleted { quest_id: String },
}

impl WorldEvent {
    pub fn system(message: impl Into<String>) -> Self {
        WorldEvent::Notification {
            sender: "System".to_string(),
            message: message.into(),
        }
    }

    pub fn from_npc(sender: impl Into<String>, message: impl Into<String>) -> Self {
        WorldEvent::Notification {
            sender: sender.into(),
            message: message.into(),
        }
    }
}
