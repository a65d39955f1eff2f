//! World configuration.

use super::constants::*;
use crate::items::PlayerClass;
use serde::{Deserialize, Serialize};

/// Tunables for a world. The defaults reproduce the stock game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Name given to a fresh character
    pub player_name: String,

    /// Class of a fresh character
    pub player_class: PlayerClass,

    /// Inventory layout
    pub inventory_pages: usize,
    pub slots_per_page: usize,

    /// Radius for picking up drops and talking to NPCs
    pub interact_radius: f64,

    /// Seconds a dead creature stays in the actor list before removal
    pub corpse_linger_seconds: f64,

    /// Mana regenerated per second
    pub mp_regen_per_second: f64,

    /// In-game hours advanced per real second
    pub game_hours_per_second: f64,

    /// Seconds between swings after which the combo restarts at step 0
    pub combo_reset_seconds: f64,

    /// Whether to place the village NPCs
    pub spawn_npcs: bool,

    /// Whether to scatter totems
    pub spawn_totems: bool,

    /// Whether to fill the mob zones
    pub spawn_mobs: bool,

    /// Whether a new character receives the starting weapon and potions
    pub starting_kit: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            player_name: PLAYER_DEFAULT_NAME.to_string(),
            player_class: PlayerClass::Warrior,
            inventory_pages: INVENTORY_PAGES,
            slots_per_page: SLOTS_PER_PAGE,
            interact_radius: INTERACT_RADIUS,
            corpse_linger_seconds: CORPSE_LINGER_SECONDS,
            mp_regen_per_second: MP_REGEN_PER_SECOND,
            game_hours_per_second: GAME_HOURS_PER_SECOND,
            combo_reset_seconds: COMBO_RESET_SECONDS,
            spawn_npcs: true,
            spawn_totems: true,
            spawn_mobs: true,
            starting_kit: true,
        }
    }
}

impl WorldConfig {
    /// An empty world: no population and no starting kit. Handy for tests
    /// that place actors by hand.
    pub fn empty() -> Self {
        Self {
            spawn_npcs: false,
            spawn_totems: false,
            spawn_mobs: false,
            starting_kit: false,
            ..Default::default()
        }
    }

    /// Only the village NPCs.
    pub fn village_only() -> Self {
        Self {
            spawn_npcs: true,
            ..Self::empty()
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
