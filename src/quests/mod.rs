//! Kill-count quests and the NPC dialogue selector.

pub mod logic;
pub mod types;

pub use types::*;
