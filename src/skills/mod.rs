//! Skill engine: activation, buffs and cooldowns.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
