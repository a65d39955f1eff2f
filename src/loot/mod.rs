//! Loot tables rolled into world drops.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
