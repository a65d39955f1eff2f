//! Blacksmith refinement: pay, roll, upgrade or lose the item.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
