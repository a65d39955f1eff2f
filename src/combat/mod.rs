//! Damage resolution and the basic attack combo.

pub mod combo;
pub mod logic;
pub mod types;

pub use combo::*;
pub use logic::*;
pub use types::*;
