//! Character attributes, stats, progression and persistence.

pub mod attributes;
pub mod derived_stats;
pub mod player;
pub mod progression;
pub mod save;

pub use attributes::*;
pub use derived_stats::*;
pub use player::*;
pub use progression::*;
pub use save::*;
