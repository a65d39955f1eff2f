//! Non-player agents: creatures, NPCs and totems.

pub mod ai;
pub mod spawn;
pub mod types;
pub mod waves;

pub use ai::*;
pub use spawn::*;
pub use types::*;
pub use waves::*;
