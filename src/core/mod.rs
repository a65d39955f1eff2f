//! World state, player actions and the simulation tick.

pub mod actions;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod geometry;
pub mod resolve;
pub mod tick;
pub mod world;

pub use actions::{NearbyAction, SkillOutcome};
pub use config::WorldConfig;
pub use error::{ActionError, SaveError, SaveResult};
pub use events::{TextColor, WorldEvent};
pub use geometry::Position;
pub use tick::{tick, TickResult};
pub use world::{Interaction, MoveIntent, World};
