//! Metin - a headless action-RPG world simulation.
//!
//! The crate owns game rules and state only. A host (renderer, bot or test)
//! creates a [`core::World`], feeds it player actions and calls
//! [`core::tick`] once per frame, then drains the returned events.

pub mod actors;
pub mod build_info;
pub mod character;
pub mod combat;
pub mod content;
pub mod core;
pub mod items;
pub mod loot;
pub mod quests;
pub mod refinement;
pub mod skills;
