//! The world aggregate.
//!
//! [`World`] owns every piece of mutable simulation state. The host creates
//! one, drives it with [`tick`](super::tick::tick) once per frame and calls
//! the action methods (see `actions.rs`) from its input handling. Nothing is
//! global: two worlds never share state.

use super::config::WorldConfig;
use super::constants::*;
use super::error::ActionError;
use super::events::{TextColor, WorldEvent};
use super::geometry::Position;
use crate::actors::{populate, Actor};
use crate::character::{Player, SaveData};
use crate::combat::ComboState;
use crate::content::npcs::npc_definition;
use crate::content::quests::quest_for_level;
use crate::items::{create_item, EquipmentSlot, ItemIdAllocator};
use crate::loot::Drop;
use crate::quests::DialogueContext;
use rand::Rng;

/// What the player is currently talking to, if anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Interaction {
    #[default]
    None,
    Dialogue(DialogueContext),
    Shop {
        npc_id: u64,
        shop_id: String,
    },
    /// `selected` is the instance id of the item on the anvil.
    Refinement {
        selected: Option<u64>,
    },
}

impl Interaction {
    pub fn is_open(&self) -> bool {
        !matches!(self, Interaction::None)
    }
}

/// Held movement keys plus the camera yaw they are relative to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub camera_yaw: f64,
}

impl MoveIntent {
    /// Walk straight along `yaw`.
    pub fn towards(yaw: f64) -> Self {
        Self {
            forward: true,
            camera_yaw: yaw,
            ..Self::default()
        }
    }

    /// Normalized ground direction of the held keys, `None` when they cancel
    /// out or nothing is held.
    pub fn direction(&self) -> Option<(f64, f64)> {
        let (fx, fz) = super::geometry::forward(self.camera_yaw);
        let (rx, rz) = (-fz, fx);
        let mut dx = 0.0;
        let mut dz = 0.0;
        if self.forward {
            dx += fx;
            dz += fz;
        }
        if self.back {
            dx -= fx;
            dz -= fz;
        }
        if self.right {
            dx += rx;
            dz += rz;
        }
        if self.left {
            dx -= rx;
            dz -= rz;
        }
        let len = (dx * dx + dz * dz).sqrt();
        if len < 1e-9 {
            return None;
        }
        Some((dx / len, dz / len))
    }
}

#[derive(Debug, Clone)]
pub struct World {
    pub config: WorldConfig,
    pub player: Player,
    pub actors: Vec<Actor>,
    pub drops: Vec<Drop>,
    pub combo: ComboState,
    pub interaction: Interaction,
    pub movement: MoveIntent,
    /// In-game hour of day, `0.0..24.0`
    pub game_time: f64,
    /// Simulated seconds since the world was created or reset
    pub elapsed: f64,
    pub(crate) next_actor_id: u64,
    pub(crate) next_drop_id: u64,
    pub(crate) item_ids: ItemIdAllocator,
    pub(crate) events: Vec<WorldEvent>,
    pub(crate) save_requested: bool,
}

impl World {
    /// A fresh character in a freshly populated world.
    pub fn new<R: Rng>(config: WorldConfig, rng: &mut R) -> Self {
        let mut world = Self::blank(config);
        world.start_fresh(rng);
        world
    }

    /// Restores a saved character. Actors are not persisted, so the
    /// population is seeded again from the spawn tables.
    pub fn from_save<R: Rng>(config: WorldConfig, data: &SaveData, rng: &mut R) -> Self {
        let mut world = Self::blank(config);
        world.player = data.restore_player(&world.config);
        world.game_time = data.game_time.rem_euclid(HOURS_PER_DAY);
        world.item_ids = ItemIdAllocator::starting_at(data.next_item_id);
        world.actors = populate(&world.config, rng, &mut world.next_actor_id);
        tracing::info!(
            character = %world.player.character_id,
            level = world.player.level(),
            "loaded character"
        );
        world.events.push(WorldEvent::system("Game Loaded."));
        world
    }

    pub fn to_save(&self) -> SaveData {
        SaveData::capture(&self.player, self.game_time, self.item_ids.peek())
    }

    /// Throws the current character away and starts over. This is the only
    /// way out of the defeated state.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        tracing::info!(character = %self.player.character_id, "resetting world");
        self.start_fresh(rng);
    }

    fn blank(config: WorldConfig) -> Self {
        let player = Player::new(&config);
        Self {
            config,
            player,
            actors: Vec::new(),
            drops: Vec::new(),
            combo: ComboState::new(),
            interaction: Interaction::None,
            movement: MoveIntent::default(),
            game_time: START_GAME_TIME_HOURS,
            elapsed: 0.0,
            next_actor_id: 1,
            next_drop_id: 1,
            item_ids: ItemIdAllocator::starting_at(1),
            events: Vec::new(),
            save_requested: false,
        }
    }

    fn start_fresh<R: Rng>(&mut self, rng: &mut R) {
        self.player = Player::new(&self.config);
        self.drops.clear();
        self.combo.reset();
        self.interaction = Interaction::None;
        self.movement = MoveIntent::default();
        self.game_time = START_GAME_TIME_HOURS;
        self.elapsed = 0.0;
        self.next_actor_id = 1;
        self.next_drop_id = 1;
        self.item_ids = ItemIdAllocator::starting_at(1);
        self.events.clear();
        self.save_requested = false;

        if self.config.starting_kit {
            self.give_starting_kit();
        }
        self.actors = populate(&self.config, rng, &mut self.next_actor_id);
        self.notify(
            "Quest",
            "Go talk to the City Guard to receive your first mission.",
        );
    }

    fn give_starting_kit(&mut self) {
        match create_item(STARTING_WEAPON, 1, &mut self.item_ids) {
            Some(weapon) => {
                self.player.equipment.replace(EquipmentSlot::Weapon, weapon);
            }
            None => tracing::warn!(item = STARTING_WEAPON, "unknown starting weapon"),
        }
        match create_item(STARTING_POTION, STARTING_POTIONS, &mut self.item_ids) {
            Some(potions) => {
                if self.player.inventory.add(potions).is_err() {
                    tracing::warn!("no room for starting potions");
                }
            }
            None => tracing::warn!(item = STARTING_POTION, "unknown starting potion"),
        }
        self.player.clamp_vitals();
    }

    // ── Events ──────────────────────────────────────────────────

    pub fn events(&self) -> &[WorldEvent] {
        &self.events
    }

    /// Hands the queued events to the caller and clears the queue.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn notify(&mut self, sender: &str, message: impl Into<String>) {
        self.events.push(WorldEvent::from_npc(sender, message));
    }

    pub fn notify_rejection(&mut self, sender: &str, err: &ActionError) {
        tracing::debug!(%err, "action rejected");
        self.notify(sender, err.to_string());
    }

    pub(crate) fn float_text(&mut self, position: Position, text: impl Into<String>, color: TextColor) {
        self.events.push(WorldEvent::FloatingText {
            position,
            text: text.into(),
            color,
        });
    }

    pub(crate) fn request_save(&mut self) {
        self.save_requested = true;
    }

    /// Returns whether an autosave was asked for since the last call.
    pub fn take_save_request(&mut self) -> bool {
        std::mem::take(&mut self.save_requested)
    }

    /// Runs an action body and reports its rejection as a System notification.
    pub(crate) fn checked<T>(
        &mut self,
        action: impl FnOnce(&mut World) -> Result<T, ActionError>,
    ) -> Result<T, ActionError> {
        self.checked_from("System", action)
    }

    /// Like [`checked`](Self::checked), with a custom notification sender.
    /// Defeated players cannot act at all.
    pub(crate) fn checked_from<T>(
        &mut self,
        sender: &str,
        action: impl FnOnce(&mut World) -> Result<T, ActionError>,
    ) -> Result<T, ActionError> {
        let result = if self.player.defeated {
            Err(ActionError::PlayerDefeated)
        } else {
            action(self)
        };
        if let Err(err) = &result {
            self.notify_rejection(sender, err);
        }
        result
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn actor(&self, id: u64) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: u64) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub(crate) fn actor_index(&self, id: u64) -> Option<usize> {
        self.actors.iter().position(|a| a.id == id)
    }

    pub fn is_defeated(&self) -> bool {
        self.player.defeated
    }

    /// Nearest drop within `radius` of the player.
    pub fn nearest_drop(&self, radius: f64) -> Option<u64> {
        let origin = self.player.position;
        self.drops
            .iter()
            .map(|d| (d.id, origin.flat_distance(&d.position)))
            .filter(|(_, dist)| *dist <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Nearest friendly NPC within `radius` of the player.
    pub fn nearest_npc(&self, radius: f64) -> Option<u64> {
        self.nearest_actor(radius, Actor::is_friendly)
    }

    /// Nearest living hostile or totem within `radius` of the player.
    pub fn nearest_target(&self, radius: f64) -> Option<u64> {
        self.nearest_actor(radius, Actor::is_targetable)
    }

    fn nearest_actor(&self, radius: f64, filter: impl Fn(&Actor) -> bool) -> Option<u64> {
        let origin = self.player.position;
        self.actors
            .iter()
            .filter(|a| filter(a))
            .map(|a| (a.id, origin.flat_distance(&a.position)))
            .filter(|(_, dist)| *dist <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Identity and quest stage of a friendly NPC, for an external dialogue
    /// writer. `None` for anything that is not a friendly actor.
    pub fn dialogue_for(&self, actor_id: u64) -> Option<DialogueContext> {
        let actor = self.actor(actor_id).filter(|a| a.is_friendly())?;
        Some(DialogueContext {
            npc_id: actor.template_id.clone(),
            npc_name: actor.name.clone(),
            stage: self
                .player
                .quests
                .dialogue_stage(&actor.template_id, self.player.level()),
        })
    }

    // ── Progression ─────────────────────────────────────────────

    /// Adds experience, announcing each level reached and the quest it
    /// unlocks.
    pub(crate) fn grant_xp(&mut self, amount: u64) {
        let before = self.player.level();
        let gained = self.player.progression.gain_xp(amount);
        for level in (before + 1)..=(before + gained) {
            tracing::info!(level, "level up");
            self.events.push(WorldEvent::LevelUp { level });
            self.notify("System", format!("Level Up! You are now level {level}."));
            if let Some(quest) = quest_for_level(level) {
                let giver = npc_definition(&quest.npc_id)
                    .map(|npc| npc.name)
                    .unwrap_or("village");
                self.notify(
                    "Quest",
                    format!("New Quest Available: {}. Visit the {}.", quest.title, giver),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_new_world_has_starting_kit_and_population() {
        let world = World::new(WorldConfig::default(), &mut rng());
        let weapon = world.player.equipment.get(EquipmentSlot::Weapon).unwrap();
        assert_eq!(weapon.template_id, "sword_1");
        assert_eq!(world.player.inventory.count_of("potion_red"), 10);
        assert_eq!(world.actors.iter().filter(|a| a.is_friendly()).count(), 11);
        assert_eq!(world.actors.iter().filter(|a| a.is_totem()).count(), 8);
        assert_eq!(world.actors.iter().filter(|a| a.is_hostile()).count(), 70);
    }

    #[test]
    fn test_new_world_points_to_city_guard() {
        let world = World::new(WorldConfig::empty(), &mut rng());
        assert!(world.events().iter().any(|e| matches!(
            e,
            WorldEvent::Notification { sender, message }
                if sender == "Quest" && message.contains("City Guard")
        )));
    }

    #[test]
    fn test_actor_ids_unique() {
        let world = World::new(WorldConfig::default(), &mut rng());
        let mut ids: Vec<u64> = world.actors.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), world.actors.len());
    }

    #[test]
    fn test_move_intent_direction() {
        let intent = MoveIntent::towards(0.0);
        let (dx, dz) = intent.direction().unwrap();
        assert!(dx.abs() < 1e-9 && (dz - 1.0).abs() < 1e-9);

        let cancel = MoveIntent {
            forward: true,
            back: true,
            ..MoveIntent::default()
        };
        assert!(cancel.direction().is_none());

        let diagonal = MoveIntent {
            forward: true,
            right: true,
            ..MoveIntent::default()
        };
        let (dx, dz) = diagonal.direction().unwrap();
        assert!(((dx * dx + dz * dz).sqrt() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_grant_xp_announces_each_level() {
        let mut world = World::new(WorldConfig::empty(), &mut rng());
        world.drain_events();
        world.grant_xp(300 + 450);
        let levels: Vec<u32> = world
            .events()
            .iter()
            .filter_map(|e| match e {
                WorldEvent::LevelUp { level } => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(levels, vec![2, 3]);
        assert!(world.events().iter().any(|e| matches!(
            e,
            WorldEvent::Notification { message, .. } if message.starts_with("New Quest Available:")
        )));
    }

    #[test]
    fn test_dialogue_for_hostile_is_none() {
        let world = World::new(WorldConfig::default(), &mut rng());
        let hostile = world.actors.iter().find(|a| a.is_hostile()).unwrap();
        assert!(world.dialogue_for(hostile.id).is_none());
    }

    #[test]
    fn test_save_roundtrip_through_world() {
        let mut world = World::new(WorldConfig::empty(), &mut rng());
        world.player.yang = 1234;
        world.game_time = 20.5;
        let data = world.to_save();
        let restored = World::from_save(WorldConfig::empty(), &data, &mut rng());
        assert_eq!(restored.player.yang, 1234);
        assert_eq!(restored.game_time, 20.5);
        assert_eq!(restored.player.inventory, world.player.inventory);
        assert_eq!(restored.item_ids.peek(), world.item_ids.peek());
    }
}
