//! Player actions.
//!
//! Every action is synchronous and either succeeds or is rejected with an
//! [`ActionError`]. A rejection leaves the world as it was and queues a
//! notification carrying the error text.

use super::constants::*;
use super::error::ActionError;
use super::events::{TextColor, WorldEvent};
use super::geometry::direction;
use super::world::{Interaction, MoveIntent, World};
use crate::actors::ActorKind;
use crate::character::StatKind;
use crate::combat::{DamageRequest, DamageRoll};
use crate::content::npcs::{shop_definition, NpcRole};
use crate::content::skills::SkillShape;
use crate::items::{create_item, EquipmentSlot, ItemEffect, SlotRef};
use crate::loot::{Drop, DropContents};
use crate::quests::TurnInReward;
use crate::refinement::{attempt_refinement, RefinementOutcome};
use crate::skills::{self, apply_buff, build_buff, commit_cast, prepare_cast, shape_contains};
use rand::Rng;

/// Potions the quick-use key reaches for, in order.
const QUICK_POTIONS: [&str; 2] = ["potion_red", "potion_red_m"];

/// What [`World::interact_nearby`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NearbyAction {
    PickedUp(u64),
    Interacted(u64),
}

/// A successful skill activation.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillOutcome {
    pub skill_id: &'static str,
    /// Actors hit and what each hit rolled
    pub hits: Vec<(u64, DamageRoll)>,
    pub buffed: bool,
}

impl World {
    // ── Movement and combat ─────────────────────────────────────

    /// Replaces the held movement keys. Consumed every tick until changed.
    pub fn set_movement(&mut self, intent: MoveIntent) {
        self.movement = intent;
    }

    /// Turns the player in place.
    pub fn face(&mut self, heading: f64) {
        if !self.player.defeated {
            self.player.heading = heading;
        }
    }

    /// Starts the next swing of the combo and lunges forward. Returns the
    /// combo step of the new swing.
    pub fn start_attack(&mut self) -> Result<usize, ActionError> {
        self.checked(|w| {
            let step = w.combo.start(w.config.combo_reset_seconds)?;
            w.player.position = w.player.position.offset(w.player.heading, ATTACK_LUNGE_DISTANCE);
            Ok(step)
        })
    }

    pub fn activate_skill<R: Rng>(&mut self, slot: usize, rng: &mut R) -> Result<SkillOutcome, ActionError> {
        self.checked(|w| {
            let cast = prepare_cast(&w.player, slot)?;
            commit_cast(&mut w.player, &cast);
            let def = cast.definition;
            let mut outcome = SkillOutcome {
                skill_id: def.id,
                hits: Vec::new(),
                buffed: false,
            };

            match def.shape {
                SkillShape::Buff => {
                    if let Some(buff) = build_buff(def, cast.level, &w.player.stats) {
                        apply_buff(&mut w.player.buffs, buff);
                        outcome.buffed = true;
                    }
                    w.float_text(w.player.position, def.name, TextColor::Yellow);
                }
                shape => {
                    let origin = w.player.position;
                    let heading = w.player.heading;
                    // Snapshot first: hits may append wave spawns.
                    let targets: Vec<_> = w
                        .actors
                        .iter()
                        .filter(|a| a.is_targetable() && shape_contains(shape, &origin, heading, &a.position))
                        .map(|a| (a.id, direction(&origin, &a.position)))
                        .collect();
                    for (id, knockback) in targets {
                        if let Some(roll) = w.damage_actor(id, DamageRequest::skill(cast.damage, knockback), rng) {
                            outcome.hits.push((id, roll));
                        }
                    }
                }
            }

            tracing::debug!(
                skill = def.id,
                level = cast.level,
                hits = outcome.hits.len(),
                "skill cast"
            );
            Ok(outcome)
        })
    }

    pub fn level_up_skill(&mut self, slot: usize) -> Result<u8, ActionError> {
        self.checked(|w| skills::level_up_skill(&mut w.player, slot))
    }

    pub fn increase_stat(&mut self, kind: StatKind) -> Result<(), ActionError> {
        self.checked(|w| w.player.increase_stat(kind))
    }

    // ── Interaction ─────────────────────────────────────────────

    /// Talks to a friendly actor: merchants open their shop, the blacksmith
    /// opens refinement, everyone else opens dialogue.
    pub fn interact(&mut self, actor_id: u64) -> Result<Interaction, ActionError> {
        self.checked(|w| w.open_interaction(actor_id))
    }

    /// Picks up the nearest drop in reach, or failing that talks to the
    /// nearest NPC in reach. A drop that does not fit never blocks the NPC.
    pub fn interact_nearby(&mut self) -> Result<NearbyAction, ActionError> {
        self.checked(|w| {
            let radius = w.config.interact_radius;
            let mut pickup_err = None;
            if let Some(drop_id) = w.nearest_drop(radius) {
                match w.take_drop(drop_id) {
                    Ok(()) => return Ok(NearbyAction::PickedUp(drop_id)),
                    Err(err) => pickup_err = Some(err),
                }
            }
            if let Some(npc_id) = w.nearest_npc(radius) {
                w.open_interaction(npc_id)?;
                return Ok(NearbyAction::Interacted(npc_id));
            }
            Err(pickup_err.unwrap_or(ActionError::NoTarget))
        })
    }

    pub fn close_interaction(&mut self) {
        self.interaction = Interaction::None;
    }

    fn open_interaction(&mut self, actor_id: u64) -> Result<Interaction, ActionError> {
        let actor = self.actor(actor_id).ok_or(ActionError::NoTarget)?;
        let ActorKind::Friendly { role, shop_id } = &actor.kind else {
            return Err(ActionError::NoTarget);
        };

        let interaction = match (role, shop_id) {
            (_, Some(shop_id)) => Interaction::Shop {
                npc_id: actor_id,
                shop_id: shop_id.clone(),
            },
            (NpcRole::Blacksmith, None) => Interaction::Refinement { selected: None },
            _ => Interaction::Dialogue(self.dialogue_for(actor_id).ok_or(ActionError::NoTarget)?),
        };

        if matches!(interaction, Interaction::Refinement { .. }) {
            self.notify("Blacksmith", "Show me the item you want to improve.");
        }
        self.interaction = interaction.clone();
        Ok(interaction)
    }

    // ── Drops ───────────────────────────────────────────────────

    pub fn pickup_drop(&mut self, drop_id: u64) -> Result<(), ActionError> {
        self.checked(|w| w.take_drop(drop_id))
    }

    /// Picks up every drop in reach that fits. Returns how many were taken.
    pub fn pickup_nearby(&mut self) -> Result<usize, ActionError> {
        self.checked(|w| {
            let origin = w.player.position;
            let radius = w.config.interact_radius;
            let in_reach: Vec<u64> = w
                .drops
                .iter()
                .filter(|d| origin.flat_distance(&d.position) <= radius)
                .map(|d| d.id)
                .collect();
            if in_reach.is_empty() {
                return Err(ActionError::NoTarget);
            }

            let mut taken = 0;
            let mut last_err = None;
            for id in in_reach {
                match w.take_drop(id) {
                    Ok(()) => taken += 1,
                    Err(err) => last_err = Some(err),
                }
            }
            match (taken, last_err) {
                (0, Some(err)) => Err(err),
                _ => Ok(taken),
            }
        })
    }

    fn take_drop(&mut self, drop_id: u64) -> Result<(), ActionError> {
        let index = self
            .drops
            .iter()
            .position(|d| d.id == drop_id)
            .ok_or(ActionError::NoTarget)?;
        let drop = self.drops.remove(index);
        let position = drop.position;

        match drop.contents {
            DropContents::Yang(amount) => {
                self.player.yang = self.player.yang.saturating_add(amount);
                self.float_text(position, format!("+{amount} Yang"), TextColor::Gold);
            }
            DropContents::Item(item) => {
                let name = item.name();
                if let Err(item) = self.player.inventory.add(item) {
                    self.drops.insert(
                        index,
                        Drop {
                            contents: DropContents::Item(item),
                            ..drop
                        },
                    );
                    return Err(ActionError::InventoryFull);
                }
                self.float_text(position, name, TextColor::Green);
            }
        }

        self.request_save();
        Ok(())
    }

    // ── Shops ───────────────────────────────────────────────────

    /// Buys one `template_id` from the open shop at its listed `price`.
    pub fn buy(&mut self, template_id: &str, price: u64) -> Result<(), ActionError> {
        self.checked(|w| {
            let Interaction::Shop { shop_id, .. } = &w.interaction else {
                return Err(ActionError::NotInteracting);
            };
            let shop = shop_definition(shop_id).ok_or_else(|| ActionError::unknown("shop", shop_id.clone()))?;
            if shop.price_of(template_id) != Some(price) {
                return Err(ActionError::NotForSale);
            }
            if w.player.yang < price {
                return Err(ActionError::InsufficientYang);
            }

            let mut ids = w.item_ids;
            let item = create_item(template_id, 1, &mut ids)
                .ok_or_else(|| ActionError::unknown("item", template_id))?;
            let name = item.name();
            w.player
                .inventory
                .add(item)
                .map_err(|_| ActionError::InventoryFull)?;

            w.item_ids = ids;
            w.player.yang -= price;
            w.notify("System", format!("Bought {name}."));
            Ok(())
        })
    }

    /// Sells the whole stack at `at` to the open shop for a flat price.
    pub fn sell(&mut self, at: SlotRef) -> Result<u64, ActionError> {
        self.checked(|w| {
            let Interaction::Shop { shop_id, .. } = &w.interaction else {
                return Err(ActionError::NotInteracting);
            };
            let shop = shop_definition(shop_id).ok_or_else(|| ActionError::unknown("shop", shop_id.clone()))?;
            if !shop.allow_sell {
                return Err(ActionError::NotInteracting);
            }
            let item = w.player.inventory.take(at).ok_or(ActionError::EmptySlot)?;
            w.player.yang = w.player.yang.saturating_add(SELL_PRICE);
            w.notify("System", format!("Sold {} for {} Yang.", item.name(), SELL_PRICE));
            Ok(SELL_PRICE)
        })
    }

    // ── Inventory and equipment ─────────────────────────────────

    /// Equips the item at `at`. Whatever was worn in that slot moves into
    /// the inventory slot the new item left.
    pub fn equip(&mut self, at: SlotRef) -> Result<EquipmentSlot, ActionError> {
        self.checked(|w| w.equip_from(at))
    }

    fn equip_from(&mut self, at: SlotRef) -> Result<EquipmentSlot, ActionError> {
        let item = self.player.inventory.get(at).ok_or(ActionError::EmptySlot)?;
        let template = item
            .template()
            .ok_or_else(|| ActionError::unknown("item", item.template_id.clone()))?;
        let slot = EquipmentSlot::for_category(template.category).ok_or(ActionError::CannotUse)?;
        if template.required_level > self.player.level() {
            return Err(ActionError::LevelTooLow {
                required: template.required_level,
            });
        }
        if !template.allows_class(self.player.class) {
            return Err(ActionError::WrongClass {
                class: self.player.class.to_string(),
            });
        }

        let item = self.player.inventory.take(at).ok_or(ActionError::EmptySlot)?;
        if let Some(previous) = self.player.equipment.replace(slot, item) {
            let placed = self.player.inventory.place(at, previous);
            debug_assert!(placed.is_ok(), "vacated slot must take the swapped item");
        }
        self.player.clamp_vitals();
        Ok(slot)
    }

    /// Moves the item in `slot` back to the inventory. Fails when there is
    /// no room, leaving it equipped.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Result<(), ActionError> {
        self.checked(|w| {
            let item = w.player.equipment.take(slot).ok_or(ActionError::EmptySlot)?;
            if let Err(item) = w.player.inventory.add(item) {
                w.player.equipment.replace(slot, item);
                return Err(ActionError::InventoryFull);
            }
            w.player.clamp_vitals();
            Ok(())
        })
    }

    pub fn move_item(&mut self, from: SlotRef, to: SlotRef) -> Result<(), ActionError> {
        self.checked(|w| w.player.inventory.move_item(from, to))
    }

    /// Moves `amount` off the stack at `at` into the first empty slot.
    pub fn split_stack(&mut self, at: SlotRef, amount: u32) -> Result<SlotRef, ActionError> {
        self.checked(|w| {
            let mut ids = w.item_ids;
            let target = w.player.inventory.split(at, amount, ids.next_id())?;
            w.item_ids = ids;
            Ok(target)
        })
    }

    /// Uses the item at `at`: potions restore, skill books grant a skill
    /// point, gear is equipped.
    pub fn use_item(&mut self, at: SlotRef) -> Result<(), ActionError> {
        self.checked(|w| w.use_item_at(at))
    }

    /// Drinks the first healing potion in the inventory.
    pub fn use_potion(&mut self) -> Result<(), ActionError> {
        self.checked(|w| {
            let at = QUICK_POTIONS
                .iter()
                .find_map(|id| w.player.inventory.find_template(id))
                .ok_or(ActionError::NoPotions)?;
            w.use_item_at(at)
        })
    }

    fn use_item_at(&mut self, at: SlotRef) -> Result<(), ActionError> {
        let item = self.player.inventory.get(at).ok_or(ActionError::EmptySlot)?;
        let template = item
            .template()
            .ok_or_else(|| ActionError::unknown("item", item.template_id.clone()))?;

        match template.effect {
            ItemEffect::RestoreHp(amount) => {
                self.player.heal(amount);
                self.float_text(self.player.position, format!("+{amount}"), TextColor::Red);
            }
            ItemEffect::RestoreMp(amount) => {
                self.player.restore_mp(amount as f64);
                self.float_text(self.player.position, format!("+{amount}"), TextColor::White);
            }
            ItemEffect::SkillBook => {
                self.player.progression.skill_points += 1;
                self.notify("System", format!("You studied {}. +1 skill point.", template.name));
            }
            ItemEffect::None => {
                if EquipmentSlot::for_category(template.category).is_some() {
                    return self.equip_from(at).map(|_| ());
                }
                return Err(ActionError::CannotUse);
            }
        }

        self.player.inventory.consume_one(at);
        Ok(())
    }

    // ── Quests ──────────────────────────────────────────────────

    pub fn accept_quest(&mut self, quest_id: &str) -> Result<(), ActionError> {
        self.checked(|w| {
            let level = w.player.level();
            w.player.quests.accept(quest_id, level)?;
            tracing::info!(quest = quest_id, "quest accepted");
            w.notify("Quest", "New Quest Accepted!");
            if matches!(w.interaction, Interaction::Dialogue(_)) {
                w.interaction = Interaction::None;
            }
            Ok(())
        })
    }

    /// Turns in the active quest and pays out its reward. A reward item that
    /// does not fit is dropped at the player's feet.
    pub fn complete_quest(&mut self) -> Result<TurnInReward, ActionError> {
        self.checked(|w| {
            let reward = w.player.quests.turn_in()?;
            tracing::info!(quest = %reward.quest_id, exp = reward.exp, yang = reward.yang, "quest completed");

            w.grant_xp(reward.exp);
            w.player.yang = w.player.yang.saturating_add(reward.yang);
            if let Some((item_id, quantity)) = &reward.item {
                match create_item(item_id, *quantity, &mut w.item_ids) {
                    Some(item) => {
                        if let Err(item) = w.player.inventory.add(item) {
                            w.drop_at_feet(item);
                            w.notify("System", "Inventory full. The reward was dropped at your feet.");
                        }
                    }
                    None => tracing::warn!(item = %item_id, "unknown quest reward item"),
                }
            }

            w.events.push(WorldEvent::QuestCompleted {
                quest_id: reward.quest_id.clone(),
            });
            w.notify("Quest", format!("Quest Completed: {}", reward.title));
            if matches!(w.interaction, Interaction::Dialogue(_)) {
                w.interaction = Interaction::None;
            }
            w.request_save();
            Ok(reward)
        })
    }

    fn drop_at_feet(&mut self, item: crate::items::ItemInstance) {
        let id = self.next_drop_id;
        self.next_drop_id += 1;
        self.drops.push(Drop {
            id,
            position: self.player.position,
            contents: DropContents::Item(item),
            created_at: self.elapsed,
            despawn_at: self.elapsed + ITEM_DESPAWN_SECONDS,
        });
    }

    // ── Refinement ──────────────────────────────────────────────

    /// Puts the item at `at` on the blacksmith's anvil.
    pub fn select_refinement_item(&mut self, at: SlotRef) -> Result<(), ActionError> {
        self.checked_from("Blacksmith", |w| {
            if !matches!(w.interaction, Interaction::Refinement { .. }) {
                return Err(ActionError::NotInteracting);
            }
            let item = w.player.inventory.get(at).ok_or(ActionError::EmptySlot)?;
            w.interaction = Interaction::Refinement {
                selected: Some(item.instance_id),
            };
            Ok(())
        })
    }

    /// Attempts to refine the selected item. Either outcome closes the
    /// blacksmith window and requests an autosave.
    pub fn refine<R: Rng>(&mut self, rng: &mut R) -> Result<RefinementOutcome, ActionError> {
        self.checked_from("Blacksmith", |w| {
            let Interaction::Refinement { selected } = &w.interaction else {
                return Err(ActionError::NotInteracting);
            };
            let at = selected
                .and_then(|id| w.player.inventory.find_instance(id))
                .ok_or(ActionError::EmptySlot)?;
            let player = &mut w.player;
            let outcome = attempt_refinement(&mut player.inventory, &mut player.yang, at, rng)?;

            w.notify("Blacksmith", outcome.message());
            let (text, color) = if outcome.succeeded() {
                ("Success!", TextColor::Green)
            } else {
                ("Failed...", TextColor::Red)
            };
            w.float_text(w.player.position, text, color);
            w.interaction = Interaction::None;
            w.request_save();
            Ok(outcome)
        })
    }
}
