//! Damage resolution against actors and everything a hit can set off:
//! totem waves, kills, experience, quest progress and loot.

use super::constants::DEFAULT_KILL_XP;
use super::events::{TextColor, WorldEvent};
use super::geometry::Position;
use super::world::World;
use crate::actors::{due_waves, ring_positions, spawn_aggroed};
use crate::combat::{knockback_distance, roll_damage, DamageRequest, DamageRoll};
use crate::content::enemies::{enemy_template, totem_template, WaveConfig};
use crate::content::loot_table;
use crate::loot::{roll_loot, LootIds};
use rand::Rng;

/// What a dead actor leaves behind.
struct Kill {
    actor_id: u64,
    template_id: String,
    position: Position,
    xp: u64,
    loot_table: Option<&'static str>,
}

impl World {
    /// Applies one hit to actor `actor_id`.
    ///
    /// Returns `None` when the actor is missing, dead or friendly. Actors
    /// spawned by totem waves are appended to the actor list after the hit
    /// has been applied, so callers holding indices stay valid.
    pub fn damage_actor<R: Rng>(
        &mut self,
        actor_id: u64,
        request: DamageRequest,
        rng: &mut R,
    ) -> Option<DamageRoll> {
        let index = self.actor_index(actor_id)?;
        if !self.actors[index].is_targetable() {
            return None;
        }

        let derived = self.player.derived();
        let roll = roll_damage(
            request.kind,
            derived.attack,
            derived.crit_chance,
            self.actors[index].level,
            rng,
        );

        let actor = &mut self.actors[index];
        let killed = actor.apply_damage(roll.amount);

        let mut waves: Vec<&'static WaveConfig> = Vec::new();
        if actor.is_totem() {
            match totem_template(&actor.template_id) {
                Some(template) => waves = due_waves(actor, template),
                None => tracing::warn!(template = %actor.template_id, "unknown totem template"),
            }
        }

        if let (true, Some((dx, dz))) = (actor.is_hostile(), request.knockback) {
            let dist = knockback_distance(request.finisher);
            actor.position.translate(dx * dist, dz * dist);
        }

        let position = actor.position;
        let totem_id = actor.id;
        let kill = killed.then(|| Kill {
            actor_id: actor.id,
            template_id: actor.template_id.clone(),
            position,
            xp: kill_xp(&actor.template_id),
            loot_table: kill_loot_table(&actor.template_id),
        });

        self.float_text(position, roll.amount.to_string(), roll.color());
        self.events.push(WorldEvent::ActorDamaged {
            actor_id,
            amount: roll.amount,
            crit: roll.crit,
        });

        for wave in waves {
            self.spawn_wave(totem_id, position, wave);
        }
        if let Some(kill) = kill {
            self.handle_kill(kill, rng);
        }

        Some(roll)
    }

    fn spawn_wave(&mut self, totem_id: u64, center: Position, wave: &WaveConfig) {
        let Some(template) = enemy_template(wave.spawn_template) else {
            tracing::warn!(template = wave.spawn_template, "unknown wave spawn template");
            return;
        };
        tracing::debug!(
            totem_id,
            wave = wave.wave_index,
            count = wave.count,
            "totem wave triggered"
        );
        for position in ring_positions(&center, wave.count, wave.spawn_radius) {
            let id = self.next_actor_id;
            self.next_actor_id += 1;
            self.actors.push(spawn_aggroed(id, template, position));
        }
        self.events.push(WorldEvent::WaveSpawned {
            totem_id,
            wave_index: wave.wave_index,
            count: wave.count,
        });
        self.notify("System", "The Metin Stone summons reinforcements!");
    }

    fn handle_kill<R: Rng>(&mut self, kill: Kill, rng: &mut R) {
        tracing::debug!(actor_id = kill.actor_id, template = %kill.template_id, "actor killed");
        self.events.push(WorldEvent::ActorKilled {
            actor_id: kill.actor_id,
            template_id: kill.template_id.clone(),
            xp: kill.xp,
        });
        self.grant_xp(kill.xp);

        if self.player.quests.record_kill(&kill.template_id) {
            if let Some(quest) = self.player.quests.active_definition() {
                self.events.push(WorldEvent::QuestObjectiveComplete {
                    quest_id: quest.id.clone(),
                });
            }
            self.notify("System", "Quest Objective Complete! Return to NPC.");
            self.float_text(self.player.position, "Quest Done!", TextColor::Gold);
        }

        if let Some(table_id) = kill.loot_table {
            match loot_table(table_id) {
                Some(table) => {
                    let mut ids = LootIds {
                        drops: &mut self.next_drop_id,
                        items: &mut self.item_ids,
                    };
                    let drops = roll_loot(table, &kill.position, self.elapsed, &mut ids, rng);
                    self.drops.extend(drops);
                }
                None => tracing::warn!(table = table_id, "unknown loot table"),
            }
        }

        self.request_save();
    }
}

fn kill_xp(template_id: &str) -> u64 {
    enemy_template(template_id)
        .map(|t| t.exp_reward)
        .or_else(|| totem_template(template_id).map(|t| t.exp_reward))
        .unwrap_or(DEFAULT_KILL_XP)
}

fn kill_loot_table(template_id: &str) -> Option<&'static str> {
    enemy_template(template_id)
        .and_then(|t| t.loot_table)
        .or_else(|| totem_template(template_id).map(|t| t.loot_table))
}
