//! The per-frame simulation step.
//!
//! [`tick`] advances the world by a variable `delta` (seconds): clock,
//! cooldowns and buffs, mana regeneration, drop despawn, movement, the
//! basic-attack hit window, creature AI and corpse cleanup. It returns a
//! [`TickResult`] so the host can render feedback and persist without the
//! core knowing about either.

use super::constants::*;
use super::events::{TextColor, WorldEvent};
use super::geometry::{direction, in_cone};
use super::world::{Interaction, World};
use crate::actors::{update_ai, AiState};
use crate::combat::{basic_attack_power, is_finisher, DamageRequest, HitWindow};
use crate::content::enemy_template;
use crate::loot::purge_expired;
use crate::skills::{tick_buffs, tick_cooldowns};
use rand::Rng;

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Events produced during this tick (and any queued by actions since
    /// the last drain), in chronological order.
    pub events: Vec<WorldEvent>,

    /// Damage the player took this tick, after defense.
    pub damage_taken: u32,

    /// True once the player is defeated. The world stays frozen until
    /// [`World::reset`].
    pub player_defeated: bool,

    /// True if something worth persisting happened (a kill, a pickup,
    /// a refinement, a quest turn-in). The host is responsible for the IO.
    pub save_requested: bool,
}

/// Advances `world` by `delta` seconds.
pub fn tick<R: Rng>(world: &mut World, delta: f64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    let delta = delta.max(0.0);

    if world.player.defeated {
        result.player_defeated = true;
        result.events = world.drain_events();
        result.save_requested = world.take_save_request();
        return result;
    }

    // ── 1. World clock ──────────────────────────────────────────
    world.elapsed += delta;
    world.game_time = (world.game_time + delta * world.config.game_hours_per_second).rem_euclid(HOURS_PER_DAY);

    // ── 2. Cooldowns and buffs ──────────────────────────────────
    tick_cooldowns(&mut world.player.skills, delta);
    let expired = tick_buffs(&mut world.player.buffs, delta);
    if expired > 0 {
        tracing::debug!(expired, "buffs expired");
    }

    // ── 3. Mana regeneration and vitals ─────────────────────────
    world.player.restore_mp(world.config.mp_regen_per_second * delta);
    world.player.clamp_vitals();

    // ── 4. Drop despawn ─────────────────────────────────────────
    purge_expired(&mut world.drops, world.elapsed);

    // ── 5. Movement ─────────────────────────────────────────────
    if !world.combo.swinging {
        if let Some((dx, dz)) = world.movement.direction() {
            let step = world.player.derived().speed * delta;
            world.player.position.translate(dx * step, dz * step);
            world.player.heading = dx.atan2(dz);
        }
    }

    // ── 6. Basic attack hit window ──────────────────────────────
    let attack_speed = world.player.derived().attack_speed;
    if let Some(window) = world.combo.advance(delta, attack_speed) {
        resolve_swing(world, window, rng);
    }

    // ── 7. Creature AI ──────────────────────────────────────────
    let player_position = world.player.position;
    let mut incoming = 0u32;
    for actor in world.actors.iter_mut() {
        if !actor.is_alive() {
            actor.state_timer += delta;
            continue;
        }
        if !actor.is_hostile() {
            continue;
        }
        let Some(template) = enemy_template(&actor.template_id) else {
            tracing::warn!(template = %actor.template_id, "unknown enemy template");
            continue;
        };
        if let Some(attack) = update_ai(actor, template, &player_position, delta) {
            incoming = incoming.saturating_add(attack.damage);
        }
    }

    if incoming > 0 {
        let dealt = world.player.take_damage(incoming);
        result.damage_taken = dealt;
        world.events.push(WorldEvent::PlayerDamaged { amount: dealt });
        world.float_text(player_position, dealt.to_string(), TextColor::Red);

        if world.player.defeated {
            tracing::info!(character = %world.player.character_id, "player defeated");
            world.events.push(WorldEvent::PlayerDefeated);
            world.notify("System", "You have been defeated.");
            world.combo.reset();
            world.movement = Default::default();
            world.interaction = Interaction::None;
        }
    }

    // ── 8. Corpse removal ───────────────────────────────────────
    let linger = world.config.corpse_linger_seconds;
    world
        .actors
        .retain(|a| a.state != AiState::Dead || a.state_timer < linger);

    result.player_defeated = world.player.defeated;
    result.events = world.drain_events();
    result.save_requested = world.take_save_request();
    result
}

/// Lands the current swing on every target in its cone not already hit by
/// this swing.
fn resolve_swing<R: Rng>(world: &mut World, window: HitWindow, rng: &mut R) {
    let origin = world.player.position;
    let heading = world.player.heading;
    let profile = window.profile;

    let targets: Vec<_> = world
        .actors
        .iter()
        .filter(|a| a.is_targetable() && in_cone(&origin, heading, &a.position, profile.range, profile.angle))
        .map(|a| (a.id, direction(&origin, &a.position)))
        .collect();

    let power = basic_attack_power(window.step);
    let finisher = is_finisher(window.step);
    for (id, knockback) in targets {
        if world.combo.mark_hit(id) {
            world.damage_actor(id, DamageRequest::basic(power, knockback, finisher), rng);
        }
    }
}
