//! Actor construction and the initial world population.

use super::types::{Actor, ActorKind, AiState};
use crate::content::enemies::{
    enemy_template, totem_template, EnemyTemplate, TotemTemplate, DEFAULT_TOTEM, MOB_ZONES,
};
use crate::content::npcs::{NpcDefinition, NPCS};
use crate::core::config::WorldConfig;
use crate::core::constants::*;
use crate::core::geometry::Position;
use rand::Rng;
use std::collections::BTreeSet;

pub fn spawn_hostile(id: u64, template: &EnemyTemplate, position: Position) -> Actor {
    Actor {
        id,
        template_id: template.id.to_string(),
        name: template.name.to_string(),
        kind: ActorKind::Hostile,
        position,
        spawn_origin: position,
        heading: 0.0,
        hp: template.max_hp,
        max_hp: template.max_hp,
        level: SPAWNED_MOB_LEVEL,
        state: AiState::Idle,
        state_timer: 0.0,
        attack_timer: 0.0,
        aggroed: false,
    }
}

/// A hostile that starts out chasing the player, as wave spawns do.
pub fn spawn_aggroed(id: u64, template: &EnemyTemplate, position: Position) -> Actor {
    Actor {
        state: AiState::Chasing,
        aggroed: true,
        ..spawn_hostile(id, template, position)
    }
}

pub fn spawn_totem(id: u64, template: &TotemTemplate, position: Position) -> Actor {
    Actor {
        id,
        template_id: template.id.to_string(),
        name: template.name.to_string(),
        kind: ActorKind::Totem {
            triggered_waves: BTreeSet::new(),
        },
        position,
        spawn_origin: position,
        heading: 0.0,
        hp: template.max_hp,
        max_hp: template.max_hp,
        level: template.level,
        state: AiState::Idle,
        state_timer: 0.0,
        attack_timer: 0.0,
        aggroed: false,
    }
}

pub fn spawn_npc(id: u64, def: &NpcDefinition) -> Actor {
    Actor {
        id,
        template_id: def.id.to_string(),
        name: def.name.to_string(),
        kind: ActorKind::Friendly {
            role: def.role,
            shop_id: def.shop_id.map(str::to_string),
        },
        position: def.position,
        spawn_origin: def.position,
        heading: def.heading,
        hp: NPC_HP,
        max_hp: NPC_HP,
        level: NPC_LEVEL,
        state: AiState::Idle,
        state_timer: 0.0,
        attack_timer: 0.0,
        aggroed: false,
    }
}

/// `count` points evenly spaced on a circle of `radius` around `center`.
pub fn ring_positions(center: &Position, count: u32, radius: f64) -> Vec<Position> {
    (0..count)
        .map(|i| {
            let angle = FULL_CIRCLE * i as f64 / count as f64;
            center.offset(angle, radius)
        })
        .collect()
}

/// Uniform angle, uniform distance in `[min, max)` from the origin.
pub fn random_position<R: Rng>(rng: &mut R, min_distance: f64, max_distance: f64) -> Position {
    let angle = rng.gen::<f64>() * FULL_CIRCLE;
    let dist = min_distance + rng.gen::<f64>() * (max_distance - min_distance);
    Position::ORIGIN.offset(angle, dist)
}

/// Builds the static population: NPCs, totems, then the mob zones.
/// Ids are handed out from `next_id`.
pub fn populate<R: Rng>(config: &WorldConfig, rng: &mut R, next_id: &mut u64) -> Vec<Actor> {
    let mut actors = Vec::new();
    let mut take_id = || {
        let id = *next_id;
        *next_id += 1;
        id
    };

    if config.spawn_npcs {
        for def in NPCS {
            actors.push(spawn_npc(take_id(), def));
        }
    }

    if config.spawn_totems {
        match totem_template(DEFAULT_TOTEM) {
            Some(template) => {
                for _ in 0..TOTEM_COUNT {
                    let pos = random_position(rng, TOTEM_MIN_DISTANCE, TOTEM_MAX_DISTANCE);
                    actors.push(spawn_totem(take_id(), template, pos));
                }
            }
            None => tracing::warn!(totem = DEFAULT_TOTEM, "unknown totem template"),
        }
    }

    if config.spawn_mobs {
        for zone in MOB_ZONES {
            let Some(template) = enemy_template(zone.template_id) else {
                tracing::warn!(template = zone.template_id, "unknown enemy template in mob zone");
                continue;
            };
            for _ in 0..zone.count {
                let pos = random_position(rng, zone.min_distance, zone.max_distance);
                let mut actor = spawn_hostile(take_id(), template, pos);
                actor.heading = rng.gen::<f64>() * FULL_CIRCLE;
                actors.push(actor);
            }
        }
    }

    tracing::debug!(count = actors.len(), "population seeded");
    actors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_full_population_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut next_id = 1;
        let actors = populate(&WorldConfig::default(), &mut rng, &mut next_id);

        let npcs = actors.iter().filter(|a| a.is_friendly()).count();
        let totems = actors.iter().filter(|a| a.is_totem()).count();
        let hostiles = actors.iter().filter(|a| a.is_hostile()).count();
        assert_eq!(npcs, NPCS.len());
        assert_eq!(totems, TOTEM_COUNT);
        assert_eq!(hostiles, 70);
        assert_eq!(next_id, actors.len() as u64 + 1);
    }

    #[test]
    fn test_mob_zone_distances() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut next_id = 1;
        let cfg = WorldConfig {
            spawn_npcs: false,
            spawn_totems: false,
            ..WorldConfig::default()
        };
        for actor in populate(&cfg, &mut rng, &mut next_id) {
            let zone = MOB_ZONES
                .iter()
                .find(|z| z.template_id == actor.template_id)
                .unwrap();
            let d = actor.position.flat_distance(&Position::ORIGIN);
            assert!(d >= zone.min_distance - 1e-9 && d <= zone.max_distance + 1e-9);
            assert_eq!(actor.position, actor.spawn_origin);
            assert_eq!(actor.state, AiState::Idle);
        }
    }

    #[test]
    fn test_empty_config_spawns_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut next_id = 1;
        assert!(populate(&WorldConfig::empty(), &mut rng, &mut next_id).is_empty());
    }

    #[test]
    fn test_ring_positions_evenly_spaced() {
        let center = Position::new(10.0, 10.0);
        let ring = ring_positions(&center, 4, 3.0);
        assert_eq!(ring.len(), 4);
        assert!((ring[0].x - 10.0).abs() < 1e-9 && (ring[0].z - 13.0).abs() < 1e-9);
        assert!((ring[1].x - 13.0).abs() < 1e-9 && (ring[1].z - 10.0).abs() < 1e-9);
        for p in &ring {
            assert!((center.flat_distance(p) - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_npcs_are_sturdy() {
        let npc = spawn_npc(1, &NPCS[0]);
        assert_eq!(npc.hp, 9999);
        assert_eq!(npc.level, 99);
        assert!(!npc.is_targetable());
    }
}
