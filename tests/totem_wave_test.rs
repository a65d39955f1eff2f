//! Metin stones: reinforcement waves, the killing blow and its reward.

use metin::actors::{ActorKind, AiState};
use metin::combat::DamageRequest;
use metin::core::{World, WorldConfig, WorldEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn totem_world() -> (World, ChaCha8Rng, u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let config = WorldConfig {
        spawn_totems: true,
        ..WorldConfig::empty()
    };
    let mut world = World::new(config, &mut rng);
    world.drain_events();
    let totem_id = world.actors.iter().find(|a| a.is_totem()).unwrap().id;
    (world, rng, totem_id)
}

/// A zero-power skill always lands exactly one point of damage.
fn poke(world: &mut World, totem_id: u64, rng: &mut ChaCha8Rng) {
    let roll = world
        .damage_actor(totem_id, DamageRequest::skill(0, None), rng)
        .unwrap();
    assert_eq!(roll.amount, 1);
}

fn wave_indices(events: &[WorldEvent]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match e {
            WorldEvent::WaveSpawned { wave_index, .. } => Some(*wave_index),
            _ => None,
        })
        .collect()
}

// =========================================================================
// Population
// =========================================================================

#[test]
fn test_eight_stones_scattered_far_from_village() {
    let (world, _, _) = totem_world();
    let totems: Vec<_> = world.actors.iter().filter(|a| a.is_totem()).collect();
    assert_eq!(totems.len(), 8);
    for totem in totems {
        let dist = totem.position.flat_distance(&metin::core::Position::ORIGIN);
        assert!((100.0..=900.0).contains(&dist), "totem at {dist}");
        assert_eq!(totem.hp, 2500);
        assert_eq!(totem.level, 5);
    }
}

// =========================================================================
// Waves
// =========================================================================

#[test]
fn test_crossing_half_health_fires_three_waves_in_order() {
    let (mut world, mut rng, totem_id) = totem_world();
    let before = world.actors.len();
    world.actor_mut(totem_id).unwrap().hp = 1251;

    poke(&mut world, totem_id, &mut rng);

    let events = world.drain_events();
    assert_eq!(wave_indices(&events), vec![0, 1, 2]);

    let spawned = &world.actors[before..];
    let templates: Vec<&str> = spawned.iter().map(|a| a.template_id.as_str()).collect();
    assert_eq!(
        templates,
        vec!["wild_dog", "wild_dog", "wild_dog", "wolf", "wolf", "wolf", "wild_boar", "wild_boar"]
    );
    assert!(spawned.iter().all(|a| a.aggroed && a.state == AiState::Chasing));
    assert!(spawned.iter().all(|a| a.level == 1));

    let ActorKind::Totem { triggered_waves } = &world.actor(totem_id).unwrap().kind else {
        panic!("not a totem");
    };
    assert_eq!(triggered_waves.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn test_each_wave_fires_once_over_a_stone_lifetime() {
    let (mut world, mut rng, totem_id) = totem_world();
    let mut fired = Vec::new();

    for hp in [2251, 2000, 1751, 1600, 626, 251, 2] {
        world.actor_mut(totem_id).unwrap().hp = hp;
        poke(&mut world, totem_id, &mut rng);
        fired.extend(wave_indices(&world.drain_events()));
    }
    assert_eq!(fired, vec![0, 1, 2, 3, 4]);

    let ids: HashSet<u64> = world.actors.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), world.actors.len(), "actor ids must be unique");
}

#[test]
fn test_reinforcements_ring_the_stone() {
    let (mut world, mut rng, totem_id) = totem_world();
    let center = world.actor(totem_id).unwrap().position;
    let before = world.actors.len();
    world.actor_mut(totem_id).unwrap().hp = 2251;
    poke(&mut world, totem_id, &mut rng);

    for dog in &world.actors[before..] {
        assert!((dog.position.flat_distance(&center) - 3.0).abs() < 1e-9);
        assert_eq!(dog.spawn_origin, dog.position);
    }
}

// =========================================================================
// Destruction
// =========================================================================

#[test]
fn test_destroying_a_stone_pays_out() {
    let (mut world, mut rng, totem_id) = totem_world();
    world.actor_mut(totem_id).unwrap().hp = 1;
    poke(&mut world, totem_id, &mut rng);

    let events = world.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        WorldEvent::ActorKilled { xp: 5000, template_id, .. } if template_id == "metin_stone"
    )));
    assert!(world.player.level() > 1, "5000 xp is several levels");
    assert!(!world.drops.is_empty(), "stones always drop something");
    assert!(world.take_save_request());
    assert_eq!(world.actor(totem_id).unwrap().state, AiState::Dead);
    assert!(world
        .damage_actor(totem_id, DamageRequest::skill(0, None), &mut rng)
        .is_none());
}
