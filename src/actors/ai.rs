//! Hostile creature state machine.
//!
//! `Idle -> Chasing -> Attacking -> Returning -> Idle`. Distances are
//! measured before this tick's movement, so transitions reflect where the
//! creature started the frame.

use super::types::{Actor, AiState};
use crate::content::enemies::EnemyTemplate;
use crate::core::constants::*;
use crate::core::geometry::Position;

/// An attack the creature landed this tick, in raw damage before defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackEvent {
    pub actor_id: u64,
    pub damage: u32,
}

/// Advances one hostile by `delta` seconds.
///
/// Friendly actors, totems and the dead are left untouched.
pub fn update_ai(
    actor: &mut Actor,
    template: &EnemyTemplate,
    player: &Position,
    delta: f64,
) -> Option<AttackEvent> {
    if !actor.is_hostile() || !actor.is_alive() {
        return None;
    }

    actor.state_timer += delta;
    actor.attack_timer = (actor.attack_timer - delta).max(0.0);

    let to_player = actor.position.flat_distance(player);
    let to_spawn = actor.position.flat_distance(&actor.spawn_origin);
    let mut attack = None;
    let before = actor.state;

    match actor.state {
        AiState::Idle => {
            if to_player <= template.detection_radius {
                actor.state = AiState::Chasing;
                actor.aggroed = true;
            }
        }
        AiState::Chasing => {
            if to_player > AI_MIN_CHASE_DISTANCE {
                actor.heading = actor.position.heading_to(player);
                if to_player > template.attack_range * AI_CHASE_STOP_FACTOR {
                    actor
                        .position
                        .step_towards(player, template.movement_speed * delta);
                }
            }

            if to_player <= template.attack_range {
                actor.state = AiState::Attacking;
                actor.state_timer = 0.0;
            } else if to_spawn > template.reset_radius {
                actor.state = AiState::Returning;
                actor.aggroed = false;
            }
        }
        AiState::Attacking => {
            if to_player > f64::EPSILON {
                actor.heading = actor.position.heading_to(player);
            }

            if actor.attack_timer <= 0.0 {
                attack = Some(AttackEvent {
                    actor_id: actor.id,
                    damage: template.damage,
                });
                actor.attack_timer = template.attack_cooldown;
            }

            if to_player > template.attack_range * AI_ATTACK_BREAK_FACTOR {
                actor.state = AiState::Chasing;
            }
            if to_spawn > template.reset_radius {
                actor.state = AiState::Returning;
                actor.aggroed = false;
            }
        }
        AiState::Returning => {
            let home = actor.spawn_origin;
            if to_spawn > AI_MIN_CHASE_DISTANCE {
                if let Some(heading) = actor
                    .position
                    .step_towards(&home, template.movement_speed * delta)
                {
                    actor.heading = heading;
                }
            }

            if to_spawn < AI_HOME_ARRIVAL_RADIUS {
                actor.state = AiState::Idle;
                actor.hp = actor.max_hp;
                actor.position = home;
            }
        }
        AiState::Dead => {}
    }

    if actor.state != before {
        tracing::debug!(
            actor = actor.id,
            template = %actor.template_id,
            from = ?before,
            to = ?actor.state,
            "ai transition"
        );
    }

    attack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::spawn::spawn_hostile;
    use crate::content::enemies::enemy_template;

    fn dog_at(x: f64, z: f64) -> (Actor, &'static EnemyTemplate) {
        let template = enemy_template("wild_dog").unwrap();
        let actor = spawn_hostile(1, template, Position::new(x, z));
        (actor, template)
    }

    #[test]
    fn test_idle_notices_player_at_detection_radius() {
        let (mut dog, t) = dog_at(0.0, 6.0);
        assert!(update_ai(&mut dog, t, &Position::ORIGIN, 0.016).is_none());
        assert_eq!(dog.state, AiState::Chasing);
        assert!(dog.aggroed);
    }

    #[test]
    fn test_idle_ignores_distant_player() {
        let (mut dog, t) = dog_at(0.0, 6.5);
        update_ai(&mut dog, t, &Position::ORIGIN, 0.016);
        assert_eq!(dog.state, AiState::Idle);
    }

    #[test]
    fn test_chase_moves_toward_player() {
        let (mut dog, t) = dog_at(0.0, 5.0);
        dog.state = AiState::Chasing;
        update_ai(&mut dog, t, &Position::ORIGIN, 0.5);
        assert!((dog.position.z - 3.5).abs() < 1e-9);
        assert_eq!(dog.state, AiState::Chasing);
    }

    #[test]
    fn test_chase_holds_inside_stop_distance() {
        let (mut dog, t) = dog_at(0.0, 1.4);
        dog.state = AiState::Chasing;
        update_ai(&mut dog, t, &Position::ORIGIN, 0.5);
        assert_eq!(dog.position, Position::new(0.0, 1.4));
        assert_eq!(dog.state, AiState::Attacking);
    }

    #[test]
    fn test_attack_fires_and_resets_timer() {
        let (mut dog, t) = dog_at(0.0, 1.5);
        dog.state = AiState::Attacking;
        dog.attack_timer = 0.0;
        let attack = update_ai(&mut dog, t, &Position::ORIGIN, 0.016).unwrap();
        assert_eq!(attack.damage, 10);
        assert_eq!(dog.attack_timer, 1.5);

        assert!(update_ai(&mut dog, t, &Position::ORIGIN, 0.016).is_none());
    }

    #[test]
    fn test_attack_breaks_when_player_steps_away() {
        let (mut dog, t) = dog_at(0.0, 2.5);
        dog.state = AiState::Attacking;
        dog.attack_timer = 1.0;
        update_ai(&mut dog, t, &Position::ORIGIN, 0.016);
        assert_eq!(dog.state, AiState::Chasing);
    }

    #[test]
    fn test_leash_and_full_reset() {
        let (mut dog, t) = dog_at(0.0, 0.0);
        dog.position = Position::new(0.0, 26.0);
        dog.state = AiState::Chasing;
        dog.hp = 20;
        update_ai(&mut dog, t, &Position::new(0.0, 40.0), 0.1);
        assert_eq!(dog.state, AiState::Returning);
        assert!(!dog.aggroed);

        for _ in 0..200 {
            update_ai(&mut dog, t, &Position::new(0.0, 40.0), 0.1);
            if dog.state == AiState::Idle {
                break;
            }
        }
        assert_eq!(dog.state, AiState::Idle);
        assert_eq!(dog.hp, dog.max_hp);
        assert_eq!(dog.position, dog.spawn_origin);
    }

    #[test]
    fn test_same_inputs_same_transition() {
        let (dog, t) = dog_at(0.0, 3.0);
        let mut a = dog.clone();
        let mut b = dog;
        a.state = AiState::Chasing;
        b.state = AiState::Chasing;
        let ra = update_ai(&mut a, t, &Position::ORIGIN, 0.033);
        let rb = update_ai(&mut b, t, &Position::ORIGIN, 0.033);
        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }

    #[test]
    fn test_dead_actor_is_inert() {
        let (mut dog, t) = dog_at(0.0, 1.0);
        dog.apply_damage(1000);
        let snapshot = dog.clone();
        assert!(update_ai(&mut dog, t, &Position::ORIGIN, 1.0).is_none());
        assert_eq!(dog, snapshot);
    }
}
