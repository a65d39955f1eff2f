//! The first mission end to end: offer, accept, hunt, turn in.

use metin::actors::spawn_hostile;
use metin::combat::DamageRequest;
use metin::content::enemy_template;
use metin::core::{ActionError, Interaction, Position, World, WorldConfig, WorldEvent};
use metin::items::{create_item, Inventory, ItemIdAllocator, SlotRef};
use metin::loot::DropContents;
use metin::quests::DialogueStage;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FIRST_QUEST: &str = "quest_lv1";

fn village() -> (World, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let config = WorldConfig {
        spawn_totems: false,
        spawn_mobs: false,
        ..WorldConfig::default()
    };
    let mut world = World::new(config, &mut rng);
    world.drain_events();
    (world, rng)
}

fn guard_id(world: &World) -> u64 {
    world
        .actors
        .iter()
        .find(|a| a.template_id == "v1_guide")
        .unwrap()
        .id
}

/// Spawns a wild dog on one hit point and finishes it off.
fn kill_dog(world: &mut World, id: u64, rng: &mut ChaCha8Rng) {
    let dog = enemy_template("wild_dog").unwrap();
    let mut actor = spawn_hostile(id, dog, Position::new(50.0, 50.0));
    actor.hp = 1;
    world.actors.push(actor);
    world
        .damage_actor(id, DamageRequest::skill(0, None), rng)
        .unwrap();
}

fn notifications(events: &[WorldEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            WorldEvent::Notification { message, .. } => Some(message.clone()),
            _ => None,
        })
        .collect()
}

// =========================================================================
// Full flow
// =========================================================================

#[test]
fn test_first_mission_end_to_end() {
    let (mut world, mut rng) = village();
    let guard = guard_id(&world);

    // Offer
    let Interaction::Dialogue(context) = world.interact(guard).unwrap() else {
        panic!("the guard should talk");
    };
    assert_eq!(context.npc_name, "City Guard");
    assert_eq!(
        context.stage,
        DialogueStage::Offer {
            quest_id: FIRST_QUEST.to_string()
        }
    );

    // Accept
    world.accept_quest(FIRST_QUEST).unwrap();
    assert_eq!(world.interaction, Interaction::None);
    assert!(notifications(&world.drain_events()).contains(&"New Quest Accepted!".to_string()));
    assert_eq!(world.complete_quest(), Err(ActionError::QuestNotReady));

    // Hunt
    for id in 1000..1004 {
        kill_dog(&mut world, id, &mut rng);
    }
    assert_eq!(world.player.quests.active.as_ref().unwrap().current_count, 4);
    assert!(matches!(
        world.dialogue_for(guard).unwrap().stage,
        DialogueStage::InProgress { .. }
    ));

    world.drain_events();
    kill_dog(&mut world, 1004, &mut rng);
    let events = world.drain_events();
    assert!(events.contains(&WorldEvent::QuestObjectiveComplete {
        quest_id: FIRST_QUEST.to_string()
    }));
    assert!(notifications(&events).contains(&"Quest Objective Complete! Return to NPC.".to_string()));

    // Extra kills never overshoot.
    kill_dog(&mut world, 1005, &mut rng);
    assert_eq!(world.player.quests.active.as_ref().unwrap().current_count, 5);

    // Turn in
    assert_eq!(
        world.dialogue_for(guard).unwrap().stage,
        DialogueStage::TurnIn {
            quest_id: FIRST_QUEST.to_string()
        }
    );
    let yang_before = world.player.yang;
    let xp_before = world.player.progression.xp;
    let reward = world.complete_quest().unwrap();
    assert_eq!(reward.exp, 50);
    assert_eq!(reward.yang, 200);
    assert_eq!(world.player.yang, yang_before + 200);
    assert_eq!(world.player.progression.xp, xp_before + 50);
    assert_eq!(world.player.inventory.count_of("potion_red"), 30);
    assert!(world.player.quests.active.is_none());
    assert!(world.player.quests.is_completed(FIRST_QUEST));
    assert!(world.take_save_request());

    let events = world.drain_events();
    assert!(events.contains(&WorldEvent::QuestCompleted {
        quest_id: FIRST_QUEST.to_string()
    }));
    assert!(notifications(&events).contains(&"Quest Completed: Welcome to the Village".to_string()));

    // Done for good
    assert_eq!(world.dialogue_for(guard).unwrap().stage, DialogueStage::Idle);
    assert_eq!(world.accept_quest(FIRST_QUEST), Err(ActionError::QuestUnavailable));
}

// =========================================================================
// Rejections
// =========================================================================

#[test]
fn test_quest_above_level_is_unavailable() {
    let (mut world, _) = village();
    assert_eq!(world.accept_quest("quest_lv5"), Err(ActionError::QuestUnavailable));
    assert!(world.player.quests.active.is_none());
}

#[test]
fn test_only_one_quest_at_a_time() {
    let (mut world, _) = village();
    world.player.progression.level = 2;
    world.accept_quest(FIRST_QUEST).unwrap();
    assert_eq!(world.accept_quest("quest_lv2"), Err(ActionError::QuestUnavailable));
}

#[test]
fn test_other_kills_do_not_count() {
    let (mut world, mut rng) = village();
    world.accept_quest(FIRST_QUEST).unwrap();
    let wolf = enemy_template("wolf").unwrap();
    let mut actor = spawn_hostile(900, wolf, Position::new(40.0, 40.0));
    actor.hp = 1;
    world.actors.push(actor);
    world.damage_actor(900, DamageRequest::skill(0, None), &mut rng);
    assert_eq!(world.player.quests.active.as_ref().unwrap().current_count, 0);
}

// =========================================================================
// Reward overflow
// =========================================================================

#[test]
fn test_reward_that_does_not_fit_lands_at_feet() {
    let (mut world, mut rng) = village();
    world.accept_quest(FIRST_QUEST).unwrap();
    for id in 1000..1005 {
        kill_dog(&mut world, id, &mut rng);
    }

    let mut ids = ItemIdAllocator::starting_at(5_000);
    world.player.inventory = Inventory::new(1, 1);
    world
        .player
        .inventory
        .place(SlotRef::new(0, 0), create_item("long_sword", 1, &mut ids).unwrap())
        .unwrap();
    world.drops.clear();

    world.complete_quest().unwrap();
    let reward_drop = world
        .drops
        .iter()
        .find(|d| matches!(&d.contents, DropContents::Item(item) if item.template_id == "potion_red"))
        .expect("reward should be on the ground");
    assert_eq!(reward_drop.position, world.player.position);
    if let DropContents::Item(item) = &reward_drop.contents {
        assert_eq!(item.quantity, 20);
    }
}
