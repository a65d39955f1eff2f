//! Inventory, equipment and shop actions as the player drives them.

use metin::core::{ActionError, Interaction, World, WorldConfig, WorldEvent};
use metin::items::{create_item, EquipmentSlot, Inventory, ItemIdAllocator, PlayerClass, SlotRef};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const A: SlotRef = SlotRef::new(0, 0);
const B: SlotRef = SlotRef::new(0, 1);
const C: SlotRef = SlotRef::new(0, 2);

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

fn give(world: &mut World, at: SlotRef, template_id: &str, quantity: u32) {
    let mut ids = ItemIdAllocator::starting_at(10_000 + (at.page * 100 + at.slot) as u64);
    let item = create_item(template_id, quantity, &mut ids).unwrap();
    world.player.inventory.place(at, item).unwrap();
}

fn open_shop(world: &mut World, merchant: &str) {
    let id = world
        .actors
        .iter()
        .find(|a| a.template_id == merchant)
        .unwrap()
        .id;
    assert!(matches!(world.interact(id).unwrap(), Interaction::Shop { .. }));
}

fn last_notification(world: &World) -> Option<String> {
    world.events().iter().rev().find_map(|e| match e {
        WorldEvent::Notification { message, .. } => Some(message.clone()),
        _ => None,
    })
}

// =========================================================================
// Stacking and moving
// =========================================================================

#[test]
fn test_moving_onto_same_potion_merges() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(2, 45);
    give(&mut world, A, "potion_red", 150);
    give(&mut world, B, "potion_red", 120);

    world.move_item(A, B).unwrap();
    assert_eq!(world.player.inventory.get(B).unwrap().quantity, 200);
    assert_eq!(world.player.inventory.get(A).unwrap().quantity, 70);
    assert_eq!(world.player.inventory.count_of("potion_red"), 270);
}

#[test]
fn test_moving_onto_different_item_swaps() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(2, 45);
    give(&mut world, A, "potion_red", 5);
    give(&mut world, B, "long_sword", 1);

    world.move_item(A, B).unwrap();
    assert_eq!(world.player.inventory.get(A).unwrap().template_id, "long_sword");
    assert_eq!(world.player.inventory.get(B).unwrap().template_id, "potion_red");
}

#[test]
fn test_split_needs_room_and_a_real_split() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(1, 2);
    give(&mut world, A, "potion_red", 10);

    assert_eq!(world.split_stack(A, 10), Err(ActionError::CannotUse));
    assert_eq!(world.split_stack(A, 3), Ok(B));
    assert_eq!(world.player.inventory.get(A).unwrap().quantity, 7);
    assert_eq!(world.split_stack(A, 1), Err(ActionError::InventoryFull));
    assert_eq!(last_notification(&world).as_deref(), Some("Inventory full."));
}

// =========================================================================
// Equipment
// =========================================================================

#[test]
fn test_equip_swaps_with_worn_item() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(2, 45);
    world.player.progression.level = 5;
    give(&mut world, C, "long_sword", 1);
    let attack_before = world.player.derived().attack;

    assert_eq!(world.equip(C), Ok(EquipmentSlot::Weapon));
    let worn = world.player.equipment.get(EquipmentSlot::Weapon).unwrap();
    assert_eq!(worn.template_id, "long_sword");
    assert_eq!(world.player.inventory.get(C).unwrap().template_id, "sword_1");
    assert!(world.player.derived().attack > attack_before);
}

#[test]
fn test_equip_checks_level_then_class() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(2, 45);
    give(&mut world, A, "long_sword", 1);
    assert_eq!(world.equip(A), Err(ActionError::LevelTooLow { required: 5 }));

    world.player.progression.level = 5;
    world.player.class = PlayerClass::Shaman;
    assert!(matches!(world.equip(A), Err(ActionError::WrongClass { .. })));
    assert_eq!(world.player.inventory.get(A).unwrap().template_id, "long_sword");
}

#[test]
fn test_unequip_into_full_inventory_keeps_it_worn() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(1, 1);
    give(&mut world, A, "potion_blue", 1);

    assert_eq!(world.unequip(EquipmentSlot::Weapon), Err(ActionError::InventoryFull));
    assert!(world.player.equipment.get(EquipmentSlot::Weapon).is_some());

    world.player.inventory = Inventory::new(1, 1);
    world.unequip(EquipmentSlot::Weapon).unwrap();
    assert!(world.player.equipment.get(EquipmentSlot::Weapon).is_none());
    assert_eq!(world.player.inventory.get(A).unwrap().template_id, "sword_1");
}

#[test]
fn test_using_gear_equips_it() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(2, 45);
    give(&mut world, A, "armor_1", 1);
    world.use_item(A).unwrap();
    assert_eq!(
        world.player.equipment.get(EquipmentSlot::Armor).unwrap().template_id,
        "armor_1"
    );
    assert!(world.player.inventory.get(A).is_none());
}

// =========================================================================
// Consumables
// =========================================================================

#[test]
fn test_potion_heals_and_is_consumed() {
    let (mut world, _) = village();
    world.player.hp = 100;
    world.use_potion().unwrap();
    assert_eq!(world.player.hp, 300);
    assert_eq!(world.player.inventory.count_of("potion_red"), 9);
}

#[test]
fn test_potion_never_overheals() {
    let (mut world, _) = village();
    let max = world.player.derived().max_hp;
    world.player.hp = max - 10;
    world.use_potion().unwrap();
    assert_eq!(world.player.hp, max);
}

#[test]
fn test_no_potions_left() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(2, 45);
    assert_eq!(world.use_potion(), Err(ActionError::NoPotions));
    assert_eq!(last_notification(&world).as_deref(), Some("No potions!"));
}

#[test]
fn test_materials_cannot_be_used() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(2, 45);
    give(&mut world, A, "wolf_fur", 3);
    assert_eq!(world.use_item(A), Err(ActionError::CannotUse));
    assert_eq!(world.player.inventory.get(A).unwrap().quantity, 3);
}

// =========================================================================
// Shops
// =========================================================================

#[test]
fn test_buy_from_general_store() {
    let (mut world, _) = village();
    world.player.yang = 1000;
    open_shop(&mut world, "v1_potion_merchant");

    world.buy("potion_red", 200).unwrap();
    assert_eq!(world.player.yang, 800);
    assert_eq!(world.player.inventory.count_of("potion_red"), 11);
    assert_eq!(last_notification(&world).as_deref(), Some("Bought Red Potion (S)."));
}

#[test]
fn test_buy_rejections_change_nothing() {
    let (mut world, _) = village();
    world.player.yang = 100;
    assert_eq!(world.buy("potion_red", 200), Err(ActionError::NotInteracting));

    open_shop(&mut world, "v1_potion_merchant");
    assert_eq!(world.buy("potion_red", 200), Err(ActionError::InsufficientYang));
    assert_eq!(world.buy("long_sword", 500), Err(ActionError::NotForSale));
    assert_eq!(world.buy("potion_red", 1), Err(ActionError::NotForSale));
    assert_eq!(world.player.yang, 100);
    assert_eq!(world.player.inventory.count_of("potion_red"), 10);
}

#[test]
fn test_buy_into_full_inventory_keeps_yang() {
    let (mut world, _) = village();
    world.player.yang = 10_000;
    world.player.inventory = Inventory::new(1, 1);
    give(&mut world, A, "potion_blue", 1);
    open_shop(&mut world, "v1_weapon_merchant");

    assert_eq!(world.buy("sword_1", 100), Err(ActionError::InventoryFull));
    assert_eq!(world.player.yang, 10_000);
}

#[test]
fn test_sell_pays_flat_price() {
    let (mut world, _) = village();
    world.player.inventory = Inventory::new(2, 45);
    give(&mut world, B, "long_sword", 1);
    assert_eq!(world.sell(B), Err(ActionError::NotInteracting));

    open_shop(&mut world, "v1_weapon_merchant");
    assert_eq!(world.sell(B), Ok(10));
    assert_eq!(world.player.yang, 10);
    assert!(world.player.inventory.get(B).is_none());
    assert_eq!(
        last_notification(&world).as_deref(),
        Some("Sold Long Sword for 10 Yang.")
    );
    assert_eq!(world.sell(B), Err(ActionError::EmptySlot));
}
