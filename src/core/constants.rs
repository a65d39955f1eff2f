use std::f64::consts::PI;

// World clock
pub const START_GAME_TIME_HOURS: f64 = 12.0;
pub const GAME_HOURS_PER_SECOND: f64 = 0.05;
pub const HOURS_PER_DAY: f64 = 24.0;

// Player defaults
pub const PLAYER_START_HP: u32 = 850;
pub const PLAYER_START_MP: u32 = 300;
pub const PLAYER_START_STAT: u32 = 5;
pub const PLAYER_DEFAULT_NAME: &str = "Player";
pub const MP_REGEN_PER_SECOND: f64 = 5.0;
pub const ATTACK_LUNGE_DISTANCE: f64 = 0.4;
pub const STARTING_POTIONS: u32 = 10;
pub const STARTING_WEAPON: &str = "sword_1";
pub const STARTING_POTION: &str = "potion_red";

// Derived stat formulas
pub const BASE_MAX_HP: u32 = 800;
pub const MAX_HP_PER_LEVEL: u32 = 40;
pub const MAX_HP_PER_VIT: u32 = 40;
pub const BASE_MAX_MP: u32 = 200;
pub const MAX_MP_PER_LEVEL: u32 = 10;
pub const MAX_MP_PER_INT: u32 = 20;
pub const BASE_MOVE_SPEED: f64 = 10.0;
pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const UPGRADE_BONUS_PER_LEVEL: f64 = 0.1;

// XP and leveling
pub const XP_CURVE_BASE: f64 = 300.0;
pub const XP_CURVE_GROWTH: f64 = 1.5;
pub const LEVEL_UP_STAT_POINTS: u32 = 3;
pub const LEVEL_UP_SKILL_POINTS: u32 = 1;
pub const MAX_PLAYER_LEVEL: u32 = 99;
pub const DEFAULT_KILL_XP: u64 = 10;

// Combat resolution
pub const BASIC_ATTACK_POWER_UNIT: f64 = 20.0;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const DAMAGE_VARIANCE_MIN: f64 = 0.95;
pub const DAMAGE_VARIANCE_SPAN: f64 = 0.1;
pub const DEFENSE_PER_TARGET_LEVEL: u32 = 2;
pub const MIN_DAMAGE: u32 = 1;
pub const KNOCKBACK_NORMAL: f64 = 0.5;
pub const KNOCKBACK_FINISHER: f64 = 1.5;

// Basic attack combo
pub const COMBO_STEPS: usize = 4;
pub const COMBO_RESET_SECONDS: f64 = 1.2;
pub const COMBO_POWER_STEP: f64 = 0.2;

// AI
pub const AI_CHASE_STOP_FACTOR: f64 = 0.8;
pub const AI_ATTACK_BREAK_FACTOR: f64 = 1.2;
pub const AI_HOME_ARRIVAL_RADIUS: f64 = 1.0;
pub const AI_MIN_CHASE_DISTANCE: f64 = 0.1;
pub const CORPSE_LINGER_SECONDS: f64 = 2.0;

// NPCs
pub const NPC_HP: u32 = 9999;
pub const NPC_LEVEL: u32 = 99;
pub const INTERACT_RADIUS: f64 = 3.0;

// Loot
pub const GOLD_DESPAWN_SECONDS: f64 = 60.0;
pub const ITEM_DESPAWN_SECONDS: f64 = 120.0;
pub const DROP_SCATTER_MIN: f64 = 0.5;
pub const DROP_SCATTER_SPAN: f64 = 1.5;

// Inventory
pub const INVENTORY_PAGES: usize = 2;
pub const SLOTS_PER_PAGE: usize = 45;
pub const SELL_PRICE: u64 = 10;

// Refinement
pub const MAX_UPGRADE_LEVEL: u8 = 9;

// Skills
pub const SKILL_SLOT_COUNT: usize = 4;
pub const MAX_SKILL_LEVEL: u8 = 20;

// Population
pub const TOTEM_COUNT: usize = 8;
pub const TOTEM_MIN_DISTANCE: f64 = 100.0;
pub const TOTEM_MAX_DISTANCE: f64 = 900.0;
pub const SPAWNED_MOB_LEVEL: u32 = 1;

// Save file
pub const SAVE_VERSION_MAGIC: u64 = 0x4D45_5449_4E53_4156; // "METINSAV"

pub const FULL_CIRCLE: f64 = 2.0 * PI;
