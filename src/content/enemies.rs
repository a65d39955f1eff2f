//! Hostile creature and totem definitions, plus the spawn population.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub max_hp: u32,
    pub damage: u32,
    pub movement_speed: f64,
    pub detection_radius: f64,
    pub reset_radius: f64,
    pub attack_range: f64,
    pub attack_cooldown: f64,
    pub exp_reward: u64,
    pub loot_table: Option<&'static str>,
}

/// One summon wave of a totem, fired once when hp drops to `trigger_hp_percent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveConfig {
    pub wave_index: u32,
    pub spawn_template: &'static str,
    pub count: u32,
    pub trigger_hp_percent: f64,
    pub spawn_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotemTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub max_hp: u32,
    pub level: u32,
    pub exp_reward: u64,
    pub loot_table: &'static str,
    pub waves: &'static [WaveConfig],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobZone {
    pub template_id: &'static str,
    pub count: usize,
    pub min_distance: f64,
    pub max_distance: f64,
}

pub static ENEMY_TEMPLATES: &[EnemyTemplate] = &[
    EnemyTemplate {
        id: "wild_dog",
        name: "Wild Dog",
        max_hp: 150,
        damage: 10,
        movement_speed: 3.0,
        detection_radius: 6.0,
        reset_radius: 25.0,
        attack_range: 1.8,
        attack_cooldown: 1.5,
        exp_reward: 15,
        loot_table: Some("wild_dog_loot"),
    },
    EnemyTemplate {
        id: "wolf",
        name: "Wolf",
        max_hp: 250,
        damage: 18,
        movement_speed: 3.8,
        detection_radius: 10.0,
        reset_radius: 35.0,
        attack_range: 1.8,
        attack_cooldown: 1.4,
        exp_reward: 30,
        loot_table: Some("wolf_loot"),
    },
    EnemyTemplate {
        id: "alpha_wolf",
        name: "Alpha Wolf",
        max_hp: 350,
        damage: 25,
        movement_speed: 4.0,
        detection_radius: 12.0,
        reset_radius: 40.0,
        attack_range: 1.9,
        attack_cooldown: 1.3,
        exp_reward: 50,
        loot_table: Some("wolf_loot"),
    },
    EnemyTemplate {
        id: "wild_boar",
        name: "Wild Boar",
        max_hp: 500,
        damage: 30,
        movement_speed: 2.5,
        detection_radius: 8.0,
        reset_radius: 30.0,
        attack_range: 2.0,
        attack_cooldown: 1.8,
        exp_reward: 80,
        loot_table: Some("wild_dog_loot"),
    },
    EnemyTemplate {
        id: "bear",
        name: "Bear",
        max_hp: 900,
        damage: 55,
        movement_speed: 2.2,
        detection_radius: 10.0,
        reset_radius: 40.0,
        attack_range: 2.5,
        attack_cooldown: 2.0,
        exp_reward: 200,
        loot_table: Some("bear_loot"),
    },
    EnemyTemplate {
        id: "tiger",
        name: "Tiger",
        max_hp: 1500,
        damage: 90,
        movement_speed: 5.0,
        detection_radius: 15.0,
        reset_radius: 50.0,
        attack_range: 2.0,
        attack_cooldown: 1.2,
        exp_reward: 500,
        loot_table: Some("tiger_loot"),
    },
];

pub static TOTEM_TEMPLATES: &[TotemTemplate] = &[TotemTemplate {
    id: "metin_stone",
    name: "Metin of Sorrow",
    max_hp: 2500,
    level: 5,
    exp_reward: 5000,
    loot_table: "metin_loot_low",
    waves: &[
        WaveConfig {
            wave_index: 0,
            spawn_template: "wild_dog",
            count: 3,
            trigger_hp_percent: 90.0,
            spawn_radius: 3.0,
        },
        WaveConfig {
            wave_index: 1,
            spawn_template: "wolf",
            count: 3,
            trigger_hp_percent: 70.0,
            spawn_radius: 3.0,
        },
        WaveConfig {
            wave_index: 2,
            spawn_template: "wild_boar",
            count: 2,
            trigger_hp_percent: 50.0,
            spawn_radius: 4.0,
        },
        WaveConfig {
            wave_index: 3,
            spawn_template: "bear",
            count: 2,
            trigger_hp_percent: 25.0,
            spawn_radius: 4.0,
        },
        WaveConfig {
            wave_index: 4,
            spawn_template: "alpha_wolf",
            count: 3,
            trigger_hp_percent: 10.0,
            spawn_radius: 5.0,
        },
    ],
}];

pub const DEFAULT_TOTEM: &str = "metin_stone";

pub static MOB_ZONES: &[MobZone] = &[
    MobZone {
        template_id: "wild_dog",
        count: 20,
        min_distance: 60.0,
        max_distance: 150.0,
    },
    MobZone {
        template_id: "wolf",
        count: 15,
        min_distance: 150.0,
        max_distance: 300.0,
    },
    MobZone {
        template_id: "wild_boar",
        count: 10,
        min_distance: 200.0,
        max_distance: 400.0,
    },
    MobZone {
        template_id: "bear",
        count: 10,
        min_distance: 300.0,
        max_distance: 600.0,
    },
    MobZone {
        template_id: "tiger",
        count: 10,
        min_distance: 500.0,
        max_distance: 900.0,
    },
    MobZone {
        template_id: "alpha_wolf",
        count: 5,
        min_distance: 250.0,
        max_distance: 500.0,
    },
];

pub fn enemy_template(id: &str) -> Option<&'static EnemyTemplate> {
    ENEMY_TEMPLATES.iter().find(|t| t.id == id)
}

pub fn totem_template(id: &str) -> Option<&'static TotemTemplate> {
    TOTEM_TEMPLATES.iter().find(|t| t.id == id)
}

/// Display name for any hostile or totem template id.
pub fn hostile_name(id: &str) -> Option<&'static str> {
    enemy_template(id)
        .map(|t| t.name)
        .or_else(|| totem_template(id).map(|t| t.name))
}
