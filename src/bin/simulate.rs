//! Headless world simulator.
//!
//! Drives the same `tick()` the game uses with a simple bot at the controls:
//! it walks to the nearest creature, swings, casts whatever is ready,
//! drinks potions when low and picks up what drops. Prints a summary at
//! the end.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --seconds N     Simulated seconds (default: 600)
//!   --delta N       Seconds per tick (default: 0.05)
//!   --seed N        RNG seed (default: 42)
//!   --config FILE   WorldConfig as JSON; missing fields keep defaults
//!   --save FILE     Write the final character to FILE
//!   --quiet         Only the final summary line

use metin::build_info::version_line;
use metin::character::{SaveManager, StatKind};
use metin::content::quest_for_level;
use metin::core::{tick, MoveIntent, TickResult, World, WorldConfig, WorldEvent};
use metin::skills::prepare_cast;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;

/// Creatures further than this are walked to, not fought.
const ENGAGE_RANGE: f64 = 2.5;
/// Drink a potion below this fraction of max hp.
const POTION_THRESHOLD: f64 = 0.4;
/// Skill slots the bot spends points on, in order of preference.
const SKILL_PRIORITY: [usize; 4] = [1, 0, 3, 2];

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    seconds: f64,
    delta: f64,
    seed: u64,
    config_path: Option<String>,
    save_path: Option<String>,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seconds: 600.0,
            delta: 0.05,
            seed: 42,
            config_path: None,
            save_path: None,
            quiet: false,
        }
    }
}

fn parse_args() -> Result<SimConfig, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match flag {
            "--seconds" => {
                config.seconds = value()?
                    .parse()
                    .map_err(|_| "--seconds requires a number".to_string())?
            }
            "--delta" => {
                config.delta = value()?
                    .parse()
                    .map_err(|_| "--delta requires a number".to_string())?
            }
            "--seed" => {
                config.seed = value()?
                    .parse()
                    .map_err(|_| "--seed requires a number".to_string())?
            }
            "--config" => config.config_path = Some(value()?),
            "--save" => config.save_path = Some(value()?),
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    if config.delta <= 0.0 {
        return Err("--delta must be positive".to_string());
    }
    Ok(config)
}

fn print_usage() {
    eprintln!(
        "Metin Headless Simulator\n\
         \n\
         Usage: simulate [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --seconds N     Simulated seconds (default: 600)\n\
         \x20 --delta N       Seconds per tick (default: 0.05)\n\
         \x20 --seed N        RNG seed (default: 42)\n\
         \x20 --config FILE   WorldConfig JSON\n\
         \x20 --save FILE     Write the final character to FILE\n\
         \x20 --quiet         Only the final summary line\n\
         \x20 --help, -h      Show this help"
    );
}

fn load_world_config(path: Option<&str>) -> Result<WorldConfig, String> {
    let Some(path) = path else {
        return Ok(WorldConfig::default());
    };
    let json = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    WorldConfig::from_json(&json).map_err(|e| format!("{path}: {e}"))
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct SimStats {
    ticks: u64,
    kills: u64,
    deaths: u64,
    crits: u64,
    hits: u64,
    xp_gained: u64,
    damage_taken: u64,
    drops_collected: u64,
    potions_used: u64,
    skills_cast: u64,
    waves_triggered: u64,
    quests_completed: u64,
    autosaves: u64,
    level_at_second: Vec<(u32, f64)>,
}

impl SimStats {
    fn process_tick(&mut self, elapsed: f64, result: &TickResult) {
        self.ticks += 1;
        self.damage_taken += result.damage_taken as u64;
        if result.save_requested {
            self.autosaves += 1;
        }
        for event in &result.events {
            match event {
                WorldEvent::ActorDamaged { crit, .. } => {
                    self.hits += 1;
                    if *crit {
                        self.crits += 1;
                    }
                }
                WorldEvent::ActorKilled { xp, .. } => {
                    self.kills += 1;
                    self.xp_gained += xp;
                }
                WorldEvent::LevelUp { level } => self.level_at_second.push((*level, elapsed)),
                WorldEvent::WaveSpawned { .. } => self.waves_triggered += 1,
                WorldEvent::QuestCompleted { .. } => self.quests_completed += 1,
                _ => {}
            }
        }
    }
}

// ── Bot ──────────────────────────────────────────────────────────────

fn bot_step(world: &mut World, stats: &mut SimStats, rng: &mut StdRng) {
    let ready = world
        .player
        .quests
        .active
        .as_ref()
        .is_some_and(|q| q.ready_to_turn_in);
    if ready {
        let _ = world.complete_quest();
    }
    if world.player.quests.active.is_none() {
        if let Some(quest) = quest_for_level(world.player.level()) {
            if !world.player.quests.is_completed(&quest.id) {
                let _ = world.accept_quest(&quest.id);
            }
        }
    }

    while world.player.progression.stat_points > 0 {
        let kind = if world.player.stats.str <= world.player.stats.vit * 2 {
            StatKind::Str
        } else {
            StatKind::Vit
        };
        if world.increase_stat(kind).is_err() {
            break;
        }
    }
    while world.player.progression.skill_points > 0 {
        let spent = SKILL_PRIORITY
            .iter()
            .any(|&slot| world.level_up_skill(slot).is_ok());
        if !spent {
            break;
        }
    }

    let max_hp = world.player.derived().max_hp as f64;
    if (world.player.hp as f64) < max_hp * POTION_THRESHOLD && world.use_potion().is_ok() {
        stats.potions_used += 1;
    }

    if world.nearest_drop(world.config.interact_radius).is_some() {
        if let Ok(taken) = world.pickup_nearby() {
            stats.drops_collected += taken as u64;
        }
    }

    let origin = world.player.position;
    let target = world
        .actors
        .iter()
        .filter(|a| a.is_targetable())
        .min_by(|a, b| {
            origin
                .flat_distance(&a.position)
                .total_cmp(&origin.flat_distance(&b.position))
        })
        .map(|a| (a.position, origin.flat_distance(&a.position)));

    let Some((position, distance)) = target else {
        world.set_movement(MoveIntent::default());
        return;
    };

    let heading = origin.heading_to(&position);
    if distance > ENGAGE_RANGE {
        world.set_movement(MoveIntent::towards(heading));
        return;
    }

    world.set_movement(MoveIntent::default());
    world.face(heading);
    for slot in 0..SKILL_PRIORITY.len() {
        if prepare_cast(&world.player, slot).is_ok() && world.activate_skill(slot, rng).is_ok() {
            stats.skills_cast += 1;
        }
    }
    if !world.combo.swinging {
        let _ = world.start_attack();
    }
}

// ── Core Simulation Loop ─────────────────────────────────────────────

fn run_simulation(config: &SimConfig, world_config: WorldConfig) -> (SimStats, World) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut world = World::new(world_config, &mut rng);
    let mut stats = SimStats::default();
    let steps = (config.seconds / config.delta).ceil() as u64;

    for step in 0..steps {
        if world.is_defeated() {
            stats.deaths += 1;
            tracing::info!(second = world.elapsed, "bot defeated, resetting");
            world.reset(&mut rng);
        }
        bot_step(&mut world, &mut stats, &mut rng);
        let result = tick(&mut world, config.delta, &mut rng);
        stats.process_tick(step as f64 * config.delta, &result);

        if !config.quiet && step % (60.0 / config.delta).max(1.0) as u64 == 0 {
            tracing::debug!(
                second = world.elapsed,
                level = world.player.level(),
                hp = world.player.hp,
                kills = stats.kills,
                "progress"
            );
        }
    }

    (stats, world)
}

fn print_report(config: &SimConfig, stats: &SimStats, world: &World) {
    let player = &world.player;
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              METIN HEADLESS SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("Build: {}", version_line());
    println!();
    println!("Configuration:");
    println!("  Seed:           {}", config.seed);
    println!("  Seconds:        {}", config.seconds);
    println!("  Delta:          {}", config.delta);
    println!();
    println!("Results:");
    println!("  Ticks:          {}", stats.ticks);
    println!("  Kills:          {}", stats.kills);
    println!("  Deaths:         {}", stats.deaths);
    println!("  Hits / crits:   {} / {}", stats.hits, stats.crits);
    println!("  XP gained:      {}", stats.xp_gained);
    println!("  Damage taken:   {}", stats.damage_taken);
    println!("  Drops picked:   {}", stats.drops_collected);
    println!("  Potions used:   {}", stats.potions_used);
    println!("  Skills cast:    {}", stats.skills_cast);
    println!("  Waves:          {}", stats.waves_triggered);
    println!("  Quests done:    {}", stats.quests_completed);
    println!("  Autosaves:      {}", stats.autosaves);
    println!();
    println!("Final character:");
    println!("  Level:          {} ({} xp)", player.level(), player.progression.xp);
    println!("  HP / MP:        {} / {:.0}", player.hp, player.mp);
    println!("  Yang:           {}", player.yang);
    println!(
        "  Stats:          STR {} DEX {} VIT {} INT {}",
        player.stats.str, player.stats.dex, player.stats.vit, player.stats.int
    );
    if !stats.level_at_second.is_empty() {
        println!();
        println!("Level curve:");
        for (level, second) in &stats.level_at_second {
            println!("  Lv {level:>3} at {second:>8.1}s");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };
    let world_config = match load_world_config(config.config_path.as_deref()) {
        Ok(world_config) => world_config,
        Err(message) => {
            eprintln!("Invalid config: {message}");
            process::exit(1);
        }
    };

    let (stats, world) = run_simulation(&config, world_config);

    if config.quiet {
        println!(
            "seed={} level={} kills={} deaths={} yang={} drops={}",
            config.seed,
            world.player.level(),
            stats.kills,
            stats.deaths,
            world.player.yang,
            stats.drops_collected
        );
    } else {
        print_report(&config, &stats, &world);
    }

    if let Some(path) = &config.save_path {
        let manager = SaveManager::with_path(path);
        match manager.save(&world.to_save()) {
            Ok(()) => println!("Saved character to {}", manager.path().display()),
            Err(e) => {
                eprintln!("Failed to save: {e}");
                process::exit(1);
            }
        }
    }
}
