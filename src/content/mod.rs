//! Static game content: pure data, no behavior.

pub mod enemies;
pub mod items;
pub mod loot_tables;
pub mod npcs;
pub mod quests;
pub mod skills;

pub use enemies::{enemy_template, hostile_name, totem_template, EnemyTemplate, TotemTemplate};
pub use items::item_template;
pub use loot_tables::loot_table;
pub use npcs::{npc_definition, shop_definition, NpcRole};
pub use quests::{quest_by_id, quest_for_level, QuestDefinition};
pub use skills::skill_definition;
