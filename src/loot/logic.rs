use super::types::{Drop, DropContents};
use crate::content::loot_tables::{LootReward, LootTable};
use crate::core::constants::*;
use crate::core::geometry::Position;
use crate::items::{create_item, ItemIdAllocator};
use rand::Rng;

/// Id sources used while rolling.
pub struct LootIds<'a> {
    pub drops: &'a mut u64,
    pub items: &'a mut ItemIdAllocator,
}

impl LootIds<'_> {
    fn next_drop(&mut self) -> u64 {
        let id = *self.drops;
        *self.drops += 1;
        id
    }
}

/// Random point 0.5 to 2.0 units from `origin`.
pub fn scatter<R: Rng>(origin: &Position, rng: &mut R) -> Position {
    let angle = rng.gen::<f64>() * FULL_CIRCLE;
    let dist = DROP_SCATTER_MIN + rng.gen::<f64>() * DROP_SCATTER_SPAN;
    origin.offset(angle, dist)
}

/// Rolls a loot table.
///
/// Every roll checks every entry on its own; one roll can yield several
/// drops and a table with `roll_count` 3 evaluates its entries three times.
pub fn roll_loot<R: Rng>(
    table: &LootTable,
    origin: &Position,
    now: f64,
    ids: &mut LootIds<'_>,
    rng: &mut R,
) -> Vec<Drop> {
    let mut drops = Vec::new();

    for _ in 0..table.roll_count.max(1) {
        for entry in table.entries {
            if rng.gen::<f64>() >= entry.chance {
                continue;
            }
            let quantity = rng.gen_range(entry.min_quantity..=entry.max_quantity.max(entry.min_quantity));
            let position = scatter(origin, rng);

            let (contents, lifetime) = match entry.reward {
                LootReward::Gold => (DropContents::Yang(quantity as u64), GOLD_DESPAWN_SECONDS),
                LootReward::Item(template_id) => match create_item(template_id, quantity, ids.items) {
                    Some(item) => (DropContents::Item(item), ITEM_DESPAWN_SECONDS),
                    None => {
                        tracing::warn!(table = table.id, item = template_id, "unknown item in loot table");
                        continue;
                    }
                },
            };

            drops.push(Drop {
                id: ids.next_drop(),
                position,
                contents,
                created_at: now,
                despawn_at: now + lifetime,
            });
        }
    }

    tracing::debug!(table = table.id, drops = drops.len(), "loot rolled");
    drops
}

/// Removes expired drops. Returns how many were removed.
pub fn purge_expired(drops: &mut Vec<Drop>, now: f64) -> usize {
    let before = drops.len();
    drops.retain(|d| !d.is_expired(now));
    before - drops.len()
}
