use super::types::*;
use crate::core::error::ActionError;
use crate::items::{EquipmentSlot, Inventory, SlotRef};
use rand::Rng;

/// Attempts to refine the item at `at`.
///
/// Rejections leave everything untouched. Once past them the cost is paid
/// whatever the roll: success raises the upgrade level by one, failure
/// removes the item from the inventory.
pub fn attempt_refinement<R: Rng>(
    inventory: &mut Inventory,
    yang: &mut u64,
    at: SlotRef,
    rng: &mut R,
) -> Result<RefinementOutcome, ActionError> {
    let item = inventory.get(at).ok_or(ActionError::EmptySlot)?;
    let wearable = item
        .category()
        .and_then(EquipmentSlot::for_category)
        .is_some();
    if !wearable {
        return Err(ActionError::MaxRefinement);
    }
    let step = refine_step(item.upgrade_level).ok_or(ActionError::MaxRefinement)?;
    if *yang < step.cost {
        return Err(ActionError::InsufficientYang);
    }

    *yang -= step.cost;
    let roll = rng.gen::<f64>();
    tracing::debug!(
        from = step.from_level,
        chance = step.success_chance,
        roll,
        "refinement roll"
    );

    if roll <= step.success_chance {
        let item = inventory.get_mut(at).ok_or(ActionError::EmptySlot)?;
        item.upgrade_level += 1;
        Ok(RefinementOutcome::Upgraded {
            new_level: item.upgrade_level,
            cost: step.cost,
        })
    } else {
        let item = inventory.take(at).ok_or(ActionError::EmptySlot)?;
        Ok(RefinementOutcome::Destroyed {
            item,
            cost: step.cost,
        })
    }
}
