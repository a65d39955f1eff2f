//! Totem reinforcement waves.

use super::types::{Actor, ActorKind};
use crate::content::enemies::{TotemTemplate, WaveConfig};

/// Marks and returns every wave whose threshold the totem's current health
/// has reached. Each wave fires at most once per totem.
///
/// The caller spawns the returned waves after it is done with `actor`, so
/// new actors are only ever appended to the population.
pub fn due_waves(actor: &mut Actor, template: &'static TotemTemplate) -> Vec<&'static WaveConfig> {
    let hp_percent = actor.hp_percent();
    let ActorKind::Totem { triggered_waves } = &mut actor.kind else {
        return Vec::new();
    };

    let mut due = Vec::new();
    for wave in template.waves {
        if hp_percent <= wave.trigger_hp_percent && triggered_waves.insert(wave.wave_index) {
            tracing::debug!(
                totem = actor.id,
                wave = wave.wave_index,
                spawn = wave.spawn_template,
                count = wave.count,
                "totem wave triggered"
            );
            due.push(wave);
        }
    }
    due
}
