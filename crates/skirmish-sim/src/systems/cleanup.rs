//! Cleanup system: removes destroyed units.

use hecs::{Entity, World};
use tracing::debug;

use skirmish_core::components::{Health, UnitId};
use skirmish_core::enums::Team;
use skirmish_core::events::BattleEvent;

use crate::roster::find_unit;
use crate::systems::hangar::docked_units;

/// Despawn every unit at or below zero HP. Units stowed in a destroyed
/// carrier go down with it.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<BattleEvent>) {
    despawn_buffer.clear();

    for (entity, health) in world.query_mut::<&Health>() {
        if health.current <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    // Cargo of dead carriers.
    let carriers = despawn_buffer.len();
    for i in 0..carriers {
        for unit in docked_units(world, despawn_buffer[i]) {
            if let Some(entity) = find_unit(world, unit) {
                if !despawn_buffer.contains(&entity) {
                    despawn_buffer.push(entity);
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let ids = world
            .query_one_mut::<(&UnitId, &Team)>(entity)
            .map(|(unit, team)| (*unit, *team));
        let Ok((unit, team)) = ids else {
            continue;
        };
        let _ = world.despawn(entity);
        debug!(unit = unit.0, ?team, "unit destroyed");
        events.push(BattleEvent::UnitDestroyed { unit, team });
    }
}
