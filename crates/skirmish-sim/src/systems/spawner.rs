//! Periodic reinforcement spawning at owned capture nodes.

use glam::Vec2;
use hecs::World;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::components::{CaptureNode, UnitId};
use skirmish_core::enums::{Team, UnitClass};
use skirmish_core::events::BattleEvent;
use skirmish_core::types::Position;

use crate::roster::roster_size;
use crate::world_setup::{allocate_id, spawn_unit};

/// Reinforcement timer, measured in simulated milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimer {
    pub last_spawn_ms: f64,
}

impl SpawnTimer {
    /// True once a full `interval_ms` has passed since the last sweep.
    pub fn is_due(&self, now_ms: f64, interval_ms: f64) -> bool {
        now_ms - self.last_spawn_ms >= interval_ms
    }
}

/// Parameters shared by every spawn in a sweep.
pub struct SpawnRules<'a> {
    pub interval_ms: f64,
    pub roster_cap: usize,
    pub classes: &'a [UnitClass],
    pub hangar_capacity: usize,
}

/// When the timer is due, spawn one unit at every owned node whose team is
/// below the cap, then reset the timer once.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    now_ms: f64,
    rules: &SpawnRules<'_>,
    next_unit_id: &mut u32,
    events: &mut Vec<BattleEvent>,
) {
    if !timer.is_due(now_ms, rules.interval_ms) {
        return;
    }

    let mut sites: Vec<(u32, Team, Vec2)> = world
        .query::<(&Position, &CaptureNode)>()
        .iter()
        .filter_map(|(_, (pos, node))| node.owner.team().map(|team| (node.index, team, pos.0)))
        .collect();
    sites.sort_by_key(|(index, _, _)| *index);

    for (index, team, position) in sites {
        if roster_size(world, team) >= rules.roster_cap {
            continue;
        }
        let Some(&class) = rules.classes.choose(rng) else {
            continue;
        };
        let id: UnitId = allocate_id(next_unit_id);
        spawn_unit(world, rng, id, team, class, position, rules.hangar_capacity);
        debug!(unit = id.0, ?team, ?class, node = index, "reinforcement spawned");
        events.push(BattleEvent::UnitSpawned {
            unit: id,
            team,
            class,
        });
    }

    timer.last_spawn_ms = now_ms;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_due_at_full_interval() {
        let timer = SpawnTimer::default();
        assert!(!timer.is_due(2999.9, 3000.0));
        assert!(timer.is_due(3000.0, 3000.0));
    }

    #[test]
    fn test_timer_measures_from_last_spawn() {
        let timer = SpawnTimer {
            last_spawn_ms: 3100.0,
        };
        assert!(!timer.is_due(6000.0, 3000.0));
        assert!(timer.is_due(6100.0, 3000.0));
    }
}
