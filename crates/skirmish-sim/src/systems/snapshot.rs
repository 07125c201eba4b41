//! Snapshot system: queries the ECS world and builds a complete BattleSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use skirmish_core::components::*;
use skirmish_core::enums::*;
use skirmish_core::events::{BattleEvent, CombatEvent};
use skirmish_core::state::*;
use skirmish_core::types::{Position, SimTime, Velocity};

use crate::roster::roster_size;

/// Build a complete BattleSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    combat_events: Vec<CombatEvent>,
    battle_events: Vec<BattleEvent>,
    victor: Option<Team>,
) -> BattleSnapshot {
    BattleSnapshot {
        time: *time,
        phase,
        units: build_units(world),
        nodes: build_nodes(world),
        nebulae: build_nebulae(world),
        asteroids: build_asteroids(world),
        combat_events,
        battle_events,
        rosters: RosterView {
            player: roster_size(world, Team::Player),
            enemy: roster_size(world, Team::Enemy),
        },
        victor,
    }
}

/// Build UnitView list, ordered by unit id.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(
            &UnitId,
            &Team,
            &UnitClass,
            &UnitKind,
            &Position,
            &Velocity,
            &Health,
            &Facing,
            Option<&Docked>,
        )>()
        .iter()
        .map(
            |(_, (id, team, class, kind, pos, vel, health, facing, docked))| {
                let profile = class.profile();
                UnitView {
                    id: *id,
                    team: *team,
                    class: *class,
                    kind: *kind,
                    position: pos.0,
                    velocity: vel.0,
                    hp: health.current,
                    max_hp: profile.base_hp,
                    color: profile.color,
                    facing: facing.0,
                    docked: docked.is_some(),
                }
            },
        )
        .collect();

    units.sort_by_key(|u| u.id);
    units
}

/// Build NodeView list in scenario order.
fn build_nodes(world: &World) -> Vec<NodeView> {
    let mut nodes: Vec<NodeView> = world
        .query::<(&Position, &CaptureNode)>()
        .iter()
        .map(|(_, (pos, node))| NodeView {
            index: node.index,
            position: pos.0,
            owner: node.owner,
            progress: node.progress,
            color: node.owner.color(),
        })
        .collect();

    nodes.sort_by_key(|n| n.index);
    nodes
}

fn build_nebulae(world: &World) -> Vec<NebulaView> {
    world
        .query::<(&Position, &Nebula)>()
        .iter()
        .map(|(_, (pos, nebula))| NebulaView {
            position: pos.0,
            radius: nebula.radius,
            slow_factor: nebula.slow_factor,
        })
        .collect()
}

fn build_asteroids(world: &World) -> Vec<AsteroidView> {
    world
        .query::<(&Position, &Asteroid)>()
        .iter()
        .map(|(_, (pos, asteroid))| AsteroidView {
            position: pos.0,
            radius: asteroid.radius,
            rotation: asteroid.rotation,
        })
        .collect()
}
