//! Entity spawn factories for setting up the battle world.
//!
//! Creates units, capture nodes, nebulae, and asteroids with the
//! appropriate component bundles.

use glam::Vec2;
use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::enums::*;
use skirmish_core::types::{Position, Velocity};

use crate::scenario::Scenario;

/// Populate an empty world from a scenario. Returns the ids of every unit
/// created, in spawn order.
pub fn setup_battle(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    scenario: &Scenario,
    next_unit_id: &mut u32,
    hangar_capacity: usize,
) -> Vec<(UnitId, Team, UnitClass)> {
    for (index, node) in scenario.nodes.iter().enumerate() {
        spawn_node(world, index as u32, node.position, node.owner);
    }
    for nebula in &scenario.nebulae {
        spawn_nebula(world, nebula.position, nebula.radius, nebula.slow_factor);
    }
    for asteroid in &scenario.asteroids {
        let drift = asteroid.velocity.unwrap_or_else(|| random_drift(rng));
        spawn_asteroid(world, asteroid.position, drift);
    }

    let mut spawned = Vec::new();
    for fleet in &scenario.fleets {
        for _ in 0..fleet.count {
            let class = fleet
                .classes
                .choose(rng)
                .copied()
                .unwrap_or(UnitClass::Fighter);
            let offset = Vec2::new(
                rng.gen::<f32>() * fleet.extent.x,
                (rng.gen::<f32>() - 0.5) * fleet.extent.y,
            );
            let id = allocate_id(next_unit_id);
            spawn_unit(
                world,
                rng,
                id,
                fleet.team,
                class,
                fleet.origin + offset,
                hangar_capacity,
            );
            spawned.push((id, fleet.team, class));
        }
    }
    for unit in &scenario.units {
        let id = allocate_id(next_unit_id);
        spawn_unit(
            world,
            rng,
            id,
            unit.team,
            unit.class,
            unit.position,
            hangar_capacity,
        );
        spawned.push((id, unit.team, unit.class));
    }
    spawned
}

/// Hand out the next unit id.
pub fn allocate_id(next_unit_id: &mut u32) -> UnitId {
    let id = UnitId(*next_unit_id);
    *next_unit_id += 1;
    id
}

/// Spawn a unit at full HP with a small random velocity and wander heading.
/// Frigates get an empty hangar.
pub fn spawn_unit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: UnitId,
    team: Team,
    class: UnitClass,
    position: Vec2,
    hangar_capacity: usize,
) -> hecs::Entity {
    let profile = class.profile();
    let velocity = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5);
    let heading = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5)
        .try_normalize()
        .unwrap_or(Vec2::X);
    let kind = class.kind();

    let entity = world.spawn((
        id,
        team,
        class,
        kind,
        Position(position),
        Velocity(velocity),
        Health {
            current: profile.base_hp,
        },
        WanderHeading(heading),
        Facing::default(),
    ));

    if kind == UnitKind::Frigate {
        let _ = world.insert_one(
            entity,
            Hangar {
                capacity: hangar_capacity,
                docked: Vec::new(),
            },
        );
    }

    entity
}

/// Spawn a capture node. Owned nodes start fully captured.
pub fn spawn_node(world: &mut World, index: u32, position: Vec2, owner: NodeOwner) -> hecs::Entity {
    let progress = match owner {
        NodeOwner::Player => CAPTURE_PROGRESS_MAX,
        NodeOwner::Enemy => -CAPTURE_PROGRESS_MAX,
        NodeOwner::Neutral => 0.0,
    };
    world.spawn((
        Position(position),
        CaptureNode {
            index,
            owner,
            progress,
        },
    ))
}

pub fn spawn_nebula(world: &mut World, position: Vec2, radius: f32, slow_factor: f32) -> hecs::Entity {
    world.spawn((
        Position(position),
        Nebula {
            radius,
            slow_factor: slow_factor.clamp(0.0, 1.0),
        },
    ))
}

pub fn spawn_asteroid(world: &mut World, position: Vec2, drift: Vec2) -> hecs::Entity {
    world.spawn((
        Position(position),
        Velocity(drift),
        Asteroid {
            radius: ASTEROID_RADIUS,
            damage_per_sec: ASTEROID_DAMAGE_PER_SEC,
            rotation: 0.0,
        },
    ))
}

/// Random drift with each axis in [-ASTEROID_MAX_DRIFT, ASTEROID_MAX_DRIFT].
fn random_drift(rng: &mut ChaCha8Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(-ASTEROID_MAX_DRIFT..=ASTEROID_MAX_DRIFT),
        rng.gen_range(-ASTEROID_MAX_DRIFT..=ASTEROID_MAX_DRIFT),
    )
}
