//! Hazard system: asteroid drift and overlap damage.

use glam::Vec2;
use hecs::World;

use skirmish_core::components::{Asteroid, Health};
use skirmish_core::constants::ASTEROID_SPIN_PER_FRAME;
use skirmish_core::types::{frame_scale, Position, Velocity};

use crate::roster::Rosters;

/// Advance asteroids and drain HP from every active unit inside one.
///
/// Drift is in world units per second. Positions wrap around `world_size`
/// when it is non-zero.
pub fn run(world: &mut World, rosters: &Rosters, world_size: Vec2, delta_ms: f64) {
    let secs = (delta_ms / 1000.0) as f32;
    let mut hazards = Vec::new();

    for (_entity, (pos, vel, asteroid)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Asteroid)>()
    {
        pos.0 += vel.0 * secs;
        if world_size.x > 0.0 && world_size.y > 0.0 {
            pos.0 = pos.0.rem_euclid(world_size);
        }
        asteroid.rotation =
            (asteroid.rotation + ASTEROID_SPIN_PER_FRAME * frame_scale(delta_ms))
                .rem_euclid(std::f32::consts::TAU);
        hazards.push((pos.0, asteroid.radius, asteroid.damage_per_sec * secs));
    }

    for unit in rosters.all() {
        let drain: f32 = hazards
            .iter()
            .filter(|(center, radius, _)| unit.agent.position.distance(*center) < *radius)
            .map(|(_, _, damage)| damage)
            .sum();
        if drain > 0.0 {
            if let Ok(mut health) = world.get::<&mut Health>(unit.entity) {
                health.current -= drain;
            }
        }
    }
}
