//! Steering-driven unit movement.
//!
//! Every active unit blends its steering behaviors against its own team's
//! roster, then integrates velocity and position. Docked units are not
//! touched here.

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Facing, Health, Nebula, UnitId, WanderHeading};
use skirmish_core::constants::{HEADING_MIN_SPEED, HEADING_OFFSET, VELOCITY_SMOOTHING};
use skirmish_core::enums::{Team, UnitClass};
use skirmish_core::types::{frame_scale, Position, Velocity};
use skirmish_steering::{blend, AgentState, SteeringAgent, SteeringConfig};

use crate::roster::Rosters;

/// Seek target per team for this tick. `None` means wander.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamTargets {
    pub player: Option<Vec2>,
    pub enemy: Option<Vec2>,
}

impl TeamTargets {
    pub fn for_team(&self, team: Team) -> Option<Vec2> {
        match team {
            Team::Player => self.player,
            Team::Enemy => self.enemy,
        }
    }
}

/// Base max speed scaled by the first field that contains `position`.
/// Fields never stack.
pub fn effective_max_speed(base: f32, position: Vec2, fields: &[(Vec2, Nebula)]) -> f32 {
    fields
        .iter()
        .find(|(center, nebula)| position.distance(*center) < nebula.radius)
        .map_or(base, |(_, nebula)| base * nebula.slow_factor)
}

/// Apply a raw steering sum to a velocity: clamp to max force, divide by
/// mass, smooth, then cap at `max_speed`.
pub fn apply_steering(velocity: Vec2, steering: Vec2, max_force: f32, mass: f32, max_speed: f32) -> Vec2 {
    let accel = steering.clamp_length_max(max_force) / mass;
    velocity
        .lerp(velocity + accel, VELOCITY_SMOOTHING)
        .clamp_length_max(max_speed)
}

/// Facing for a velocity, or `current` when the unit is nearly still.
pub fn facing_for(velocity: &Velocity, current: f32) -> f32 {
    if velocity.speed() > HEADING_MIN_SPEED {
        velocity.0.y.atan2(velocity.0.x) + HEADING_OFFSET
    } else {
        current
    }
}

/// Integrate every active unit for one tick.
pub fn run(
    world: &mut World,
    rosters: &Rosters,
    targets: &TeamTargets,
    steering: &SteeringConfig,
    rng: &mut ChaCha8Rng,
    delta_ms: f64,
) {
    let fields: Vec<(Vec2, Nebula)> = world
        .query::<(&Position, &Nebula)>()
        .iter()
        .map(|(_, (pos, nebula))| (pos.0, *nebula))
        .collect();

    let player_agents: Vec<AgentState> = rosters.player.iter().map(|e| e.agent).collect();
    let enemy_agents: Vec<AgentState> = rosters.enemy.iter().map(|e| e.agent).collect();
    let scale = frame_scale(delta_ms);

    // Id order keeps the rng draw sequence stable for a given seed.
    let mut order: Vec<(UnitId, hecs::Entity)> = rosters.all().map(|e| (e.id, e.entity)).collect();
    order.sort_by_key(|(id, _)| *id);

    for (_, entity) in order {
        let Ok((health, team, class, pos, vel, heading, facing)) = world.query_one_mut::<(
            &Health,
            &Team,
            &UnitClass,
            &mut Position,
            &mut Velocity,
            &mut WanderHeading,
            &mut Facing,
        )>(entity) else {
            continue;
        };
        // Killed earlier this tick; still a neighbor, no longer moves.
        if health.current <= 0.0 {
            continue;
        }

        let profile = class.profile();
        let agent = AgentState {
            position: pos.0,
            velocity: vel.0,
            max_speed: profile.max_speed,
            max_force: profile.max_force,
            mass: profile.mass,
        };
        let neighbors = match team {
            Team::Player => &player_agents,
            Team::Enemy => &enemy_agents,
        };

        let max_speed = effective_max_speed(agent.max_speed(), agent.position(), &fields);
        let steer = blend::accumulate(
            &agent,
            neighbors,
            targets.for_team(*team),
            &mut heading.0,
            steering,
            rng,
        );
        vel.0 = apply_steering(vel.0, steer, agent.max_force(), agent.mass(), max_speed);
        pos.0 += vel.0 * scale;
        facing.0 = facing_for(vel, facing.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nebula(radius: f32) -> Nebula {
        Nebula {
            radius,
            slow_factor: 0.4,
        }
    }

    #[test]
    fn test_speed_unchanged_outside_fields() {
        let fields = [(Vec2::ZERO, nebula(50.0))];
        assert_eq!(effective_max_speed(2.5, Vec2::new(100.0, 0.0), &fields), 2.5);
    }

    #[test]
    fn test_first_matching_field_wins() {
        let fields = [
            (Vec2::ZERO, nebula(50.0)),
            (
                Vec2::ZERO,
                Nebula {
                    radius: 80.0,
                    slow_factor: 0.1,
                },
            ),
        ];
        let speed = effective_max_speed(2.5, Vec2::new(10.0, 0.0), &fields);
        assert!((speed - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_field_boundary_is_exclusive() {
        let fields = [(Vec2::ZERO, nebula(50.0))];
        assert_eq!(effective_max_speed(2.5, Vec2::new(50.0, 0.0), &fields), 2.5);
    }

    #[test]
    fn test_steering_clamped_by_force_and_mass() {
        let v = apply_steering(Vec2::ZERO, Vec2::new(10.0, 0.0), 0.1, 1.0, 2.5);
        // clamp to 0.1, lerp 10% of the way
        assert!((v.x - 0.01).abs() < 1e-6);
        assert_eq!(v.y, 0.0);

        let heavy = apply_steering(Vec2::ZERO, Vec2::new(10.0, 0.0), 0.1, 2.5, 2.5);
        assert!(heavy.x < v.x);
    }

    #[test]
    fn test_velocity_capped_at_max_speed() {
        let v = apply_steering(Vec2::new(5.0, 0.0), Vec2::ZERO, 0.1, 1.0, 2.5);
        assert!((v.length() - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_facing_points_nose_along_velocity() {
        let f = facing_for(&Velocity(Vec2::new(1.0, 0.0)), 0.0);
        assert!((f - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_dead_units_do_not_move() {
        use rand::SeedableRng;

        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let spawn = |world: &mut World, rng: &mut ChaCha8Rng, id: u32, x: f32| {
            crate::world_setup::spawn_unit(
                world,
                rng,
                UnitId(id),
                Team::Player,
                UnitClass::Scout,
                Vec2::new(x, 100.0),
                2,
            )
        };
        let dead = spawn(&mut world, &mut rng, 0, 100.0);
        let alive = spawn(&mut world, &mut rng, 1, 120.0);
        world.get::<&mut Health>(dead).unwrap().current = 0.0;
        for entity in [dead, alive] {
            world.get::<&mut Velocity>(entity).unwrap().0 = Vec2::new(10.0, 0.0);
        }

        let rosters = Rosters::gather(&world);
        run(
            &mut world,
            &rosters,
            &TeamTargets::default(),
            &SteeringConfig::default(),
            &mut rng,
            16.6,
        );

        assert_eq!(world.get::<&Position>(dead).unwrap().0, Vec2::new(100.0, 100.0));
        assert_eq!(world.get::<&Velocity>(dead).unwrap().0, Vec2::new(10.0, 0.0));
        assert!(world.get::<&Position>(alive).unwrap().0.x > 120.0);
    }

    #[test]
    fn test_facing_held_when_slow() {
        assert_eq!(facing_for(&Velocity(Vec2::new(0.05, 0.0)), 1.25), 1.25);
    }
}
