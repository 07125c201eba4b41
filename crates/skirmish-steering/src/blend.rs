//! Weighted combination of behaviors for one unit tick.

use glam::Vec2;
use rand::Rng;

use crate::agent::SteeringAgent;
use crate::behaviors::{align, cohesion, separate, seek_jittered, wander};
use crate::config::SteeringConfig;

/// Accumulate the weighted steering deltas for one agent.
///
/// Separation always applies. Cohesion and alignment apply only when the
/// agent has neighbors. A target switches the goal term from wander to seek;
/// the two are never combined in one call.
///
/// The result is the raw sum: clamping by max force and dividing by mass is
/// left to the integrator.
pub fn accumulate<A, N, R>(
    agent: &A,
    neighbors: &[N],
    target: Option<Vec2>,
    wander_heading: &mut Vec2,
    config: &SteeringConfig,
    rng: &mut R,
) -> Vec2
where
    A: SteeringAgent + ?Sized,
    N: SteeringAgent,
    R: Rng + ?Sized,
{
    let mut total = separate(agent, neighbors, config.separation_radius) * config.separation_weight;

    if !neighbors.is_empty() {
        total += cohesion(agent, neighbors, config.flock_radius) * config.cohesion_weight;
        total += align(agent, neighbors, config.flock_radius) * config.alignment_weight;
    }

    total += match target {
        Some(target) => {
            seek_jittered(agent, target, config.seek_jitter, rng) * config.seek_weight
        }
        None => {
            wander(
                agent,
                wander_heading,
                config.wander_distance,
                config.wander_radius,
                config.wander_jitter,
                rng,
            ) * config.wander_weight
        }
    };

    total
}
