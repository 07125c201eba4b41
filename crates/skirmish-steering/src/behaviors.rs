//! Individual steering behaviors.
//!
//! Every function returns a steering delta, not a velocity. Zero-length
//! directions are treated as "no direction" and yield `Vec2::ZERO`.

use glam::Vec2;
use rand::Rng;

use crate::agent::SteeringAgent;

/// Full-speed desired velocity along `direction`, minus current velocity.
fn steer_along<A: SteeringAgent + ?Sized>(agent: &A, direction: Vec2) -> Vec2 {
    match direction.try_normalize() {
        Some(dir) => dir * agent.max_speed() - agent.velocity(),
        None => Vec2::ZERO,
    }
}

/// Uniform offset in [-jitter/2, jitter/2] on each axis.
fn jitter_offset<R: Rng + ?Sized>(rng: &mut R, jitter: f32) -> Vec2 {
    if jitter <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * jitter,
        (rng.gen::<f32>() - 0.5) * jitter,
    )
}

/// Steer toward `target` at full speed.
pub fn seek<A: SteeringAgent + ?Sized>(agent: &A, target: Vec2) -> Vec2 {
    steer_along(agent, target - agent.position())
}

/// Seek with the target perturbed by up to `jitter / 2` on each axis, so a
/// group ordered to one point does not collapse onto a single line.
pub fn seek_jittered<A, R>(agent: &A, target: Vec2, jitter: f32, rng: &mut R) -> Vec2
where
    A: SteeringAgent + ?Sized,
    R: Rng + ?Sized,
{
    seek(agent, target + jitter_offset(rng, jitter))
}

/// Steer directly away from `target` at full speed.
pub fn flee<A: SteeringAgent + ?Sized>(agent: &A, target: Vec2) -> Vec2 {
    steer_along(agent, agent.position() - target)
}

/// Seek that ramps desired speed down linearly inside `threshold`.
///
/// At the target the desired speed is zero, so the delta cancels the current
/// velocity.
pub fn arrive<A: SteeringAgent + ?Sized>(agent: &A, target: Vec2, threshold: f32) -> Vec2 {
    let offset = target - agent.position();
    let distance = offset.length();
    let speed = if threshold > 0.0 && distance < threshold {
        agent.max_speed() * (distance / threshold)
    } else {
        agent.max_speed()
    };
    offset.normalize_or_zero() * speed - agent.velocity()
}

/// Random walk on a circle projected ahead of the agent.
///
/// `heading` is agent-owned state: it is jittered, renormalized to `radius`,
/// and kept for the next call.
pub fn wander<A, R>(
    agent: &A,
    heading: &mut Vec2,
    distance: f32,
    radius: f32,
    jitter: f32,
    rng: &mut R,
) -> Vec2
where
    A: SteeringAgent + ?Sized,
    R: Rng + ?Sized,
{
    *heading += jitter_offset(rng, jitter);
    *heading = heading.try_normalize().unwrap_or(Vec2::X) * radius;

    let ahead = agent.velocity().normalize_or_zero() * distance;
    seek(agent, agent.position() + ahead + *heading)
}

/// Inverse-distance weighted repulsion from neighbors closer than `radius`.
pub fn separate<A, N>(agent: &A, neighbors: &[N], radius: f32) -> Vec2
where
    A: SteeringAgent + ?Sized,
    N: SteeringAgent,
{
    let mut push = Vec2::ZERO;
    let mut count = 0u32;

    for other in neighbors {
        let away = agent.position() - other.position();
        let d = away.length();
        if d > 0.0 && d < radius {
            push += away / d / d;
            count += 1;
        }
    }

    if count == 0 {
        return Vec2::ZERO;
    }
    steer_along(agent, push / count as f32)
}

/// Match the average heading of neighbors within `radius`.
pub fn align<A, N>(agent: &A, neighbors: &[N], radius: f32) -> Vec2
where
    A: SteeringAgent + ?Sized,
    N: SteeringAgent,
{
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;

    for other in neighbors {
        let d = agent.position().distance(other.position());
        if d > 0.0 && d < radius {
            sum += other.velocity();
            count += 1;
        }
    }

    if count == 0 {
        return Vec2::ZERO;
    }
    steer_along(agent, sum / count as f32)
}

/// Seek the centroid of neighbors within `radius`.
pub fn cohesion<A, N>(agent: &A, neighbors: &[N], radius: f32) -> Vec2
where
    A: SteeringAgent + ?Sized,
    N: SteeringAgent,
{
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;

    for other in neighbors {
        let d = agent.position().distance(other.position());
        if d > 0.0 && d < radius {
            sum += other.position();
            count += 1;
        }
    }

    if count == 0 {
        return Vec2::ZERO;
    }
    seek(agent, sum / count as f32)
}
