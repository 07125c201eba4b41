use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::agent::AgentState;
use crate::behaviors::*;
use crate::blend::accumulate;
use crate::config::SteeringConfig;

fn agent_at(x: f32, y: f32) -> AgentState {
    AgentState {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        max_speed: 2.5,
        max_force: 0.1,
        mass: 1.0,
    }
}

fn moving(mut agent: AgentState, vx: f32, vy: f32) -> AgentState {
    agent.velocity = Vec2::new(vx, vy);
    agent
}

fn assert_vec_eq(a: Vec2, b: Vec2) {
    assert!(
        (a - b).length() < 1e-5,
        "expected {b:?}, got {a:?} (diff {})",
        (a - b).length()
    );
}

// ---- Seek / flee ----

#[test]
fn test_seek_from_rest_points_at_target_at_max_speed() {
    let agent = agent_at(0.0, 0.0);
    let delta = seek(&agent, Vec2::new(100.0, 0.0));
    assert_vec_eq(delta, Vec2::new(2.5, 0.0));
}

#[test]
fn test_seek_subtracts_current_velocity() {
    let agent = moving(agent_at(0.0, 0.0), 0.0, 1.0);
    let delta = seek(&agent, Vec2::new(0.0, -50.0));
    assert_vec_eq(delta, Vec2::new(0.0, -3.5));
}

#[test]
fn test_seek_at_target_is_zero_not_nan() {
    let agent = moving(agent_at(5.0, 5.0), 1.0, 1.0);
    let delta = seek(&agent, Vec2::new(5.0, 5.0));
    assert!(delta.is_finite());
    assert_eq!(delta, Vec2::ZERO);
}

#[test]
fn test_seek_already_at_speed_toward_target_is_zero() {
    let agent = moving(agent_at(0.0, 0.0), 2.5, 0.0);
    let delta = seek(&agent, Vec2::new(10.0, 0.0));
    assert_vec_eq(delta, Vec2::ZERO);
}

#[test]
fn test_seek_jittered_zero_jitter_matches_seek() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let agent = moving(agent_at(3.0, -2.0), 0.5, 0.2);
    let target = Vec2::new(40.0, 12.0);
    assert_vec_eq(
        seek_jittered(&agent, target, 0.0, &mut rng),
        seek(&agent, target),
    );
}

#[test]
fn test_seek_jittered_stays_near_seek_direction() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let agent = agent_at(0.0, 0.0);
    for _ in 0..100 {
        let delta = seek_jittered(&agent, Vec2::new(1000.0, 0.0), 10.0, &mut rng);
        // Jitter of +-5 on a target 1000 away barely moves the heading.
        assert!(delta.x > 2.49);
        assert!(delta.y.abs() < 0.02);
    }
}

#[test]
fn test_flee_mirrors_seek() {
    let agent = agent_at(0.0, 0.0);
    let target = Vec2::new(30.0, 40.0);
    assert_vec_eq(flee(&agent, target), -seek(&agent, target));
}

#[test]
fn test_flee_from_own_position_is_zero() {
    let agent = moving(agent_at(1.0, 1.0), 1.0, 0.0);
    assert_eq!(flee(&agent, Vec2::new(1.0, 1.0)), Vec2::ZERO);
}

// ---- Arrive ----

#[test]
fn test_arrive_outside_threshold_is_full_speed() {
    let agent = agent_at(0.0, 0.0);
    let delta = arrive(&agent, Vec2::new(500.0, 0.0), 100.0);
    assert_vec_eq(delta, Vec2::new(2.5, 0.0));
}

#[test]
fn test_arrive_decelerates_linearly_inside_threshold() {
    let agent = agent_at(0.0, 0.0);
    let delta = arrive(&agent, Vec2::new(50.0, 0.0), 100.0);
    assert_vec_eq(delta, Vec2::new(1.25, 0.0));
}

#[test]
fn test_arrive_shrinks_as_distance_closes() {
    let agent = agent_at(0.0, 0.0);
    let mut previous = f32::MAX;
    for d in [90.0, 60.0, 30.0, 10.0, 1.0] {
        let mag = arrive(&agent, Vec2::new(d, 0.0), 100.0).length();
        assert!(mag < previous, "arrive delta should shrink, {mag} >= {previous}");
        previous = mag;
    }
}

#[test]
fn test_arrive_at_target_brakes() {
    let agent = moving(agent_at(0.0, 0.0), 1.0, -1.0);
    let delta = arrive(&agent, Vec2::ZERO, 100.0);
    assert_vec_eq(delta, Vec2::new(-1.0, 1.0));
}

// ---- Wander ----

#[test]
fn test_wander_keeps_heading_on_circle() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let agent = moving(agent_at(0.0, 0.0), 1.0, 0.0);
    let mut heading = Vec2::new(0.3, -0.7);
    for _ in 0..50 {
        let delta = wander(&agent, &mut heading, 50.0, 20.0, 5.0, &mut rng);
        assert!(delta.is_finite());
        assert!((heading.length() - 20.0).abs() < 1e-3);
    }
}

#[test]
fn test_wander_heading_evolves() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let agent = moving(agent_at(0.0, 0.0), 1.0, 0.0);
    let mut heading = Vec2::new(20.0, 0.0);
    let start = heading;
    wander(&agent, &mut heading, 50.0, 20.0, 5.0, &mut rng);
    assert_ne!(heading, start);
}

#[test]
fn test_wander_recovers_from_degenerate_heading() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let agent = agent_at(0.0, 0.0);
    let mut heading = Vec2::ZERO;
    let delta = wander(&agent, &mut heading, 50.0, 20.0, 0.0, &mut rng);
    assert!(delta.is_finite());
    assert!((heading.length() - 20.0).abs() < 1e-4);
}

// ---- Flocking ----

#[test]
fn test_separate_without_neighbors_in_radius_is_zero() {
    let agent = moving(agent_at(0.0, 0.0), 1.0, 1.0);
    let far = vec![agent_at(100.0, 0.0), agent_at(0.0, -40.0)];
    assert_eq!(separate(&agent, &far, 25.0), Vec2::ZERO);
    assert_eq!(separate(&agent, &Vec::<AgentState>::new(), 25.0), Vec2::ZERO);
}

#[test]
fn test_separate_ignores_coincident_neighbor() {
    let agent = agent_at(0.0, 0.0);
    let stacked = vec![agent_at(0.0, 0.0)];
    assert_eq!(separate(&agent, &stacked, 25.0), Vec2::ZERO);
}

#[test]
fn test_separate_pushes_away_from_neighbor() {
    let agent = agent_at(0.0, 0.0);
    let neighbors = vec![agent_at(10.0, 0.0)];
    let delta = separate(&agent, &neighbors, 25.0);
    assert_vec_eq(delta, Vec2::new(-2.5, 0.0));
}

#[test]
fn test_separate_weights_closer_neighbors_more() {
    let agent = agent_at(0.0, 0.0);
    // Close neighbor to the right, far neighbor above: push mostly left.
    let neighbors = vec![agent_at(5.0, 0.0), agent_at(0.0, 20.0)];
    let delta = separate(&agent, &neighbors, 25.0);
    assert!(delta.x < 0.0);
    assert!(delta.x.abs() > delta.y.abs());
}

#[test]
fn test_align_without_neighbors_is_zero() {
    let agent = moving(agent_at(0.0, 0.0), 1.0, 0.0);
    assert_eq!(align(&agent, &Vec::<AgentState>::new(), 50.0), Vec2::ZERO);
}

#[test]
fn test_align_matches_neighbor_heading() {
    let agent = agent_at(0.0, 0.0);
    let neighbors = vec![
        moving(agent_at(10.0, 0.0), 0.0, 2.0),
        moving(agent_at(-10.0, 0.0), 0.0, 1.0),
    ];
    let delta = align(&agent, &neighbors, 50.0);
    assert_vec_eq(delta, Vec2::new(0.0, 2.5));
}

#[test]
fn test_align_with_cancelling_velocities_is_zero() {
    let agent = moving(agent_at(0.0, 0.0), 1.0, 0.0);
    let neighbors = vec![
        moving(agent_at(10.0, 0.0), 0.0, 2.0),
        moving(agent_at(-10.0, 0.0), 0.0, -2.0),
    ];
    assert_eq!(align(&agent, &neighbors, 50.0), Vec2::ZERO);
}

#[test]
fn test_cohesion_seeks_centroid() {
    let agent = agent_at(0.0, 0.0);
    let neighbors = vec![agent_at(20.0, 10.0), agent_at(20.0, -10.0)];
    let delta = cohesion(&agent, &neighbors, 50.0);
    assert_vec_eq(delta, Vec2::new(2.5, 0.0));
}

#[test]
fn test_cohesion_out_of_range_is_zero() {
    let agent = agent_at(0.0, 0.0);
    let neighbors = vec![agent_at(200.0, 0.0)];
    assert_eq!(cohesion(&agent, &neighbors, 50.0), Vec2::ZERO);
}

// ---- Blend ----

#[test]
fn test_accumulate_with_target_does_not_touch_wander_heading() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let config = SteeringConfig {
        seek_jitter: 0.0,
        ..Default::default()
    };
    let agent = agent_at(0.0, 0.0);
    let mut heading = Vec2::new(0.0, 20.0);
    let total = accumulate(
        &agent,
        &Vec::<AgentState>::new(),
        Some(Vec2::new(100.0, 0.0)),
        &mut heading,
        &config,
        &mut rng,
    );
    assert_eq!(heading, Vec2::new(0.0, 20.0));
    assert_vec_eq(total, Vec2::new(2.5, 0.0));
}

#[test]
fn test_accumulate_without_target_wanders_at_low_weight() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let config = SteeringConfig::default();
    let agent = moving(agent_at(0.0, 0.0), 1.0, 0.0);
    let mut heading = Vec2::new(0.0, 20.0);
    let total = accumulate(
        &agent,
        &Vec::<AgentState>::new(),
        None,
        &mut heading,
        &config,
        &mut rng,
    );
    // Seek delta is bounded by max_speed + |velocity|; wander weight is 0.2.
    assert!(total.length() <= (2.5 + 1.0) * 0.2 + 1e-5);
    assert_ne!(heading, Vec2::new(0.0, 20.0));
}

#[test]
fn test_accumulate_separation_dominates_when_crowded() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let config = SteeringConfig {
        seek_jitter: 0.0,
        ..Default::default()
    };
    let agent = agent_at(0.0, 0.0);
    let neighbors = vec![agent_at(-3.0, 0.0)];
    let mut heading = Vec2::X;
    // Target straight ahead on the +x side; neighbor right behind.
    let total = accumulate(
        &agent,
        &neighbors,
        Some(Vec2::new(100.0, 0.0)),
        &mut heading,
        &config,
        &mut rng,
    );
    assert!(total.x > 2.5, "separation and seek both push +x, got {total:?}");
}
