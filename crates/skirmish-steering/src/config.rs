//! Tuning for the steering blend.

use serde::{Deserialize, Serialize};

/// Radii, wander parameters, and blend weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Distance inside which `arrive` starts to decelerate.
    pub arrival_threshold: f32,
    /// How far ahead of the agent the wander circle sits.
    pub wander_distance: f32,
    /// Radius of the wander circle.
    pub wander_radius: f32,
    /// Per-axis random offset applied to the wander heading each call.
    pub wander_jitter: f32,
    /// Per-axis random offset applied to seek targets.
    pub seek_jitter: f32,
    pub separation_radius: f32,
    /// Neighborhood radius for alignment and cohesion.
    pub flock_radius: f32,
    pub separation_weight: f32,
    pub cohesion_weight: f32,
    pub alignment_weight: f32,
    pub seek_weight: f32,
    pub wander_weight: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            arrival_threshold: 100.0,
            wander_distance: 50.0,
            wander_radius: 20.0,
            wander_jitter: 5.0,
            seek_jitter: 10.0,
            separation_radius: 25.0,
            flock_radius: 50.0,
            separation_weight: 1.5,
            cohesion_weight: 0.5,
            alignment_weight: 0.5,
            seek_weight: 1.0,
            wander_weight: 0.2,
        }
    }
}
