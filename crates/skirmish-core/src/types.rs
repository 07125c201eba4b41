//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::REFERENCE_FRAME_MS;

/// 2D position in world space (screen-like units, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// 2D velocity in world units per reference frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking. The clock is driven by the caller's frame delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl Position {
    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    /// Speed magnitude.
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl SimTime {
    /// Advance by one tick of `delta_ms` milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += delta_ms;
    }
}

/// Fraction of a 60Hz reference frame covered by `delta_ms`.
///
/// Speeds are expressed per reference frame, so displacement over a tick is
/// `velocity * frame_scale(delta_ms)`.
pub fn frame_scale(delta_ms: f64) -> f32 {
    (delta_ms / REFERENCE_FRAME_MS) as f32
}
