//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::NodeOwner;

/// Stable identity of a unit, assigned by the engine at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Hit points. A unit is removed once `current` drops to zero or below.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
}

/// Persistent wander offset, a point on the wander circle relative to the
/// projected position ahead of the unit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WanderHeading(pub Vec2);

/// Facing angle in radians (sprite convention, nose up).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing(pub f32);

/// Carrier bay attached to frigates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hangar {
    pub capacity: usize,
    /// Docked units in launch order (first docked launches first).
    pub docked: Vec<UnitId>,
}

/// Marks a unit as stowed inside a carrier. Docked units are skipped by
/// kinematics, combat, capture, and hazard systems.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Docked {
    pub carrier: UnitId,
}

/// Strategic control point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureNode {
    /// Index of the node in scenario order.
    pub index: u32,
    pub owner: NodeOwner,
    /// Signed capture momentum in [-100, 100]; positive leans PLAYER.
    pub progress: f32,
}

/// Slowing field. Units inside the radius have their max speed scaled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Nebula {
    pub radius: f32,
    pub slow_factor: f32,
}

/// Drifting rock that drains HP from overlapping units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asteroid {
    pub radius: f32,
    pub damage_per_sec: f32,
    /// Current spin angle (radians).
    pub rotation: f32,
}
