//! The capability interface steering behaviors operate on.

use glam::Vec2;

/// Anything that can be steered: a point mass with speed and force limits.
pub trait SteeringAgent {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn max_speed(&self) -> f32;
    fn max_force(&self) -> f32;
    fn mass(&self) -> f32;
}

/// Plain-data agent, used when kinematic state is gathered out of the ECS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub max_speed: f32,
    pub max_force: f32,
    pub mass: f32,
}

impl SteeringAgent for AgentState {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn max_speed(&self) -> f32 {
        self.max_speed
    }

    fn max_force(&self) -> f32 {
        self.max_force
    }

    fn mass(&self) -> f32 {
        self.mass
    }
}
