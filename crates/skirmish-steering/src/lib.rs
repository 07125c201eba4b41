//! Steering behaviors for SKIRMISH.
//!
//! Pure functions computing steering deltas (desired velocity minus current
//! velocity) for one agent against a target or a neighbor set, plus the
//! weighted blend used by unit kinematics. No ECS dependency; operates on
//! plain data through the [`SteeringAgent`] trait.

pub mod agent;
pub mod behaviors;
pub mod blend;
pub mod config;

pub use agent::{AgentState, SteeringAgent};
pub use config::SteeringConfig;

#[cfg(test)]
mod tests;
