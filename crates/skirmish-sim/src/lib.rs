//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs the battle systems in a fixed order each
//! frame, and produces BattleSnapshots for the presentation layer.

pub mod config;
pub mod engine;
pub mod error;
pub mod roster;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use error::{Result, SimError};
pub use scenario::Scenario;
pub use skirmish_core as core;
