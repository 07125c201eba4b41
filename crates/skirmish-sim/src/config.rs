//! Simulation configuration.
//!
//! Every field has a default, so a JSON file only needs the values it
//! overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use skirmish_core::constants::*;
use skirmish_core::enums::UnitClass;
use skirmish_steering::SteeringConfig;

use crate::error::{Result, SimError};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. `None` seeds from entropy, so runs differ.
    pub seed: Option<u64>,
    /// Simulated milliseconds between production sweeps.
    pub spawn_interval_ms: f64,
    /// Per-team unit cap enforced by production.
    pub roster_cap: usize,
    /// Classes node production picks from, uniformly.
    pub spawn_classes: Vec<UnitClass>,
    pub capture_radius: f32,
    /// Progress change per tick for the team with more units nearby.
    pub capture_rate: f32,
    pub hangar_capacity: usize,
    pub hangar_regen_per_sec: f32,
    /// Scale combat damage by frame length instead of applying a flat hit
    /// every tick.
    pub combat_time_scaled: bool,
    pub steering: SteeringConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            roster_cap: ROSTER_CAP,
            spawn_classes: UnitClass::LINE.to_vec(),
            capture_radius: CAPTURE_RADIUS,
            capture_rate: CAPTURE_RATE,
            hangar_capacity: HANGAR_CAPACITY,
            hangar_regen_per_sec: HANGAR_REGEN_PER_SEC,
            combat_time_scaled: false,
            steering: SteeringConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.spawn_interval_ms > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "spawn_interval_ms must be positive, got {}",
                self.spawn_interval_ms
            )));
        }
        if self.spawn_classes.is_empty() {
            return Err(SimError::InvalidConfig(
                "spawn_classes must not be empty".into(),
            ));
        }
        if !(self.capture_radius > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "capture_radius must be positive, got {}",
                self.capture_radius
            )));
        }
        if self.capture_rate < 0.0 || self.hangar_regen_per_sec < 0.0 {
            return Err(SimError::InvalidConfig(
                "rates must not be negative".into(),
            ));
        }
        let steering = &self.steering;
        if steering.separation_radius <= 0.0 || steering.flock_radius <= 0.0 {
            return Err(SimError::InvalidConfig(
                "steering radii must be positive".into(),
            ));
        }
        Ok(())
    }
}
