//! Scenario definitions: battlefield layouts and starting forces.
//!
//! Built-in layouts are hardcoded; custom layouts can be deserialized from
//! JSON with the same structure.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::{NEBULA_SLOW_FACTOR, WORLD_HEIGHT, WORLD_WIDTH};
use skirmish_core::enums::{NodeOwner, ScenarioId, Team, UnitClass};

use crate::error::{Result, SimError};

/// A complete battle layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Field extent. Asteroids wrap around these bounds.
    pub world_size: Vec2,
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub nebulae: Vec<NebulaSpec>,
    #[serde(default)]
    pub asteroids: Vec<AsteroidSpec>,
    /// Randomly scattered groups.
    #[serde(default)]
    pub fleets: Vec<FleetSpec>,
    /// Individually placed units.
    #[serde(default)]
    pub units: Vec<UnitSpec>,
}

impl Scenario {
    /// Read a custom layout from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub position: Vec2,
    #[serde(default)]
    pub owner: NodeOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NebulaSpec {
    pub position: Vec2,
    pub radius: f32,
    #[serde(default = "default_slow_factor")]
    pub slow_factor: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidSpec {
    pub position: Vec2,
    /// Drift in world units per second. Random when absent.
    #[serde(default)]
    pub velocity: Option<Vec2>,
}

/// `count` units scattered over `origin + (u * extent.x, (v - 0.5) * extent.y)`
/// for uniform `u, v` in [0, 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSpec {
    pub team: Team,
    pub origin: Vec2,
    pub extent: Vec2,
    pub count: u32,
    /// Classes drawn uniformly for each unit.
    pub classes: Vec<UnitClass>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub team: Team,
    pub class: UnitClass,
    pub position: Vec2,
}

fn default_slow_factor() -> f32 {
    NEBULA_SLOW_FACTOR
}

/// Build the layout for a built-in scenario.
pub fn build(scenario: ScenarioId) -> Scenario {
    match scenario {
        ScenarioId::Skirmish => build_skirmish(),
        ScenarioId::Duel => build_duel(),
    }
}

/// Skirmish: "Contested Sector"
/// Home nodes on the left and right edges, two neutral nodes on the centre
/// line, 30 line ships plus a frigate per side, nebulae flanking the centre.
fn build_skirmish() -> Scenario {
    let w = WORLD_WIDTH;
    let h = WORLD_HEIGHT;

    Scenario {
        name: "Contested Sector".into(),
        world_size: Vec2::new(w, h),
        nodes: vec![
            NodeSpec {
                position: Vec2::new(100.0, h / 2.0),
                owner: NodeOwner::Player,
            },
            NodeSpec {
                position: Vec2::new(w / 2.0, 150.0),
                owner: NodeOwner::Neutral,
            },
            NodeSpec {
                position: Vec2::new(w / 2.0, h - 150.0),
                owner: NodeOwner::Neutral,
            },
            NodeSpec {
                position: Vec2::new(w - 100.0, h / 2.0),
                owner: NodeOwner::Enemy,
            },
        ],
        nebulae: vec![
            NebulaSpec {
                position: Vec2::new(w * 0.35, h / 2.0),
                radius: 80.0,
                slow_factor: NEBULA_SLOW_FACTOR,
            },
            NebulaSpec {
                position: Vec2::new(w * 0.65, h / 2.0),
                radius: 80.0,
                slow_factor: NEBULA_SLOW_FACTOR,
            },
        ],
        asteroids: vec![
            AsteroidSpec {
                position: Vec2::new(w / 2.0, h / 2.0),
                velocity: None,
            },
            AsteroidSpec {
                position: Vec2::new(w * 0.3, h * 0.25),
                velocity: None,
            },
            AsteroidSpec {
                position: Vec2::new(w * 0.7, h * 0.75),
                velocity: None,
            },
        ],
        fleets: vec![
            FleetSpec {
                team: Team::Player,
                origin: Vec2::new(100.0, h / 2.0),
                extent: Vec2::new(100.0, 200.0),
                count: 30,
                classes: UnitClass::LINE.to_vec(),
            },
            FleetSpec {
                team: Team::Enemy,
                origin: Vec2::new(w - 100.0, h / 2.0),
                extent: Vec2::new(-100.0, 200.0),
                count: 30,
                classes: UnitClass::LINE.to_vec(),
            },
        ],
        units: vec![
            UnitSpec {
                team: Team::Player,
                class: UnitClass::Frigate,
                position: Vec2::new(60.0, h / 2.0),
            },
            UnitSpec {
                team: Team::Enemy,
                class: UnitClass::Frigate,
                position: Vec2::new(w - 60.0, h / 2.0),
            },
        ],
    }
}

/// Duel: two home nodes a capture radius apart and nothing else.
fn build_duel() -> Scenario {
    Scenario {
        name: "Duel".into(),
        world_size: Vec2::new(400.0, 200.0),
        nodes: vec![
            NodeSpec {
                position: Vec2::new(0.0, 0.0),
                owner: NodeOwner::Player,
            },
            NodeSpec {
                position: Vec2::new(150.0, 0.0),
                owner: NodeOwner::Enemy,
            },
        ],
        nebulae: Vec::new(),
        asteroids: Vec::new(),
        fleets: Vec::new(),
        units: Vec::new(),
    }
}
