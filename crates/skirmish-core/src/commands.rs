//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::UnitId;
use crate::enums::*;

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Battle control ---
    /// Load a scenario and start the battle.
    StartBattle { scenario: ScenarioId },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Orders ---
    /// Direct a team's units toward a world position.
    SetRallyPoint { team: Team, position: Vec2 },
    /// Drop a team's rally point (units fall back to default behavior).
    ClearRallyPoint { team: Team },

    // --- Production ---
    /// Build one unit of `class` at an owned node.
    ProduceUnit {
        team: Team,
        class: UnitClass,
        node: u32,
    },

    // --- Hangar ---
    /// Stow `unit` inside the frigate `carrier`.
    DockUnit { carrier: UnitId, unit: UnitId },
    /// Release the first docked unit from `carrier`.
    LaunchUnit { carrier: UnitId },
}
