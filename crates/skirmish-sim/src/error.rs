//! Error types for the battle simulation.
//!
//! Per-tick systems are infallible; errors come from rejected commands and
//! from configuration loading.

use thiserror::Error;

use skirmish_core::components::UnitId;
use skirmish_core::enums::Team;

/// Result type alias using [`SimError`].
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// No living unit carries this id.
    #[error("Unknown unit: {0:?}")]
    UnknownUnit(UnitId),

    /// No node with this index exists in the current battle.
    #[error("Unknown node: {0}")]
    UnknownNode(u32),

    #[error("Unit {0:?} has no hangar")]
    NotACarrier(UnitId),

    #[error("Hangar of {0:?} is full")]
    HangarFull(UnitId),

    #[error("Hangar of {0:?} is empty")]
    HangarEmpty(UnitId),

    #[error("Unit {0:?} is already docked")]
    AlreadyDocked(UnitId),

    /// A hangar listed a unit that carries no docked marker.
    #[error("Unit {0:?} is listed in a hangar but not docked")]
    NotDocked(UnitId),

    /// Carriers cannot be stowed inside other carriers (or themselves).
    #[error("Unit {0:?} is a carrier and cannot dock")]
    CannotDockCarrier(UnitId),

    #[error("Units {0:?} and {1:?} belong to different teams")]
    TeamMismatch(UnitId, UnitId),

    #[error("Node {node} is not owned by {team:?}")]
    NodeNotOwned { node: u32, team: Team },

    #[error("{team:?} roster is full ({cap} units)")]
    RosterFull { team: Team, cap: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to read '{path}': {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
