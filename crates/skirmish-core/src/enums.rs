//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// A fighting side. Every unit belongs to exactly one team for its whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    /// The opposing team.
    pub fn opponent(self) -> Team {
        match self {
            Team::Player => Team::Enemy,
            Team::Enemy => Team::Player,
        }
    }

    /// Laser/flash color used by the presentation layer for this team's fire.
    pub fn fire_color(self) -> u32 {
        match self {
            Team::Player => 0x00ff00,
            Team::Enemy => 0xff0000,
        }
    }
}

/// Ownership state of a capture node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeOwner {
    #[default]
    Neutral,
    Player,
    Enemy,
}

impl NodeOwner {
    /// The team owning the node, if any.
    pub fn team(self) -> Option<Team> {
        match self {
            NodeOwner::Neutral => None,
            NodeOwner::Player => Some(Team::Player),
            NodeOwner::Enemy => Some(Team::Enemy),
        }
    }

    /// Tint used for the node sprite.
    pub fn color(self) -> u32 {
        match self {
            NodeOwner::Neutral => 0x888888,
            NodeOwner::Player => 0x00ff00,
            NodeOwner::Enemy => 0xff0000,
        }
    }
}

impl From<Team> for NodeOwner {
    fn from(team: Team) -> Self {
        match team {
            Team::Player => NodeOwner::Player,
            Team::Enemy => NodeOwner::Enemy,
        }
    }
}

/// Unit class. Each class maps to one immutable stat profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitClass {
    Scout,
    Fighter,
    Heavy,
    Frigate,
}

/// Behavioral variant of a unit. Frigates carry a hangar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    #[default]
    Standard,
    Frigate,
}

/// Built-in battle layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Four-node map with two opposing fleets, nebulae, and asteroids.
    #[default]
    Skirmish,
    /// Two owned nodes 150 units apart, no units.
    Duel,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Setup,
    Active,
    Paused,
}
