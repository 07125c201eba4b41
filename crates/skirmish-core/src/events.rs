//! Events emitted by the simulation for presentation feedback.
//!
//! Events are records only. Nothing in the simulation reads them back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::UnitId;
use crate::enums::*;

/// One resolved shot. Rendered as a transient laser line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatEvent {
    pub attacker: UnitId,
    pub target: UnitId,
    pub attacker_pos: Vec2,
    pub target_pos: Vec2,
    pub color: u32,
    pub damage: f32,
}

/// Discrete battle happenings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    UnitSpawned {
        unit: UnitId,
        team: Team,
        class: UnitClass,
    },
    UnitDestroyed { unit: UnitId, team: Team },
    /// A node's owner changed (including reverting to neutral).
    NodeCaptured { node: u32, owner: NodeOwner },
    UnitDocked { carrier: UnitId, unit: UnitId },
    UnitLaunched { carrier: UnitId, unit: UnitId },
    /// Every node is held by one team. Emitted once per battle.
    Victory { team: Team },
}
