//! Battle state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::UnitId;
use crate::enums::*;
use crate::events::{BattleEvent, CombatEvent};
use crate::types::SimTime;

/// Complete battle state produced by every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub units: Vec<UnitView>,
    pub nodes: Vec<NodeView>,
    pub nebulae: Vec<NebulaView>,
    pub asteroids: Vec<AsteroidView>,
    pub combat_events: Vec<CombatEvent>,
    pub battle_events: Vec<BattleEvent>,
    pub rosters: RosterView,
    /// Winner, once every node has been held by a single team.
    pub victor: Option<Team>,
}

/// A unit as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub team: Team,
    pub class: UnitClass,
    pub kind: UnitKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub color: u32,
    /// Facing angle in radians.
    pub facing: f32,
    /// Docked units are hidden and inactive.
    pub docked: bool,
}

/// Capture node state for ring/arc rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeView {
    pub index: u32,
    pub position: Vec2,
    pub owner: NodeOwner,
    pub progress: f32,
    pub color: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NebulaView {
    pub position: Vec2,
    pub radius: f32,
    pub slow_factor: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidView {
    pub position: Vec2,
    pub radius: f32,
    pub rotation: f32,
}

/// Units owned per team, docked units included.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RosterView {
    pub player: usize,
    pub enemy: usize,
}
