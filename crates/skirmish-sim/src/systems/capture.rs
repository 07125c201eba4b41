//! Capture node state machine.
//!
//! Each tick every node counts nearby units per team, integrates its capture
//! progress, and derives its owner from that progress. Owners are never set
//! any other way.

use hecs::World;
use tracing::info;

use skirmish_core::components::CaptureNode;
use skirmish_core::constants::{CAPTURE_PROGRESS_MAX, NEUTRAL_BAND};
use skirmish_core::enums::{NodeOwner, Team};
use skirmish_core::events::BattleEvent;
use skirmish_core::types::Position;

use crate::roster::Rosters;

/// Move progress toward the team with more units present, clamped to
/// [-100, 100]. Ties leave progress unchanged.
pub fn advance_progress(progress: f32, player_count: usize, enemy_count: usize, rate: f32) -> f32 {
    let next = if player_count > enemy_count {
        progress + rate
    } else if enemy_count > player_count {
        progress - rate
    } else {
        progress
    };
    next.clamp(-CAPTURE_PROGRESS_MAX, CAPTURE_PROGRESS_MAX)
}

/// Owner implied by `progress`, checked in order: full PLAYER, full ENEMY,
/// neutral band, otherwise unchanged.
pub fn owner_for_progress(progress: f32, current: NodeOwner) -> NodeOwner {
    if progress >= CAPTURE_PROGRESS_MAX {
        NodeOwner::Player
    } else if progress <= -CAPTURE_PROGRESS_MAX {
        NodeOwner::Enemy
    } else if progress.abs() < NEUTRAL_BAND {
        NodeOwner::Neutral
    } else {
        current
    }
}

/// Apply one tick of influence to a node. Returns the new owner when it
/// changed.
pub fn update_node(
    node: &mut CaptureNode,
    player_count: usize,
    enemy_count: usize,
    rate: f32,
) -> Option<NodeOwner> {
    node.progress = advance_progress(node.progress, player_count, enemy_count, rate);
    let owner = owner_for_progress(node.progress, node.owner);
    if owner != node.owner {
        node.owner = owner;
        Some(owner)
    } else {
        None
    }
}

/// Run the capture system over every node.
pub fn run(
    world: &mut World,
    rosters: &Rosters,
    radius: f32,
    rate: f32,
    events: &mut Vec<BattleEvent>,
) {
    for (_entity, (pos, node)) in world.query_mut::<(&Position, &mut CaptureNode)>() {
        let count_near = |team: Team| {
            rosters
                .team(team)
                .iter()
                .filter(|u| pos.range_to(&Position(u.agent.position)) < radius)
                .count()
        };
        let player_count = count_near(Team::Player);
        let enemy_count = count_near(Team::Enemy);

        if let Some(owner) = update_node(node, player_count, enemy_count, rate) {
            info!(node = node.index, ?owner, progress = node.progress, "Node ownership changed");
            events.push(BattleEvent::NodeCaptured {
                node: node.index,
                owner,
            });
        }
    }
}
