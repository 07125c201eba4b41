//! Victory check: one team holding every node wins.

use hecs::World;

use skirmish_core::components::CaptureNode;
use skirmish_core::enums::Team;

/// The team owning every node, if there is one. A world with no nodes has
/// no winner.
pub fn sole_owner(world: &World) -> Option<Team> {
    let mut query = world.query::<&CaptureNode>();
    let mut owners = query.iter().map(|(_, node)| node.owner.team());
    let first = owners.next()??;
    owners.all(|owner| owner == Some(first)).then_some(first)
}
