//! Team rosters gathered from the ECS world.
//!
//! hecs does not preserve spawn order across despawns, so rosters are
//! rebuilt each time they are needed and ordered by unit id. That id order
//! is the "first encountered" order used for tie-breaking.

use hecs::{Entity, World};

use skirmish_core::components::{Docked, UnitId};
use skirmish_core::enums::{Team, UnitClass};
use skirmish_core::types::{Position, Velocity};
use skirmish_steering::AgentState;

/// Read-only copy of one active unit's state at the time of the query.
#[derive(Debug, Clone, Copy)]
pub struct RosterEntry {
    pub entity: Entity,
    pub id: UnitId,
    pub team: Team,
    pub class: UnitClass,
    pub agent: AgentState,
}

/// Active (undocked) units of both teams, each list ordered by id.
#[derive(Debug, Default)]
pub struct Rosters {
    pub player: Vec<RosterEntry>,
    pub enemy: Vec<RosterEntry>,
}

impl Rosters {
    /// Snapshot every undocked unit in the world.
    pub fn gather(world: &World) -> Self {
        let mut rosters = Rosters::default();
        let mut query = world
            .query::<(&UnitId, &Team, &UnitClass, &Position, &Velocity)>()
            .without::<&Docked>();
        for (entity, (id, team, class, pos, vel)) in query.iter() {
            let profile = class.profile();
            let entry = RosterEntry {
                entity,
                id: *id,
                team: *team,
                class: *class,
                agent: AgentState {
                    position: pos.0,
                    velocity: vel.0,
                    max_speed: profile.max_speed,
                    max_force: profile.max_force,
                    mass: profile.mass,
                },
            };
            match team {
                Team::Player => rosters.player.push(entry),
                Team::Enemy => rosters.enemy.push(entry),
            }
        }
        rosters.player.sort_by_key(|e| e.id);
        rosters.enemy.sort_by_key(|e| e.id);
        rosters
    }

    pub fn team(&self, team: Team) -> &[RosterEntry] {
        match team {
            Team::Player => &self.player,
            Team::Enemy => &self.enemy,
        }
    }

    /// Iterate both teams, player first.
    pub fn all(&self) -> impl Iterator<Item = &RosterEntry> {
        self.player.iter().chain(self.enemy.iter())
    }
}

/// Number of units a team owns, docked units included.
pub fn roster_size(world: &World, team: Team) -> usize {
    world
        .query::<&Team>()
        .iter()
        .filter(|(_, t)| **t == team)
        .count()
}

/// Find the entity carrying a unit id.
pub fn find_unit(world: &World, id: UnitId) -> Option<Entity> {
    world
        .query::<&UnitId>()
        .iter()
        .find(|(_, uid)| **uid == id)
        .map(|(entity, _)| entity)
}
