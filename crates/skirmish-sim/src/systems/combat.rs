//! Combat resolution: nearest enemy in range takes a flat hit.
//!
//! Stateless per tick. Both directions fire against the rosters as they
//! stood at the start of the step, so a unit killed by the first volley
//! still returns fire in the second.

use hecs::World;

use skirmish_core::components::Health;
use skirmish_core::constants::DAMAGE_PER_FORCE;
use skirmish_core::enums::Team;
use skirmish_core::events::CombatEvent;

use crate::roster::{RosterEntry, Rosters};

/// Index of the nearest target strictly inside `range`. Ties keep the first
/// target encountered.
pub fn nearest_in_range(attacker: &RosterEntry, targets: &[RosterEntry], range: f32) -> Option<usize> {
    let mut best = None;
    let mut best_dist = range;
    for (i, target) in targets.iter().enumerate() {
        let d = attacker.agent.position.distance(target.agent.position);
        if d < best_dist {
            best_dist = d;
            best = Some(i);
        }
    }
    best
}

/// Damage one attacker deals per hit.
pub fn hit_damage(attacker: &RosterEntry, damage_scale: f32) -> f32 {
    attacker.class.profile().max_force * DAMAGE_PER_FORCE * damage_scale
}

/// Every unit in `attackers` fires once at its nearest target in range.
pub fn resolve_volley(
    world: &mut World,
    attackers: &[RosterEntry],
    targets: &[RosterEntry],
    damage_scale: f32,
    events: &mut Vec<CombatEvent>,
) {
    for attacker in attackers {
        let range = attacker.class.profile().engagement_range;
        let Some(index) = nearest_in_range(attacker, targets, range) else {
            continue;
        };
        let target = &targets[index];
        let damage = hit_damage(attacker, damage_scale);

        if let Ok(mut health) = world.get::<&mut Health>(target.entity) {
            health.current -= damage;
        }

        events.push(CombatEvent {
            attacker: attacker.id,
            target: target.id,
            attacker_pos: attacker.agent.position,
            target_pos: target.agent.position,
            color: attacker.team.fire_color(),
            damage,
        });
    }
}

/// Run combat in both directions: player volley, then enemy volley.
pub fn run(world: &mut World, rosters: &Rosters, damage_scale: f32, events: &mut Vec<CombatEvent>) {
    for team in [Team::Player, Team::Enemy] {
        resolve_volley(
            world,
            rosters.team(team),
            rosters.team(team.opponent()),
            damage_scale,
            events,
        );
    }
}
