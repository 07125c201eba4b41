//! Frigate hangars: docking, launching, and repair of stowed units.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Docked, Hangar, Health, UnitId};
use skirmish_core::enums::{Team, UnitClass, UnitKind};
use skirmish_core::types::{Position, Velocity};

use crate::error::{Result, SimError};
use crate::roster::find_unit;

/// Repair every docked unit below its base HP by `regen_per_sec`, scaled by
/// the tick length. HP never exceeds the class base.
pub fn regenerate(world: &mut World, regen_per_sec: f32, delta_ms: f64) {
    let heal = regen_per_sec * (delta_ms / 1000.0) as f32;
    for (_entity, (class, health, _docked)) in
        world.query_mut::<(&UnitClass, &mut Health, &Docked)>()
    {
        let max = class.profile().base_hp;
        if health.current < max {
            health.current = (health.current + heal).min(max);
        }
    }
}

/// Stow `unit` inside `carrier`. Both must exist, share a team, and the
/// carrier must have a free slot.
pub fn dock(world: &mut World, carrier: UnitId, unit: UnitId) -> Result<()> {
    let carrier_entity = find_unit(world, carrier).ok_or(SimError::UnknownUnit(carrier))?;
    let unit_entity = find_unit(world, unit).ok_or(SimError::UnknownUnit(unit))?;

    check_can_dock(world, carrier_entity, carrier, unit_entity, unit)?;

    {
        let mut hangar = world
            .get::<&mut Hangar>(carrier_entity)
            .map_err(|_| SimError::NotACarrier(carrier))?;
        if hangar.docked.len() >= hangar.capacity {
            return Err(SimError::HangarFull(carrier));
        }
        hangar.docked.push(unit);
    }

    world
        .insert_one(unit_entity, Docked { carrier })
        .map_err(|_| SimError::UnknownUnit(unit))?;
    if let Ok(mut vel) = world.get::<&mut Velocity>(unit_entity) {
        vel.0 = Vec2::ZERO;
    }
    Ok(())
}

fn check_can_dock(
    world: &World,
    carrier_entity: Entity,
    carrier: UnitId,
    unit_entity: Entity,
    unit: UnitId,
) -> Result<()> {
    let kind = |e: Entity, id: UnitId| {
        world
            .get::<&UnitKind>(e)
            .map(|k| *k)
            .map_err(|_| SimError::UnknownUnit(id))
    };
    let team = |e: Entity, id: UnitId| {
        world
            .get::<&Team>(e)
            .map(|t| *t)
            .map_err(|_| SimError::UnknownUnit(id))
    };

    if kind(carrier_entity, carrier)? != UnitKind::Frigate {
        return Err(SimError::NotACarrier(carrier));
    }
    if kind(unit_entity, unit)? == UnitKind::Frigate {
        return Err(SimError::CannotDockCarrier(unit));
    }
    if world.get::<&Docked>(carrier_entity).is_ok() {
        return Err(SimError::AlreadyDocked(carrier));
    }
    if world.get::<&Docked>(unit_entity).is_ok() {
        return Err(SimError::AlreadyDocked(unit));
    }
    if team(carrier_entity, carrier)? != team(unit_entity, unit)? {
        return Err(SimError::TeamMismatch(carrier, unit));
    }
    Ok(())
}

/// Release the first docked unit at the carrier's position, heading off in
/// a random direction at full speed.
pub fn launch(world: &mut World, rng: &mut ChaCha8Rng, carrier: UnitId) -> Result<UnitId> {
    let carrier_entity = find_unit(world, carrier).ok_or(SimError::UnknownUnit(carrier))?;
    let origin = world
        .get::<&Position>(carrier_entity)
        .map(|p| p.0)
        .map_err(|_| SimError::UnknownUnit(carrier))?;

    let unit = {
        let mut hangar = world
            .get::<&mut Hangar>(carrier_entity)
            .map_err(|_| SimError::NotACarrier(carrier))?;
        if hangar.docked.is_empty() {
            return Err(SimError::HangarEmpty(carrier));
        }
        hangar.docked.remove(0)
    };

    let unit_entity = find_unit(world, unit).ok_or(SimError::UnknownUnit(unit))?;
    world
        .remove_one::<Docked>(unit_entity)
        .map_err(|_| SimError::NotDocked(unit))?;

    let max_speed = world
        .get::<&UnitClass>(unit_entity)
        .map(|c| c.profile().max_speed)
        .unwrap_or_default();
    let angle = rng.gen::<f32>() * std::f32::consts::TAU;
    if let Ok(mut pos) = world.get::<&mut Position>(unit_entity) {
        pos.0 = origin;
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(unit_entity) {
        vel.0 = Vec2::from_angle(angle) * max_speed;
    }
    Ok(unit)
}

/// Units stowed in a carrier, in launch order.
pub fn docked_units(world: &World, carrier: Entity) -> Vec<UnitId> {
    world
        .get::<&Hangar>(carrier)
        .map(|h| h.docked.clone())
        .unwrap_or_default()
}
