//! Unit class registry.
//!
//! Profiles live in one static table and are handed out by reference, so
//! every unit of a class shares the same read-only stats.

use serde::Serialize;

use crate::enums::{UnitClass, UnitKind};

/// Immutable stat block for a unit class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitClassProfile {
    pub class: UnitClass,
    pub name: &'static str,
    /// Top speed in world units per reference frame.
    pub max_speed: f32,
    /// Cap on the magnitude of the summed steering force.
    pub max_force: f32,
    /// Steering force is divided by mass before it reaches velocity.
    pub mass: f32,
    pub base_hp: f32,
    /// Targets must be strictly closer than this to be engaged.
    pub engagement_range: f32,
    pub color: u32,
}

static PROFILES: [UnitClassProfile; 4] = [
    UnitClassProfile {
        class: UnitClass::Scout,
        name: "SCOUT",
        max_speed: 4.0,
        max_force: 0.2,
        mass: 0.8,
        base_hp: 50.0,
        engagement_range: 150.0,
        color: 0x00ffff,
    },
    UnitClassProfile {
        class: UnitClass::Fighter,
        name: "FIGHTER",
        max_speed: 2.5,
        max_force: 0.1,
        mass: 1.0,
        base_hp: 100.0,
        engagement_range: 200.0,
        color: 0x00ff00,
    },
    UnitClassProfile {
        class: UnitClass::Heavy,
        name: "HEAVY",
        max_speed: 1.2,
        max_force: 0.05,
        mass: 2.5,
        base_hp: 300.0,
        engagement_range: 350.0,
        color: 0xffff00,
    },
    UnitClassProfile {
        class: UnitClass::Frigate,
        name: "FRIGATE",
        max_speed: 0.8,
        max_force: 0.03,
        mass: 5.0,
        base_hp: 1000.0,
        engagement_range: 500.0,
        color: 0xff00ff,
    },
];

impl UnitClass {
    pub const ALL: [UnitClass; 4] = [
        UnitClass::Scout,
        UnitClass::Fighter,
        UnitClass::Heavy,
        UnitClass::Frigate,
    ];

    /// Classes produced by nodes and used for initial fleets.
    pub const LINE: [UnitClass; 3] = [UnitClass::Scout, UnitClass::Fighter, UnitClass::Heavy];

    /// The shared profile for this class.
    pub fn profile(self) -> &'static UnitClassProfile {
        match self {
            UnitClass::Scout => &PROFILES[0],
            UnitClass::Fighter => &PROFILES[1],
            UnitClass::Heavy => &PROFILES[2],
            UnitClass::Frigate => &PROFILES[3],
        }
    }

    /// Look up a class by its display name. Unknown names fall back to FIGHTER.
    pub fn from_name(name: &str) -> UnitClass {
        PROFILES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.class)
            .unwrap_or(UnitClass::Fighter)
    }

    pub fn kind(self) -> UnitKind {
        match self {
            UnitClass::Frigate => UnitKind::Frigate,
            _ => UnitKind::Standard,
        }
    }
}
