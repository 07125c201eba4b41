//! ECS systems that operate on the battle world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). Per-battle bookkeeping such as the spawn timer is owned by the
//! engine and passed in; everything else lives in components.

pub mod capture;
pub mod cleanup;
pub mod combat;
pub mod hangar;
pub mod hazards;
pub mod kinematics;
pub mod snapshot;
pub mod spawner;
pub mod victory;
