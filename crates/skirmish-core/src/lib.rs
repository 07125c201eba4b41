//! Core types and definitions for the SKIRMISH fleet battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! unit classes, components, commands, snapshots, events, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod classes;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
