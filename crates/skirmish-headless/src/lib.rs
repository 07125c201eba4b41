//! Headless battle runner for SKIRMISH.
//!
//! Drives a `SimulationEngine` from a fixed-delta frame loop, the way a
//! render loop would, and reports what happened.

pub mod runner;
