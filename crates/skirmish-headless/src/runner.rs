//! Frame loop: feeds the engine a fixed delta per frame, optionally paced
//! to wall-clock time, and collects a summary of the battle.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use skirmish_core::enums::{NodeOwner, Team};
use skirmish_core::events::BattleEvent;
use skirmish_core::state::BattleSnapshot;
use skirmish_sim::{Scenario, SimulationEngine};

/// How long and how fast to run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Simulated seconds to run for.
    pub seconds: f64,
    /// Delta handed to every tick, in milliseconds.
    pub frame_ms: f64,
    /// Sleep between frames so simulated time tracks wall time.
    pub realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seconds: 60.0,
            frame_ms: skirmish_core::constants::REFERENCE_FRAME_MS,
            realtime: false,
        }
    }
}

/// End-of-run report, printed as JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BattleSummary {
    pub scenario: String,
    pub ticks: u64,
    pub elapsed_ms: f64,
    pub player_units: usize,
    pub enemy_units: usize,
    pub nodes: Vec<NodeOwner>,
    pub victor: Option<Team>,
    pub units_spawned: usize,
    pub units_destroyed: usize,
    pub shots_fired: usize,
}

impl BattleSummary {
    /// Fold one tick's snapshot into the running totals.
    fn record(&mut self, snapshot: &BattleSnapshot) {
        self.ticks = snapshot.time.tick;
        self.elapsed_ms = snapshot.time.elapsed_ms;
        self.player_units = snapshot.rosters.player;
        self.enemy_units = snapshot.rosters.enemy;
        self.nodes = snapshot.nodes.iter().map(|n| n.owner).collect();
        self.victor = snapshot.victor;
        self.shots_fired += snapshot.combat_events.len();

        for event in &snapshot.battle_events {
            match event {
                BattleEvent::UnitSpawned { .. } => self.units_spawned += 1,
                BattleEvent::UnitDestroyed { .. } => self.units_destroyed += 1,
                _ => {}
            }
        }
    }
}

/// Start `scenario` on `engine` and run it for `options.seconds` of
/// simulated time.
pub fn run_battle(engine: &mut SimulationEngine, scenario: &Scenario, options: &RunOptions) -> BattleSummary {
    engine.start_battle(scenario);

    let mut summary = BattleSummary {
        scenario: scenario.name.clone(),
        ..Default::default()
    };
    let frame = match Duration::try_from_secs_f64(options.frame_ms / 1000.0) {
        Ok(frame) if options.frame_ms > 0.0 => frame,
        _ => {
            warn!(frame_ms = options.frame_ms, "frame delta must be positive and finite");
            return summary;
        }
    };
    let total_ms = options.seconds * 1000.0;
    let mut next_frame_time = Instant::now();

    while engine.time().elapsed_ms < total_ms {
        let snapshot = engine.tick(options.frame_ms);
        log_events(&snapshot);
        summary.record(&snapshot);

        if options.realtime {
            next_frame_time += frame;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame * 2 {
                // Too far behind; drop the backlog instead of catching up.
                next_frame_time = now;
            }
        }
    }

    summary
}

fn log_events(snapshot: &BattleSnapshot) {
    let at = snapshot.time.elapsed_ms;
    for event in &snapshot.battle_events {
        match event {
            BattleEvent::NodeCaptured { node, owner } => {
                info!(at, node, ?owner, "node changed hands");
            }
            BattleEvent::Victory { team } => info!(at, ?team, "victory"),
            other => debug!(at, event = ?other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::enums::ScenarioId;
    use skirmish_sim::scenario;
    use skirmish_sim::SimConfig;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig {
            seed: Some(5),
            ..Default::default()
        })
    }

    #[test]
    fn test_runs_for_requested_time() {
        let options = RunOptions {
            seconds: 1.0,
            frame_ms: 100.0,
            realtime: false,
        };
        let summary = run_battle(&mut engine(), &scenario::build(ScenarioId::Duel), &options);
        assert_eq!(summary.ticks, 10);
        assert_eq!(summary.elapsed_ms, 1000.0);
        assert_eq!(summary.nodes, vec![NodeOwner::Player, NodeOwner::Enemy]);
        assert_eq!(summary.victor, None);
    }

    #[test]
    fn test_duel_reinforces_both_sides() {
        let options = RunOptions {
            seconds: 3.2,
            frame_ms: 100.0,
            realtime: false,
        };
        let summary = run_battle(&mut engine(), &scenario::build(ScenarioId::Duel), &options);
        assert_eq!(summary.units_spawned, 2);
        assert_eq!(summary.player_units, 1);
        assert_eq!(summary.enemy_units, 1);
    }

    #[test]
    fn test_skirmish_fleets_engage() {
        let options = RunOptions {
            seconds: 20.0,
            ..Default::default()
        };
        let summary = run_battle(&mut engine(), &scenario::build(ScenarioId::Skirmish), &options);
        assert_eq!(summary.scenario, "Contested Sector");
        assert!(summary.shots_fired > 0);
        assert_eq!(summary.nodes.len(), 4);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = BattleSummary {
            victor: Some(Team::Player),
            ..Default::default()
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["victor"], "Player");
    }

    #[test]
    fn test_unusable_frame_delta_runs_nothing() {
        for frame_ms in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::MAX] {
            let options = RunOptions {
                frame_ms,
                ..Default::default()
            };
            let summary =
                run_battle(&mut engine(), &scenario::build(ScenarioId::Duel), &options);
            assert_eq!(summary.ticks, 0, "frame_ms {frame_ms}");
        }
    }
}
