//! Simulation engine, the core of the battle.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `BattleSnapshot`s.
//! Completely headless: the caller drives it with a frame delta.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{CaptureNode, UnitId};
use skirmish_core::enums::{GamePhase, NodeOwner, Team, UnitClass};
use skirmish_core::events::{BattleEvent, CombatEvent};
use skirmish_core::state::BattleSnapshot;
use skirmish_core::types::{frame_scale, Position, SimTime};

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::roster::{roster_size, Rosters};
use crate::scenario::{self, Scenario};
use crate::systems;
use crate::systems::kinematics::TeamTargets;
use crate::systems::spawner::{SpawnRules, SpawnTimer};
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all battle state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    combat_events: Vec<CombatEvent>,
    battle_events: Vec<BattleEvent>,
    spawn_timer: SpawnTimer,
    /// Externally supplied seek targets.
    rally_points: TeamTargets,
    victor: Option<Team>,
    world_size: Vec2,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            world: World::new(),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            combat_events: Vec::new(),
            battle_events: Vec::new(),
            spawn_timer: SpawnTimer::default(),
            rally_points: TeamTargets::default(),
            victor: None,
            world_size: Vec2::ZERO,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `delta_ms` milliseconds and return the
    /// resulting snapshot. While not active, only commands are processed.
    pub fn tick(&mut self, delta_ms: f64) -> BattleSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.time.advance(delta_ms);
            self.run_systems(delta_ms);
        }

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            std::mem::take(&mut self.combat_events),
            std::mem::take(&mut self.battle_events),
            self.victor,
        )
    }

    /// Replace the world with a fresh battle built from `scenario` and make
    /// it active.
    pub fn start_battle(&mut self, scenario: &Scenario) {
        self.world.clear();
        self.time = SimTime::default();
        self.spawn_timer = SpawnTimer::default();
        self.rally_points = TeamTargets::default();
        self.victor = None;
        self.next_unit_id = 0;
        self.combat_events.clear();
        self.battle_events.clear();
        self.world_size = scenario.world_size;

        let spawned = world_setup::setup_battle(
            &mut self.world,
            &mut self.rng,
            scenario,
            &mut self.next_unit_id,
            self.config.hangar_capacity,
        );
        self.phase = GamePhase::Active;
        info!(
            scenario = %scenario.name,
            units = spawned.len(),
            nodes = scenario.nodes.len(),
            "battle started"
        );
    }

    /// Build one unit at an owned node, subject to the roster cap.
    pub fn produce_unit(&mut self, team: Team, class: UnitClass, node: u32) -> Result<UnitId> {
        let (position, owner) = self
            .world
            .query::<(&Position, &CaptureNode)>()
            .iter()
            .find(|(_, (_, n))| n.index == node)
            .map(|(_, (pos, n))| (pos.0, n.owner))
            .ok_or(SimError::UnknownNode(node))?;
        if owner != NodeOwner::from(team) {
            return Err(SimError::NodeNotOwned { node, team });
        }
        if roster_size(&self.world, team) >= self.config.roster_cap {
            return Err(SimError::RosterFull {
                team,
                cap: self.config.roster_cap,
            });
        }

        let id = world_setup::allocate_id(&mut self.next_unit_id);
        world_setup::spawn_unit(
            &mut self.world,
            &mut self.rng,
            id,
            team,
            class,
            position,
            self.config.hangar_capacity,
        );
        debug!(unit = id.0, ?team, ?class, node, "unit produced");
        self.battle_events
            .push(BattleEvent::UnitSpawned { unit: id, team, class });
        Ok(id)
    }

    /// Stow a unit inside a friendly frigate.
    pub fn dock_unit(&mut self, carrier: UnitId, unit: UnitId) -> Result<()> {
        systems::hangar::dock(&mut self.world, carrier, unit)?;
        debug!(carrier = carrier.0, unit = unit.0, "unit docked");
        self.battle_events
            .push(BattleEvent::UnitDocked { carrier, unit });
        Ok(())
    }

    /// Release the first unit docked in `carrier`.
    pub fn launch_unit(&mut self, carrier: UnitId) -> Result<UnitId> {
        let unit = systems::hangar::launch(&mut self.world, &mut self.rng, carrier)?;
        debug!(carrier = carrier.0, unit = unit.0, "unit launched");
        self.battle_events
            .push(BattleEvent::UnitLaunched { carrier, unit });
        Ok(unit)
    }

    /// Set or clear a team's rally point.
    pub fn set_rally_point(&mut self, team: Team, position: Option<Vec2>) {
        match team {
            Team::Player => self.rally_points.player = position,
            Team::Enemy => self.rally_points.enemy = position,
        }
    }

    pub fn rally_point(&self, team: Team) -> Option<Vec2> {
        self.rally_points.for_team(team)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The winning team, once one has held every node.
    pub fn victor(&self) -> Option<Team> {
        self.victor
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that need to place or damage units.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(&command) {
                warn!(?command, %err, "command rejected");
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: &PlayerCommand) -> Result<()> {
        match *command {
            PlayerCommand::StartBattle { scenario } => {
                self.start_battle(&scenario::build(scenario));
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetRallyPoint { team, position } => {
                self.set_rally_point(team, Some(position));
            }
            PlayerCommand::ClearRallyPoint { team } => {
                self.set_rally_point(team, None);
            }
            PlayerCommand::ProduceUnit { team, class, node } => {
                self.produce_unit(team, class, node)?;
            }
            PlayerCommand::DockUnit { carrier, unit } => {
                self.dock_unit(carrier, unit)?;
            }
            PlayerCommand::LaunchUnit { carrier } => {
                self.launch_unit(carrier)?;
            }
        }
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self, delta_ms: f64) {
        // 1. Reinforcements
        let rules = SpawnRules {
            interval_ms: self.config.spawn_interval_ms,
            roster_cap: self.config.roster_cap,
            classes: &self.config.spawn_classes,
            hangar_capacity: self.config.hangar_capacity,
        };
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            self.time.elapsed_ms,
            &rules,
            &mut self.next_unit_id,
            &mut self.battle_events,
        );

        // 2. Victory
        if self.victor.is_none() {
            if let Some(team) = systems::victory::sole_owner(&self.world) {
                info!(?team, elapsed_ms = self.time.elapsed_ms, "victory");
                self.victor = Some(team);
                self.battle_events.push(BattleEvent::Victory { team });
            }
        }

        // Rosters as they stand after reinforcement; read by steps 3-6.
        let rosters = Rosters::gather(&self.world);

        // 3. Capture nodes
        systems::capture::run(
            &mut self.world,
            &rosters,
            self.config.capture_radius,
            self.config.capture_rate,
            &mut self.battle_events,
        );

        // 4. Combat, player volley then enemy volley
        let damage_scale = if self.config.combat_time_scaled {
            frame_scale(delta_ms)
        } else {
            1.0
        };
        systems::combat::run(&mut self.world, &rosters, damage_scale, &mut self.combat_events);

        // 5. Asteroids
        systems::hazards::run(&mut self.world, &rosters, self.world_size, delta_ms);

        // 6. Kinematics, then hangar repair
        let targets = TeamTargets {
            player: self.rally_points.player,
            enemy: self
                .rally_points
                .enemy
                .or_else(|| rosters.player.first().map(|u| u.agent.position)),
        };
        systems::kinematics::run(
            &mut self.world,
            &rosters,
            &targets,
            &self.config.steering,
            &mut self.rng,
            delta_ms,
        );
        systems::hangar::regenerate(&mut self.world, self.config.hangar_regen_per_sec, delta_ms);

        // 7. Remove the dead
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.battle_events);
    }
}
