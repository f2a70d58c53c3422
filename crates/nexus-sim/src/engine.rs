//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless (no rendering dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nexus_core::commands::PlayerCommand;
use nexus_core::components::DroneBody;
use nexus_core::constants::PER_DRONE_POINTS;
use nexus_core::enums::{Difficulty, GamePhase};
use nexus_core::events::GameEvent;
use nexus_core::state::GameStateSnapshot;
use nexus_core::types::{box_contains, Color, FieldSize, Position, SimTime};

use crate::effects::EffectManager;
use crate::ledger::Ledger;
use crate::links;
use crate::systems;
use crate::systems::spawner::SpawnTimer;

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Interval between drone spawns (milliseconds).
    pub spawn_interval_ms: f64,
    /// Logical play field dimensions.
    pub field: FieldSize,
    /// Display name of the defended nexus.
    pub nexus_name: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_interval_ms: Difficulty::default().spawn_interval_ms(),
            field: FieldSize::default(),
            nexus_name: "Nexus".to_owned(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_drone_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    spawn_timer: SpawnTimer,
    effects: EffectManager,
    ledger: Ledger,
    events: Vec<GameEvent>,
    config: SimConfig,
}

impl SimulationEngine {
    /// Create a new engine with the given config. The session starts in
    /// the menu phase; `PlayerCommand::StartDefense` begins play.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_drone_id: 0,
            command_queue: VecDeque::new(),
            spawn_timer: SpawnTimer::new(config.spawn_interval_ms),
            effects: EffectManager::default(),
            ledger: Ledger::default(),
            events: Vec::new(),
            config,
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

    /// Advance the simulation by one tick of measured duration `delta_ms`
    /// and return the resulting snapshot.
    pub fn tick(&mut self, delta_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(delta_ms);
            self.time.advance(delta_ms);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.config.nexus_name,
            &self.ledger,
            &self.effects,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartDefense => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.reset_session();
                    self.phase = GamePhase::Active;
                    log::info!(
                        "defense of {} started (spawn interval {} ms)",
                        self.config.nexus_name,
                        self.config.spawn_interval_ms
                    );
                }
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
            PlayerCommand::Strike { x, y } => {
                if self.phase == GamePhase::Active {
                    self.handle_strike(x, y);
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(self.phase, GamePhase::GameOver | GamePhase::Paused) {
                    self.phase = GamePhase::MainMenu;
                }
            }
        }
    }

    /// Reset all per-session state for a fresh defense.
    fn reset_session(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.next_drone_id = 0;
        self.spawn_timer = SpawnTimer::with_initial_burst(self.config.spawn_interval_ms);
        self.effects.clear();
        self.ledger = Ledger::default();
        self.events.clear();
    }

    /// Resolve a player click: the first drone in id order whose box
    /// contains the point is the target. Only a mobile drone can be
    /// destroyed — a pinned cluster anchor shrugs the click off.
    fn handle_strike(&mut self, x: f64, y: f64) {
        let target = systems::collision::drones_in_id_order(&self.world)
            .into_iter()
            .find(|&(entity, _)| {
                let pos = match self.world.get::<&Position>(entity) {
                    Ok(pos) => *pos,
                    Err(_) => return false,
                };
                let half = match self.world.get::<&DroneBody>(entity) {
                    Ok(body) => body.half_extent,
                    Err(_) => return false,
                };
                box_contains(&pos, half, x, y)
            });

        let (entity, id) = match target {
            Some(hit) => hit,
            None => return,
        };

        let (pos, moving) = match self.world.query_one_mut::<(&Position, &DroneBody)>(entity) {
            Ok((pos, body)) => (*pos, body.moving),
            Err(_) => return,
        };
        if !moving {
            return;
        }

        // Reward scales with how entangled the target was.
        let link_count = links::link_count(&self.world, entity);
        let points = (PER_DRONE_POINTS * (1.0 + link_count as f64)).round() as i64;
        self.ledger.apply_reward(points as f64);

        links::sever_all(&mut self.world, entity);

        self.effects.spawn_explosion(pos.x, pos.y);
        self.effects
            .spawn_score_text(pos.x, pos.y, points.to_string(), Color::CYAN);

        let _ = self.world.despawn(entity);
        self.events.push(GameEvent::DroneDestroyed { id, points });
    }

    /// Run all systems in order. The order is observable and fixed:
    /// spawning, effect aging, collision resolution, movement, damage.
    fn run_systems(&mut self, delta_ms: f64) {
        // 1. Spawn timing
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            self.config.field,
            &mut self.next_drone_id,
            delta_ms,
            &mut self.events,
        );
        // 2. Effect lifecycle
        self.effects.advance(delta_ms);
        // 3. Collision resolution and link formation
        systems::collision::run(&mut self.world, self.config.field, &mut self.events);
        // 4. Movement integration and boundary bouncing
        systems::movement::run(&mut self.world, self.config.field, delta_ms);
        // 5. Damage accrual
        if systems::damage::run(&self.world, &mut self.ledger, delta_ms) {
            self.phase = GamePhase::GameOver;
            let final_score = self.ledger.score().round() as i64;
            self.events.push(GameEvent::HullBreached { final_score });
            log::info!(
                "{} destroyed after {:.1}s; final score {}",
                self.config.nexus_name,
                self.time.elapsed_ms / 1000.0,
                final_score
            );
        }
    }

    // --- Test support ---

    /// Place a drone at an exact position (bypasses the spawner).
    #[cfg(test)]
    pub(crate) fn spawn_drone_at(
        &mut self,
        x: f64,
        y: f64,
        heading: nexus_core::enums::Heading,
        class: nexus_core::enums::DroneClass,
    ) -> u32 {
        use nexus_core::components::{Drone, LinkSet};
        use nexus_core::constants::BASE_HALF_EXTENT;

        let id = self.next_drone_id;
        self.next_drone_id += 1;
        self.world.spawn((
            Drone,
            Position::new(x, y),
            DroneBody {
                id,
                class,
                heading,
                half_extent: BASE_HALF_EXTENT,
                moving: true,
                lifespan_ms: 0.0,
            },
            LinkSet::default(),
        ));
        id
    }

    /// Start a session with spawning disabled, for tests that build the
    /// field by hand.
    #[cfg(test)]
    pub(crate) fn start_bare(&mut self) {
        self.reset_session();
        self.spawn_timer = SpawnTimer::new(f64::INFINITY);
        self.phase = GamePhase::Active;
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
