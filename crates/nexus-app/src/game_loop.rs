//! Game loop thread — drives the engine at a nominal 20ms period.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc`; each iteration drains them,
//! ticks the engine with the measured wall-clock delta, and publishes
//! the snapshot into a shared slot (and to an optional subscriber).
//!
//! The delta is measured every iteration whether the engine is paused or
//! not, so resuming never feeds a frozen-time spike into the simulation.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use nexus_core::commands::PlayerCommand;
use nexus_core::constants::TICK_PERIOD_MS;
use nexus_core::state::GameStateSnapshot;
use nexus_sim::engine::{SimConfig, SimulationEngine};

/// Nominal duration of one loop iteration.
const TICK_DURATION: Duration = Duration::from_millis(TICK_PERIOD_MS as u64);

/// Commands sent from the embedding layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared slot holding the most recent snapshot for synchronous polling.
pub type SnapshotSlot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the embedding layer to use. Dropping
/// the sender also shuts the loop down.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: SnapshotSlot,
    subscriber: Option<mpsc::Sender<GameStateSnapshot>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("nexus-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, subscriber);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    subscriber: Option<mpsc::Sender<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut last_tick = Instant::now();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick with the measured delta (the engine handles
        //    pause semantics internally)
        let now = Instant::now();
        let delta_ms = now.duration_since(last_tick).as_secs_f64() * 1_000.0;
        last_tick = now;
        let snapshot = engine.tick(delta_ms);

        // 3. Publish the snapshot
        if let Some(tx) = &subscriber {
            let _ = tx.send(snapshot.clone());
        }
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next nominal tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
