//! Headless session harness.
//!
//! Starts a defense with parameters from the command line, follows the
//! snapshot stream, and reports hull/score until the nexus falls. With no
//! player attached the drones always win; this exists to exercise a full
//! session end-to-end from a terminal.
//!
//! Usage: nexus-defender [nexus-name] [easy|medium|hard|insane]
//! Set NEXUS_ASSETS to a sprite directory to verify assets load (any
//! failure there is fatal, as it would be for a rendering session).

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use nexus_core::commands::PlayerCommand;
use nexus_core::enums::{Difficulty, GamePhase};
use nexus_core::events::GameEvent;
use nexus_sim::engine::SimConfig;

use nexus_app::game_loop::{spawn_game_loop, GameLoopCommand};
use nexus_app::sprites::SpriteAtlas;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let nexus_name = args.next().unwrap_or_else(|| "Nexus".to_owned());
    let difficulty = match args.next().as_deref() {
        None => Difficulty::default(),
        Some("easy") => Difficulty::Easy,
        Some("medium") => Difficulty::Medium,
        Some("hard") => Difficulty::Hard,
        Some("insane") => Difficulty::Insane,
        Some(other) => {
            eprintln!("unknown difficulty {:?}; expected easy|medium|hard|insane", other);
            std::process::exit(2);
        }
    };

    // A rendering session cannot start without its sprites; honor the same
    // contract here when an asset directory is configured.
    if let Ok(dir) = std::env::var("NEXUS_ASSETS") {
        match SpriteAtlas::load(&PathBuf::from(&dir)) {
            Ok(_) => log::info!("sprite atlas verified at {}", dir),
            Err(err) => {
                log::error!("cannot start session: {}", err);
                std::process::exit(1);
            }
        }
    } else {
        log::info!("NEXUS_ASSETS not set; running headless without sprites");
    }

    let config = SimConfig {
        seed: std::process::id() as u64,
        spawn_interval_ms: difficulty.spawn_interval_ms(),
        nexus_name: nexus_name.clone(),
        ..Default::default()
    };

    let slot = Arc::new(Mutex::new(None));
    let (snap_tx, snap_rx) = mpsc::channel();
    let cmd_tx = spawn_game_loop(config, slot, Some(snap_tx));

    cmd_tx
        .send(GameLoopCommand::Player(PlayerCommand::StartDefense))
        .expect("game loop exited before the session started");

    println!("Defend {}! ({:?})", nexus_name, difficulty);

    let mut last_report_secs = 0u64;
    for snapshot in snap_rx {
        let elapsed_secs = (snapshot.time.elapsed_ms / 1_000.0) as u64;
        if elapsed_secs > last_report_secs {
            last_report_secs = elapsed_secs;
            println!(
                "t={:>4}s  hull {:>6.0} ({:?})  score {:>6.0}  drones {:>3}",
                elapsed_secs,
                snapshot.hull,
                snapshot.hull_status,
                snapshot.score,
                snapshot.drones.len()
            );
        }

        if snapshot.phase == GamePhase::GameOver {
            let final_score = snapshot
                .events
                .iter()
                .find_map(|event| match event {
                    GameEvent::HullBreached { final_score } => Some(*final_score),
                    _ => None,
                })
                .unwrap_or(snapshot.score.round() as i64);
            println!(
                "{} has been destroyed. Final score: {}",
                nexus_name, final_score
            );
            break;
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}
