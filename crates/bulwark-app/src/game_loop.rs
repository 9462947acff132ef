//! Game loop thread: runs the simulation engine and streams snapshots.
//!
//! The engine is moved into this thread. Commands arrive via an `mpsc`
//! channel; selected snapshots go back over a second channel, and the
//! final snapshot is the thread's return value.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::debug;

use bulwark_core::constants::TICK_RATE;
use bulwark_core::enums::GamePhase;
use bulwark_core::state::SimSnapshot;
use bulwark_sim::SimulationEngine;

use crate::state::{GameLoopCommand, LoopOptions};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Channels and thread handle of a running game loop.
pub struct GameLoop {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub snapshots: mpsc::Receiver<SimSnapshot>,
    pub handle: JoinHandle<SimSnapshot>,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(engine: SimulationEngine, options: LoopOptions) -> io::Result<GameLoop> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snap_tx, snap_rx) = mpsc::channel::<SimSnapshot>();

    let handle = std::thread::Builder::new()
        .name("bulwark-game-loop".into())
        .spawn(move || run_game_loop(engine, options, cmd_rx, snap_tx))?;

    Ok(GameLoop {
        commands: cmd_tx,
        snapshots: snap_rx,
        handle,
    })
}

/// The game loop. Runs until the tick budget is spent, the mission ends,
/// or a Shutdown command (or channel disconnect) arrives.
fn run_game_loop(
    mut engine: SimulationEngine,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snap_tx: mpsc::Sender<SimSnapshot>,
) -> SimSnapshot {
    let mut next_tick_time = Instant::now();
    let mut last = None;
    let mut ticks_run = 0;

    while ticks_run < options.max_ticks {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            debug!("game loop stopping after {ticks_run} ticks");
            break;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        ticks_run += 1;

        // 3. Stream selected snapshots; a gone receiver is not fatal
        if options.streams(ticks_run) {
            let _ = snap_tx.send(snapshot.clone());
        }

        let complete = snapshot.phase == GamePhase::MissionComplete;
        last = Some(snapshot);
        if complete && options.stop_on_complete {
            break;
        }

        // 4. Sleep until next tick, adjusting for time_scale. A frozen
        //    engine (scale 0) is still polled at the nominal rate.
        if options.realtime {
            let time_scale = engine.time_scale();
            let effective_tick_duration = if time_scale > 0.001 {
                TICK_DURATION.div_f64(time_scale)
            } else {
                TICK_DURATION
            };

            next_tick_time += effective_tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > effective_tick_duration * 2 {
                // Too far behind: reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }

    last.unwrap_or_else(|| engine.snapshot())
}

/// Forward pending commands. Returns `false` when the loop should stop.
fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::commands::PlayerCommand;
    use bulwark_core::config::SimConfig;
    use bulwark_core::types::Position;
    use bulwark_sim::systems::wave_spawner::{WaveEntry, WaveSchedule};

    fn started_engine() -> SimulationEngine {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartMission);
        engine
    }

    #[test]
    fn test_drain_commands_forwards_player_commands() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMission))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();

        assert!(drain_commands(&mut engine, &rx));
        assert_eq!(engine.phase(), GamePhase::MainMenu, "commands apply on the next tick");
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
    }

    #[test]
    fn test_drain_commands_stops_on_shutdown_or_disconnect() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMission))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));
        // Commands ahead of the Shutdown are still forwarded.
        assert_eq!(engine.tick().phase, GamePhase::Active);

        assert!(drain_commands(&mut engine, &rx));
        drop(tx);
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_runs_requested_ticks_and_streams_snapshots() {
        let options = LoopOptions {
            max_ticks: 120,
            snapshot_every: Some(30),
            ..Default::default()
        };
        let game_loop = spawn_game_loop(started_engine(), options).unwrap();
        let commands = game_loop.commands;

        let final_snapshot = game_loop.handle.join().unwrap();
        drop(commands);
        let streamed: Vec<SimSnapshot> = game_loop.snapshots.iter().collect();

        assert_eq!(final_snapshot.time.tick, 120);
        let ticks: Vec<u64> = streamed.iter().map(|s| s.time.tick).collect();
        assert_eq!(ticks, vec![30, 60, 90, 120]);
    }

    #[test]
    fn test_shutdown_stops_the_loop() {
        let options = LoopOptions {
            max_ticks: 1_000_000,
            realtime: true,
            ..Default::default()
        };
        let game_loop = spawn_game_loop(started_engine(), options).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        game_loop.commands.send(GameLoopCommand::Shutdown).unwrap();

        let final_snapshot = game_loop.handle.join().unwrap();
        assert!(final_snapshot.time.tick < 1_000_000);
    }

    #[test]
    fn test_stop_on_complete_ends_before_max_ticks() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        // One hostile just inside the margin, heading out of the field.
        engine.start_with_schedule(WaveSchedule {
            waves: vec![WaveEntry::column(0, 1, Position::new(300.0, 640.0), 30.0)],
        });
        let options = LoopOptions {
            max_ticks: 10_000,
            ..Default::default()
        };
        let game_loop = spawn_game_loop(engine, options).unwrap();

        let final_snapshot = game_loop.handle.join().unwrap();
        assert_eq!(final_snapshot.phase, GamePhase::MissionComplete);
        assert!(final_snapshot.time.tick < 100);
        assert_eq!(final_snapshot.score.hostiles_leaked, 1);
    }

    #[test]
    fn test_completed_mission_holds_without_stop_on_complete() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.start_with_schedule(WaveSchedule {
            waves: vec![WaveEntry::column(0, 1, Position::new(300.0, 640.0), 30.0)],
        });
        let options = LoopOptions {
            max_ticks: 200,
            stop_on_complete: false,
            ..Default::default()
        };
        let game_loop = spawn_game_loop(engine, options).unwrap();

        let final_snapshot = game_loop.handle.join().unwrap();
        assert_eq!(final_snapshot.phase, GamePhase::MissionComplete);
        assert!(final_snapshot.time.tick < 200, "a completed mission stops the clock");
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
