//! BULWARK headless runner.
//!
//! Wires the simulation engine to a game loop thread and writes JSON
//! snapshots to stdout.

pub mod cli;
pub mod game_loop;
pub mod logging;
pub mod state;

use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use log::info;

use bulwark_core::commands::PlayerCommand;
use bulwark_sim::SimulationEngine;

use crate::cli::Args;
use crate::state::LoopOptions;

pub use bulwark_core as core;

/// Run one mission per the command-line arguments.
pub fn run(args: &Args) -> Result<()> {
    let config = args
        .load_config()
        .with_context(|| match &args.config {
            Some(path) => format!("loading config from {}", path.display()),
            None => "building default config".to_string(),
        })?;
    info!(
        "seed {}, {} ticks{}",
        config.seed,
        args.ticks,
        if args.realtime { ", realtime" } else { "" }
    );

    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::StartMission);

    let options = LoopOptions {
        max_ticks: args.ticks,
        realtime: args.realtime,
        snapshot_every: args.snapshot_every,
        stop_on_complete: true,
    };
    let game_loop =
        game_loop::spawn_game_loop(engine, options).context("spawning game loop thread")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for snapshot in game_loop.snapshots.iter() {
        writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
    }

    let final_snapshot = game_loop
        .handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    drop(game_loop.commands);

    let score = &final_snapshot.score;
    info!(
        "{:?} at {:.2}s: {} spawned, {} killed, {} leaked, {} shots",
        final_snapshot.phase,
        score.mission_time_secs,
        score.hostiles_spawned,
        score.hostiles_killed,
        score.hostiles_leaked,
        score.shots_fired
    );
    writeln!(out, "{}", serde_json::to_string(&final_snapshot)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_run_short_mission() {
        let args = Args::try_parse_from(["bulwark", "--ticks", "30", "--snapshot-every", "10"])
            .unwrap();
        run(&args).unwrap();
    }

    #[test]
    fn test_run_reports_bad_config_path() {
        let args = Args::try_parse_from(["bulwark", "--config", "/nonexistent/bulwark.json"])
            .unwrap();
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/bulwark.json"));
    }
}
