//! Messages and options shared between the runner and the game loop thread.

use bulwark_core::commands::PlayerCommand;

/// Commands sent from the runner to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// How the game loop runs.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop after this many ticks.
    pub max_ticks: u64,
    /// Sleep between ticks to hold the tick rate.
    pub realtime: bool,
    /// Stream every Nth snapshot over the snapshot channel.
    pub snapshot_every: Option<u64>,
    /// Stop early once the mission is complete.
    pub stop_on_complete: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: 600,
            realtime: false,
            snapshot_every: None,
            stop_on_complete: true,
        }
    }
}

impl LoopOptions {
    /// Whether the snapshot after `ticks_run` ticks should be streamed.
    pub fn streams(&self, ticks_run: u64) -> bool {
        match self.snapshot_every {
            Some(n) if n > 0 => ticks_run % n == 0,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streams_every_n() {
        let options = LoopOptions {
            snapshot_every: Some(30),
            ..Default::default()
        };
        assert!(!options.streams(1));
        assert!(options.streams(30));
        assert!(options.streams(60));
    }

    #[test]
    fn test_streams_never_when_unset_or_zero() {
        assert!(!LoopOptions::default().streams(30));
        let zero = LoopOptions {
            snapshot_every: Some(0),
            ..Default::default()
        };
        assert!(!zero.streams(30));
    }
}
