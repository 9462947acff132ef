//! Command-line arguments for the headless runner.

use std::path::PathBuf;

use clap::Parser;

use bulwark_core::config::SimConfig;
use bulwark_core::error::ConfigError;

/// Headless tower-defence engagement simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON config file; omitted fields keep their defaults
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// RNG seed, overriding the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 600)]
    pub ticks: u64,

    /// Pace ticks at the tick rate (scaled by the time scale)
    #[arg(long)]
    pub realtime: bool,

    /// Print a JSON snapshot line every N ticks
    #[arg(long, value_name = "N")]
    pub snapshot_every: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Load the config file (or defaults) and apply command-line overrides.
    pub fn load_config(&self) -> Result<SimConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bulwark"]).unwrap();
        assert_eq!(args.ticks, 600);
        assert!(!args.realtime);
        assert!(args.snapshot_every.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.load_config().unwrap().seed, 42);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "bulwark",
            "--seed",
            "7",
            "--ticks",
            "120",
            "--snapshot-every",
            "30",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.ticks, 120);
        assert_eq!(args.snapshot_every, Some(30));
        assert!(args.verbose);
        assert_eq!(args.load_config().unwrap().seed, 7);
    }

    #[test]
    fn test_missing_config_file_is_an_io_error() {
        let args =
            Args::try_parse_from(["bulwark", "--config", "/nonexistent/bulwark.json"]).unwrap();
        assert!(matches!(args.load_config(), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_rejects_bad_tick_count() {
        assert!(Args::try_parse_from(["bulwark", "--ticks", "many"]).is_err());
    }
}
