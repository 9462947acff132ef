use anyhow::Result;
use clap::Parser;

use bulwark_app::cli::Args;
use bulwark_app::logging;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    bulwark_app::run(&args)
}
