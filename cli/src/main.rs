mod cli;
mod commands;
mod format;
mod output;

use clap::Parser;
use linkboard::{config, error::Result};
use log::{debug, LevelFilter};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // RUST_LOG still wins over the --debug default
    env_logger::Builder::new()
        .filter_level(if args.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    if args.version {
        println!("linkboard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };
    debug!("Using palette of {} color(s)", cfg.palette.len());

    cli::handle_args(args, &cfg)?;

    Ok(())
}
