//! CLI driving the visualization pipeline.
//!
//! Each subcommand maps to one pipeline stage; `all` runs plots, overlay
//! plots, then publish, the order the publish step depends on.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use wrfviz::io::config::load_config;
use wrfviz::io::process::runner_for;
use wrfviz::{logging, overlay, plots, publish};

#[derive(Parser)]
#[command(name = "wrfviz", version, about = "WRF forecast visualization pipeline")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "wrfviz.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the plain plotting scripts.
    Plots,
    /// Run the overlay plotting scripts and warp their raster output.
    Overlay,
    /// Copy produced plots into the web publish directories.
    Publish,
    /// Run plots, overlay plots, then publish.
    All,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let runner = runner_for(&config);
    match cli.command {
        Command::Plots => plots::produce_plots(&config, runner.as_ref()),
        Command::Overlay => overlay::produce_overlay_plots(&config, runner.as_ref()),
        Command::Publish => publish::publish_to_web(&config),
        Command::All => {
            plots::produce_plots(&config, runner.as_ref())?;
            overlay::produce_overlay_plots(&config, runner.as_ref())?;
            publish::publish_to_web(&config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all() {
        let cli = Cli::parse_from(["wrfviz", "all"]);
        assert!(matches!(cli.command, Command::All));
        assert_eq!(cli.config, PathBuf::from("wrfviz.toml"));
    }

    #[test]
    fn parse_config_override() {
        let cli = Cli::parse_from(["wrfviz", "--config", "ops.toml", "publish"]);
        assert!(matches!(cli.command, Command::Publish));
        assert_eq!(cli.config, PathBuf::from("ops.toml"));
    }
}
