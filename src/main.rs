use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use inventory_list::{Config, DisplayFormat, LONG_VERSION, Session, version_info};

#[derive(Parser)]
#[command(
    name = "inventory",
    about = "Manage a list of inventory items from an interactive menu",
    version,
    long_version = LONG_VERSION
)]
struct Cli {
    /// YAML config file
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Don't wait for Enter after each command
    #[arg(long)]
    no_pause: bool,
    /// Output format of the inventory listing, overrides the config file
    #[arg(long, value_enum)]
    format: Option<DisplayFormat>,
    /// Print diagnostics to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        eprintln!("{}", version_info());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path, cli.verbose)?,
        None => Config::default(),
    };
    if cli.no_pause {
        config.pause = false;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let mut session = Session::new(config);
    session.run(io::stdin().lock(), io::stdout().lock())
}
