//! advent - verify the lowest-numbered puzzle solution against its recorded answers

mod answers;
mod cli;
mod config;
mod discovery;
mod error;
mod logging;
mod output;
mod runner;
mod trim;

// Link the solution modules so their plugins are collected
use advent_solutions as _;

use advent_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use runner::Runner;
use tracing::debug;

fn main() {
    let args = Args::parse();
    logging::configure_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry()?;

    let mut formatter = OutputFormatter::stdout();
    Runner::new(&config, &registry).run(&mut formatter)?;

    Ok(())
}

/// Build the registry from every linked solution module
fn build_registry() -> Result<SolverRegistry, error::CliError> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    debug!(
        days = ?registry.iter_info().map(|info| info.day).collect::<Vec<_>>(),
        "registered solution modules"
    );
    Ok(registry)
}
