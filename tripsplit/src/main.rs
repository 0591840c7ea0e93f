mod bootstrap;
mod cli;
mod commands;

use bootstrap::{AppConfig, init_logging};
use clap::Parser as _;
use cli::Cli;
use std::process;
use tripsplit_infrastructure::{JsonFileTripRepository, UuidIdGenerator};

fn main() {
    let config = AppConfig::from_env();
    init_logging();

    let cli = Cli::parse();
    let config = config.with_overrides(cli.data, cli.currency);

    if let Err(err) = run(&config, cli.command) {
        tracing::error!(error = ?err, "Command failed");
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(config: &AppConfig, command: cli::Command) -> anyhow::Result<()> {
    let repository = JsonFileTripRepository::new(&config.data_path);
    let ids = UuidIdGenerator;
    let output = commands::execute(&repository, &ids, config, command)?;
    print!("{output}");
    Ok(())
}
