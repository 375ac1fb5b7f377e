//! promptsift - Collect "prompt" values from a tree of JSON files.

use clap::Parser;
use promptsift_cli::commands;
use promptsift_cli::config::Settings;
use promptsift_cli::{Cli, Config, Formatter, EXAMPLE, USAGE};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("{}", USAGE);
            println!("{}", EXAMPLE);
            process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        if !e.is_reported() {
            println!("Error: {}", e);
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> promptsift_cli::Result<()> {
    let config = Config::load()?;

    init_tracing(&config.settings);

    let formatter = Formatter::new(config.settings.color);

    commands::execute_extract(&cli, &config, &formatter)?;

    Ok(())
}

fn init_tracing(settings: &Settings) {
    // RUST_LOG takes precedence over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
