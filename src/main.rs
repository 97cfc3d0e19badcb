use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;
mod config;
mod shell;

use cli::Cli;
use config::Config;
use shell::Shell;
use todor::TodoStore;

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todor")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("todor.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::from_default_env();
    // RUST_LOG wins over the config file
    if std::env::var_os("RUST_LOG").is_none() {
        if let Some(level) = &config.log_level {
            builder.parse_filters(level);
        }
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    let mut store: TodoStore = TodoStore::default();
    for content in &config.seed {
        store.create(content.as_str());
    }
    info!("Seeded store with {} item(s)", store.len());

    let prompt = if cli.json { "" } else { config.shell.prompt.as_str() };
    let stdin = io::stdin();
    let failures = Shell::new(&mut store, prompt, cli.json).run(stdin.lock(), io::stdout().lock())?;

    if failures > 0 && config.shell.fail_on_error {
        eyre::bail!("{} command(s) failed", failures);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if !config.shell.color {
        colored::control::set_override(false);
    }

    // Setup logging before any store activity
    setup_logging(&config).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
