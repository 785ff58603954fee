use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use sangay::cli::args::{Cli, Commands};
use sangay::cli::commands;
use sangay::config::{Config, Paths};
use sangay::error::SangayError;
use sangay::logging::{self, LogTarget};
use sangay::storage::SqliteStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SangayError> {
    let cli = Cli::parse();
    let format = cli.output;
    let paths = Paths::new()?;
    let config = match Config::load_from_path(&paths.config_file) {
        Ok(config) => config,
        // `config path` and `config init --force` must work on a broken file.
        Err(e) if matches!(cli.command, Commands::Config(_)) => {
            eprintln!("{}: {}", "warning".yellow().bold(), e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    let target = if cli.command.is_interactive() {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    if !logging::init(&config.logging, target, &paths)? {
        eprintln!("{}: logging was already initialized", "warning".yellow().bold());
    }

    let output = match cli.command {
        Commands::Mood(args) => {
            commands::mood(&SqliteStore::open()?, args.command, &config.history, format)?
        }
        Commands::Journal(args) => {
            commands::journal(&SqliteStore::open()?, args.command, &config.history, format)?
        }
        Commands::Chat { message } => commands::chat(message, format)?,
        Commands::Focus(args) => commands::focus(&SqliteStore::open()?, args, &config, format)?,
        Commands::Breathe(args) => commands::breathe(&SqliteStore::open()?, args, &config, format)?,
        Commands::Sessions(args) => commands::sessions(&SqliteStore::open()?, args.command, format)?,
        Commands::Config(args) => commands::config(args.command, &paths, &config, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
