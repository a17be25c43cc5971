//! Stills CLI - drive the reminder tag bar from the terminal
//!
//! Replays interaction events headlessly, prints chip layouts, and manages the
//! shared config file.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::carousel::run_carousel;
use crate::commands::common::{load_config, resolve_config_path};
use crate::commands::completions::run_completions;
use crate::commands::config::{run_config_init, run_config_path, run_config_show};
use crate::commands::layout::run_layout;
use crate::commands::session::{run_session, SessionArgs};
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stills=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config)?;

    match cli.command {
        Commands::Session {
            events,
            basic,
            extended,
            now,
            json,
        } => {
            let config = load_config(&config_path)?;
            let args = SessionArgs {
                events,
                extended: if basic {
                    Some(false)
                } else if extended {
                    Some(true)
                } else {
                    None
                },
                now,
                json,
            };
            run_session(&args, &config)?;
        }
        Commands::Layout {
            sizes,
            width,
            spacing,
            height,
            json,
        } => run_layout(&sizes, width, spacing, height, json)?,
        Commands::Carousel { drag, select, json } => run_carousel(drag, select, json)?,
        Commands::Config { command } => match command {
            ConfigCommands::Init { force } => run_config_init(&config_path, force)?,
            ConfigCommands::Show => run_config_show(&config_path)?,
            ConfigCommands::Path => run_config_path(&config_path),
        },
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
