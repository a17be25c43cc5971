use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "stills")]
#[command(about = "Drive the Stills reminder tag bar from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay interaction events against a fresh tag bar and print the result
    Session {
        /// Events: tap:<kind>, time:HH:MM, date:YYYY-MM-DD, set, dismiss
        events: Vec<String>,
        /// Use the catalog without the "+" affordance
        #[arg(long, conflicts_with = "extended")]
        basic: bool,
        /// Use the catalog with the "+" affordance and hidden tags
        #[arg(long)]
        extended: bool,
        /// Wall clock used to seed pickers (YYYY-MM-DDTHH:MM)
        #[arg(long, value_name = "TIMESTAMP")]
        now: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Flow item sizes into a container and print their offsets
    Layout {
        /// Item sizes as WIDTH or WIDTHxHEIGHT
        sizes: Vec<String>,
        /// Container width
        #[arg(short, long, default_value = "500")]
        width: f64,
        /// Gap between items and rows
        #[arg(short, long, default_value = "8")]
        spacing: f64,
        /// Height for sizes given without one
        #[arg(long, default_value = "34")]
        height: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the profile carousel after a drag or a tap
    Carousel {
        /// Predicted drag translation in points
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        drag: f64,
        /// Open the profile at this index
        #[arg(long)]
        select: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a config file with the default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}
