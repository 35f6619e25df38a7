//! Roster CLI - user statistics in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{average, config, greet, logs, stats};

/// Roster - user records and statistics
#[derive(Parser)]
#[command(name = "roster", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize users from a JSON or CSV file (or JSON on stdin)
    Stats {
        /// Path to a .json or .csv user file
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the arithmetic mean of a list of numbers
    Average {
        /// Values to average (read from stdin when omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Greet a user by name, or every user in a file
    Greet {
        /// Path to a .json or .csv user file
        file: Option<PathBuf>,
        /// Name to greet
        #[arg(long, short)]
        name: Option<String>,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Stats { .. } => "stats",
            Commands::Average { .. } => "average",
            Commands::Greet { .. } => "greet",
            Commands::Logs { .. } => "logs",
            Commands::Config { .. } => "config",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command_name = cli.command.name();
    let data_dir = commands::get_data_dir().ok();

    match commands::run_logged(data_dir.as_deref(), command_name, || run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Stats { file, json } => stats::run(file.as_deref(), json),
        Commands::Average { values, json } => average::run(values, json),
        Commands::Greet { file, name } => greet::run(file.as_deref(), name.as_deref()),
        Commands::Logs { command } => logs::run(command),
        Commands::Config { command } => config::run(command),
    }
}
