//! Config command - show and change settings

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use colored::Colorize;
use roster_core::config::{Config, OutputFormat};

use super::get_data_dir;

#[derive(Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show,
    /// Set the default output format (table or json)
    SetFormat {
        format: OutputFormat,
    },
    /// Enable or disable the event log
    Logging {
        #[arg(value_enum)]
        state: Toggle,
    },
}

pub fn run(command: Option<ConfigCommands>) -> Result<()> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir)?;
    let mut config = Config::load(&data_dir)?;

    match command {
        Some(ConfigCommands::SetFormat { format }) => {
            config.output_format = format;
            config.save(&data_dir)?;
            println!("Output format set to {}", config.output_format.to_string().green());
        }
        Some(ConfigCommands::Logging { state }) => {
            config.set_logging(matches!(state, Toggle::On));
            config.save(&data_dir)?;
            if config.stored_logging() {
                println!("Event log {}", "enabled".green());
            } else {
                println!("Event log {}", "disabled".yellow());
            }
            if config.logging_overridden() {
                println!("{}", "ROSTER_LOGGING is set and takes precedence".yellow());
            }
        }
        Some(ConfigCommands::Show) | None => {
            println!("{}", "Settings".bold());
            println!("  Data directory: {}", data_dir.display());
            println!("  Output format: {}", config.output_format);
            let source = if config.logging_overridden() { " (ROSTER_LOGGING)" } else { "" };
            println!(
                "  Logging: {}{}",
                if config.logging_enabled() { "on" } else { "off" },
                source
            );
        }
    }

    Ok(())
}
