//! CLI command implementations

pub mod average;
pub mod config;
pub mod greet;
pub mod logs;
pub mod stats;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roster_core::config::{Config, OutputFormat};
use roster_core::{EntryPoint, LogEvent, LoggingService, RosterContext, User};

/// Open the event log for a data directory
///
/// Returns None when logging is disabled or the log cannot be opened.
pub fn open_logger(data_dir: &Path) -> Option<LoggingService> {
    std::fs::create_dir_all(data_dir).ok()?;
    let config = Config::load(data_dir).unwrap_or_default();
    if !config.logging_enabled() {
        return None;
    }
    LoggingService::new(data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Run a command, recording its execution and any failure in the event log
///
/// Log writes never change the command's result. The log database is closed
/// while the command runs so `logs` can open its own handle.
pub fn run_logged<F>(data_dir: Option<&Path>, command: &str, f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    if let Some(logger) = data_dir.and_then(open_logger) {
        let _ = logger.log_command(command);
    }

    let result = f();

    if let Err(e) = &result {
        if let Some(logger) = data_dir.and_then(open_logger) {
            let _ = logger.log(LogEvent::command_failed(command, e));
        }
    }

    result
}

/// Get the roster data directory from `ROSTER_DIR` or `~/.roster`
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ROSTER_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".roster"))
        .context("Could not find home directory")
}

/// Get or create the roster context
pub fn get_context() -> Result<RosterContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create roster directory: {:?}", data_dir))?;

    RosterContext::new(&data_dir).context("Failed to initialize roster context")
}

/// Whether output should be JSON, given the `--json` flag and config default
pub fn wants_json(ctx: &RosterContext, json_flag: bool) -> bool {
    json_flag || ctx.config.output_format == OutputFormat::Json
}

/// Read all of stdin when it is piped, or None on a TTY
pub fn read_piped_stdin() -> Result<Option<String>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(Some(buffer))
}

/// Load users from a file, or a JSON array piped on stdin
pub fn load_users(ctx: &RosterContext, file: Option<&Path>) -> Result<Vec<User>> {
    if let Some(path) = file {
        return ctx.roster_service.load_file(path);
    }
    match read_piped_stdin()? {
        Some(content) => ctx
            .roster_service
            .load_json_str(&content)
            .context("Failed to parse users from stdin"),
        None => anyhow::bail!("No user file provided. Pass a .json/.csv path or pipe JSON on stdin."),
    }
}
