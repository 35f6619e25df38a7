//! Roster Core - user records and statistics
//!
//! - **domain**: `User`, `UserStatistics`, error types
//! - **services**: averaging and user summaries, input loading, event logging
//! - **config**: settings.json handling

pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod services;

use std::path::Path;

use config::Config;
use services::{RosterService, StatsService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{User, UserStatistics, ADULT_AGE};
pub use services::{
    calculate_average, process_users, EntryPoint, LogEvent, LoggingService, StatsReport,
};

/// Main context for roster operations
///
/// Holds the loaded configuration and the services built on top of it.
pub struct RosterContext {
    pub config: Config,
    pub roster_service: RosterService,
    pub stats_service: StatsService,
}

impl RosterContext {
    /// Create a context for the given data directory
    pub fn new(data_dir: &Path) -> anyhow::Result<Self> {
        let config = Config::load(data_dir)?;

        Ok(Self {
            config,
            roster_service: RosterService::new(),
            stats_service: StatsService::new(),
        })
    }

    /// Load users from a file and summarize them
    pub fn report_for_file(&self, path: &Path) -> anyhow::Result<StatsReport> {
        let users = self.roster_service.load_file(path)?;
        Ok(self.stats_service.report(&users))
    }
}
