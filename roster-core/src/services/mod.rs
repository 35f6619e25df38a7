//! Service layer
//!
//! Services wrap the pure domain operations and the I/O around them
//! (input loading, event logging).

pub mod logging;
mod roster;
pub mod stats;

pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use roster::RosterService;
pub use stats::{calculate_average, process_users, StatsReport, StatsService};
