//! Core domain entities
//!
//! Pure data structures with their derived values - no I/O or external
//! dependencies.

mod stats;
mod user;
pub mod result;

pub use stats::UserStatistics;
pub use user::{User, ADULT_AGE};
