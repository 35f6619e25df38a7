//! Stats service - averages and user summaries

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{User, UserStatistics};

/// Arithmetic mean of `numbers`.
///
/// Fails with [`Error::InvalidArgument`] on an empty slice instead of
/// producing NaN.
pub fn calculate_average(numbers: &[f64]) -> Result<f64> {
    if numbers.is_empty() {
        return Err(Error::invalid_argument(
            "Cannot calculate average of empty list",
        ));
    }
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Count users, adults and users with an email address
pub fn process_users(users: &[User]) -> UserStatistics {
    UserStatistics {
        total: users.len(),
        adults: users.iter().filter(|u| u.is_adult()).count(),
        with_email: users.iter().filter(|u| u.has_email()).count(),
    }
}

/// Statistics plus the average age of users whose age is known
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub statistics: UserStatistics,
    pub average_age: Option<f64>,
}

/// Stats service for user summaries
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize a list of users
    pub fn summarize(&self, users: &[User]) -> UserStatistics {
        process_users(users)
    }

    /// Average of arbitrary values
    pub fn average(&self, numbers: &[f64]) -> Result<f64> {
        calculate_average(numbers)
    }

    /// Average age over users with a known age
    pub fn average_age(&self, users: &[User]) -> Result<f64> {
        let ages: Vec<f64> = users
            .iter()
            .filter_map(|u| u.age)
            .map(f64::from)
            .collect();
        calculate_average(&ages)
    }

    /// Full report used by the `stats` command
    pub fn report(&self, users: &[User]) -> StatsReport {
        StatsReport {
            statistics: self.summarize(users),
            average_age: self.average_age(users).ok(),
        }
    }
}
