//! Statistics domain model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Counts summarizing a collection of users
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub total: usize,
    pub adults: usize,
    pub with_email: usize,
}

impl UserStatistics {
    /// Key/value view with the fixed keys `total`, `adults`, `with_email`
    pub fn as_map(&self) -> BTreeMap<&'static str, usize> {
        BTreeMap::from([
            ("total", self.total),
            ("adults", self.adults),
            ("with_email", self.with_email),
        ])
    }
}
