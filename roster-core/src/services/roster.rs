//! Roster service - load users from JSON or CSV input

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::result::Error;
use crate::domain::User;

/// CSV row layout: `name,email,age` with an optional age cell
#[derive(Debug, Deserialize)]
struct CsvUserRow {
    name: String,
    email: String,
    #[serde(default)]
    age: Option<u32>,
}

impl From<CsvUserRow> for User {
    fn from(row: CsvUserRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            age: row.age,
        }
    }
}

/// Loads user lists from files or raw input
#[derive(Debug, Default, Clone, Copy)]
pub struct RosterService;

impl RosterService {
    pub fn new() -> Self {
        Self
    }

    /// Load users from a `.json` or `.csv` file
    pub fn load_file(&self, path: &Path) -> Result<Vec<User>> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read user file: {:?}", path))?;
                self.load_json_str(&content)
                    .with_context(|| format!("Failed to parse user file: {:?}", path))
            }
            Some("csv") => {
                let reader = csv::ReaderBuilder::new()
                    .trim(csv::Trim::All)
                    .from_path(path)
                    .map_err(Error::from)
                    .with_context(|| format!("Failed to open CSV file: {:?}", path))?;
                self.read_csv(reader)
                    .with_context(|| format!("Failed to parse CSV file: {:?}", path))
            }
            _ => Err(Error::validation(format!(
                "Unsupported input format: {:?} (expected .json or .csv)",
                path
            ))
            .into()),
        }
    }

    /// Parse a JSON array of users
    pub fn load_json_str(&self, content: &str) -> Result<Vec<User>> {
        let users: Vec<User> = serde_json::from_str(content).map_err(Error::from)?;
        Ok(users)
    }

    /// Parse CSV text with a `name,email,age` header
    pub fn load_csv_str(&self, content: &str) -> Result<Vec<User>> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        self.read_csv(reader)
    }

    fn read_csv<R: std::io::Read>(&self, mut reader: csv::Reader<R>) -> Result<Vec<User>> {
        let mut users = Vec::new();
        for row in reader.deserialize::<CsvUserRow>() {
            users.push(row.map_err(Error::from)?.into());
        }
        Ok(users)
    }
}
