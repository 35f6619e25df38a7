//! Configuration management
//!
//! Settings live in `settings.json` in the data directory:
//! ```json
//! {
//!   "app": { "outputFormat": "table", "logging": true, ... }
//! }
//! ```
//! Only `app.outputFormat` and `app.logging` are managed here; every other
//! key is left untouched on save.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::result::Error;

/// How the CLI renders results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::config(format!("Unknown output format: {}", other))),
        }
    }
}

const DEFAULT_LOGGING: bool = true;

/// Parse a `ROSTER_LOGGING`-style flag
fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" | "TRUE" | "YES" => Some(true),
        "false" | "0" | "no" | "FALSE" | "NO" => Some(false),
        _ => None,
    }
}

/// Roster configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_format: OutputFormat,
    /// Value stored in settings.json
    logging: bool,
    /// Value from `ROSTER_LOGGING`; never written back to disk
    logging_override: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            logging: DEFAULT_LOGGING,
            logging_override: None,
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing or unparseable file yields defaults. Each managed key falls
    /// back to its default on its own when its value is invalid.
    /// `ROSTER_LOGGING` overrides the stored logging flag.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: Value = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or(Value::Null)
        } else {
            Value::Null
        };
        let app = &raw["app"];

        let output_format = serde_json::from_value(app["outputFormat"].clone()).unwrap_or_default();
        let logging = app["logging"].as_bool().unwrap_or(DEFAULT_LOGGING);
        let logging_override = std::env::var("ROSTER_LOGGING")
            .ok()
            .as_deref()
            .and_then(parse_flag);

        Ok(Self {
            output_format,
            logging,
            logging_override,
        })
    }

    /// Whether the event log is enabled, after the environment override
    pub fn logging_enabled(&self) -> bool {
        self.logging_override.unwrap_or(self.logging)
    }

    /// Logging flag as stored in settings.json
    pub fn stored_logging(&self) -> bool {
        self.logging
    }

    /// True when `ROSTER_LOGGING` decides the effective logging flag
    pub fn logging_overridden(&self) -> bool {
        self.logging_override.is_some()
    }

    /// Change the stored logging flag
    pub fn set_logging(&mut self, enabled: bool) {
        self.logging = enabled;
    }

    /// Save config to the data directory
    ///
    /// Rewrites only the managed keys. Refuses to overwrite a file that is
    /// not a JSON object.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<Value>(&content).map_err(|e| {
                Error::config(format!(
                    "Refusing to overwrite unreadable settings file {:?}: {}",
                    settings_path, e
                ))
            })?
        } else {
            json!({})
        };

        let root = settings
            .as_object_mut()
            .ok_or_else(|| Error::config("settings.json must contain a JSON object"))?;
        let app = root
            .entry("app")
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .ok_or_else(|| Error::config("\"app\" in settings.json must be an object"))?;

        app.insert("outputFormat".to_string(), serde_json::to_value(self.output_format)?);
        app.insert("logging".to_string(), Value::Bool(self.logging));

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn read_raw(dir: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(dir.join("settings.json")).unwrap()).unwrap()
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.stored_logging());
    }

    #[test]
    fn test_load_malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_load_invalid_value_keeps_other_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"outputFormat": "yaml", "logging": false}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(!config.stored_logging());
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"theme": "dark"}, "extra": {"keep": 1}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.output_format = OutputFormat::Json;
        config.save(dir.path()).unwrap();

        let raw = read_raw(dir.path());
        assert_eq!(raw["app"]["outputFormat"], "json");
        assert_eq!(raw["app"]["theme"], "dark");
        assert_eq!(raw["extra"]["keep"], 1);

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_save_with_invalid_value_preserves_unknown_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"outputFormat": "yaml", "theme": "dark"}, "extra": {"keep": 1}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.set_logging(false);
        config.save(dir.path()).unwrap();

        let raw = read_raw(dir.path());
        assert_eq!(raw["app"]["theme"], "dark");
        assert_eq!(raw["extra"]["keep"], 1);
        assert_eq!(raw["app"]["logging"], false);
        assert_eq!(raw["app"]["outputFormat"], "table");
    }

    #[test]
    fn test_save_refuses_unreadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::default().save(dir.path()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_logging_override_is_not_saved() {
        let dir = tempdir().unwrap();
        let mut config = Config {
            logging_override: Some(false),
            ..Config::default()
        };
        assert!(!config.logging_enabled());
        assert!(config.logging_overridden());

        config.output_format = OutputFormat::Json;
        config.save(dir.path()).unwrap();

        let raw = read_raw(dir.path());
        assert_eq!(raw["app"]["logging"], true);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("NO"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
