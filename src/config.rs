//! Resolved project configuration.
//! The templating engine hands over a flat key/value map once all questions
//! are answered; this module wraps it and provides typed lookups.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Human-readable project name
pub const PROJECT_NAME: &str = "project_name";
/// Directory name of the generated project
pub const PROJECT_SLUG: &str = "project_slug";
/// One-line project description
pub const PROJECT_DESCRIPTION: &str = "project_description";
/// Dotted package identifier, e.g. `com.example.app`
pub const PACKAGE_NAME: &str = "package_name";
/// Base address of the backend API
pub const API_BASE_URL: &str = "api_base_url";
/// Feature flag: application logging
pub const ENABLE_LOGGING: &str = "enable_logging";
/// Feature flag: crash reporting
pub const ENABLE_CRASH_REPORTING: &str = "enable_crash_reporting";
/// Feature flag: analytics
pub const ENABLE_ANALYTICS: &str = "enable_analytics";

/// Flat, insertion-ordered configuration map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    values: IndexMap<String, serde_json::Value>,
}

impl Configuration {
    pub fn new(values: IndexMap<String, serde_json::Value>) -> Self {
        Self { values }
    }

    /// Parses configuration content, trying JSON first and YAML second.
    pub fn parse(content: &str) -> Result<Self> {
        let values: IndexMap<String, serde_json::Value> = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(_) => serde_yaml::from_str(content).map_err(|e| {
                Error::ConfigError(format!("Invalid configuration format: {e}"))
            })?,
        };
        Ok(Self { values })
    }

    /// Loads and parses a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Applies a `KEY=VALUE` definition; the value is stored as a string.
    pub fn define(&mut self, definition: &str) -> Result<()> {
        let (key, value) = definition.split_once('=').ok_or_else(|| {
            Error::ConfigError(format!("'{definition}' is not in KEY=VALUE form"))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::ConfigError(format!("'{definition}' has an empty key")));
        }
        self.insert(key, serde_json::Value::String(value.to_string()));
        Ok(())
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }

    /// Overlays `other` on top of this configuration.
    pub fn merge(&mut self, other: Configuration) {
        self.values.extend(other.values);
    }

    /// Builds the configuration given on the command line: the optional
    /// file first, then every `KEY=VALUE` definition on top, in order.
    pub fn from_sources<P: AsRef<Path>>(config_file: Option<P>, defines: &[String]) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let mut overrides = Self::default();
        for definition in defines {
            overrides.define(definition)?;
        }
        config.merge(overrides);
        Ok(config)
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Returns a string value.
    ///
    /// # Errors
    /// * `Error::MissingConfigKey` if the key is absent
    /// * `Error::ConfigError` if the value is not a string
    pub fn get_str(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(serde_json::Value::String(s)) => Ok(s),
            Some(other) => {
                Err(Error::ConfigError(format!("'{key}' must be a string, got {other}")))
            }
            None => Err(Error::MissingConfigKey { key: key.to_string() }),
        }
    }

    /// Returns a boolean flag, accepting JSON booleans and yes/no style strings.
    pub fn get_flag(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            Some(serde_json::Value::Bool(b)) => Ok(*b),
            Some(serde_json::Value::String(s)) => parse_flag(s).ok_or_else(|| {
                Error::ConfigError(format!("'{key}' is not a boolean value: '{s}'"))
            }),
            Some(other) => {
                Err(Error::ConfigError(format!("'{key}' must be a boolean, got {other}")))
            }
            None => Err(Error::MissingConfigKey { key: key.to_string() }),
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.values.clone().into_iter().collect())
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "on" => Some(true),
        "n" | "no" | "false" | "0" | "off" => Some(false),
        _ => None,
    }
}
