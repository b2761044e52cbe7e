//! Secrets file synthesis.
//! The `.env` file is rendered from a fixed, ordered key table and written
//! fresh on every run.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{
    Configuration, API_BASE_URL, ENABLE_ANALYTICS, ENABLE_CRASH_REPORTING, ENABLE_LOGGING,
    PROJECT_NAME,
};
use crate::constants::SECRETS_FILE;
use crate::error::Result;

/// Where the value of a secrets entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretValue {
    /// Copied verbatim from a configuration string
    Config(&'static str),
    /// A configuration flag rendered as `true`/`false`
    Flag(&'static str),
    /// Fixed value
    Literal(&'static str),
    /// Always empty; filled in by the user later
    Blank,
}

/// Ordered key table of the secrets file.
pub const SECRET_ENTRIES: [(&str, SecretValue); 11] = [
    ("API_BASE_URL", SecretValue::Config(API_BASE_URL)),
    ("API_TIMEOUT", SecretValue::Literal("30000")),
    ("APP_NAME", SecretValue::Config(PROJECT_NAME)),
    ("APP_VERSION", SecretValue::Literal("1.0.0")),
    ("DEBUG_MODE", SecretValue::Literal("true")),
    ("ENABLE_LOGGING", SecretValue::Flag(ENABLE_LOGGING)),
    ("ENABLE_CRASH_REPORTING", SecretValue::Flag(ENABLE_CRASH_REPORTING)),
    ("ENABLE_ANALYTICS", SecretValue::Flag(ENABLE_ANALYTICS)),
    ("FIREBASE_API_KEY", SecretValue::Blank),
    ("SENTRY_DSN", SecretValue::Blank),
    ("MIXPANEL_TOKEN", SecretValue::Blank),
];

fn resolve(value: SecretValue, config: &Configuration) -> Result<String> {
    Ok(match value {
        SecretValue::Config(key) => config.get_str(key)?.to_string(),
        SecretValue::Flag(key) => config.get_flag(key)?.to_string(),
        SecretValue::Literal(v) => v.to_string(),
        SecretValue::Blank => String::new(),
    })
}

/// Renders the secrets file content.
///
/// # Errors
/// * `Error::MissingConfigKey` if a referenced key is absent
pub fn render_secrets(config: &Configuration) -> Result<String> {
    let mut content =
        format!("# Environment variables for {}\n", config.get_str(PROJECT_NAME)?);
    for (key, value) in SECRET_ENTRIES {
        content.push_str(&format!("{key}={}\n", resolve(value, config)?));
    }
    Ok(content)
}

/// Writes the secrets file under `project_root`, replacing any previous one.
pub fn write_secrets_file<P: AsRef<Path>>(
    project_root: P,
    config: &Configuration,
) -> Result<PathBuf> {
    let path = project_root.as_ref().join(SECRETS_FILE);
    let content = render_secrets(config)?;
    debug!("Writing secrets file: {}", path.display());
    fs::write(&path, content)?;
    Ok(path)
}
