//! Ignore list maintenance.
//! Makes sure the secrets file never ends up under version control.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::constants::IGNORE_COMMENT;
use crate::error::Result;

/// What [`ensure_ignored`] did to the ignore list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Created,
    Appended,
    AlreadyPresent,
}

/// Ensures `entry` appears in the ignore list at `ignore_path`.
///
/// Presence is a plain substring match. Existing content is never rewritten;
/// a missing entry is appended together with its comment line.
pub fn ensure_ignored<P: AsRef<Path>>(ignore_path: P, entry: &str) -> Result<MergeOutcome> {
    let ignore_path = ignore_path.as_ref();
    let block = format!("{IGNORE_COMMENT}\n{entry}\n");

    if !ignore_path.exists() {
        debug!("Creating {}", ignore_path.display());
        fs::write(ignore_path, block)?;
        return Ok(MergeOutcome::Created);
    }

    let content = fs::read_to_string(ignore_path)?;
    if content.contains(entry) {
        debug!("{} already lists '{entry}'", ignore_path.display());
        return Ok(MergeOutcome::AlreadyPresent);
    }

    let mut appended = String::new();
    if !content.is_empty() {
        if !content.ends_with('\n') {
            appended.push('\n');
        }
        appended.push('\n');
    }
    appended.push_str(&block);

    let mut file = OpenOptions::new().append(true).open(ignore_path)?;
    file.write_all(appended.as_bytes())?;
    Ok(MergeOutcome::Appended)
}
