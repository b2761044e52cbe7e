//! Post-generation hook input.
//! The templating engine runs `hooks/post_gen_project` with a JSON document on
//! stdin describing where the project was written and which answers were
//! given.

use std::io::Read;
use std::path::PathBuf;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::config::{Configuration, PROJECT_SLUG};
use crate::error::{Error, Result};

/// Document written to a hook's stdin.
#[derive(Debug, Deserialize)]
pub struct HookInput {
    pub output_dir: PathBuf,
    #[serde(default)]
    pub context: IndexMap<String, serde_json::Value>,
}

impl HookInput {
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content.trim())
            .map_err(|e| Error::HookInputError(format!("Failed to parse hook input as JSON: {e}")))
    }

    pub fn configuration(&self) -> Configuration {
        Configuration::new(self.context.clone())
    }

    /// Directory the pipeline runs in.
    ///
    /// Engines that render a `{{ project_slug }}` directory report the output
    /// root; the project then lives at `output_dir/<project_slug>`.
    pub fn project_root(&self) -> PathBuf {
        let nested = self
            .context
            .get(PROJECT_SLUG)
            .and_then(|slug| slug.as_str())
            .filter(|slug| !slug.is_empty())
            .map(|slug| self.output_dir.join(slug));

        match nested {
            Some(dir) if dir.is_dir() => {
                debug!("Using project directory {}", dir.display());
                dir
            }
            _ => self.output_dir.clone(),
        }
    }
}

/// Reads the hook input from stdin.
pub fn read_hook_input() -> Result<HookInput> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Err(Error::HookInputError(
            "no hook input on stdin; pass --config or --define instead".to_string(),
        ));
    }
    HookInput::parse(&buffer)
}
