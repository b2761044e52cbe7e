//! Post-generation pipeline orchestration.
//! Runs every setup step against an explicit project root, stopping at the
//! first error.

use std::path::{Path, PathBuf};

use crate::config::{Configuration, PACKAGE_NAME, PROJECT_NAME, PROJECT_SLUG};
use crate::constants::{IGNORE_FILE, REGENERABLE_ARTIFACTS, SECRETS_FILE};
use crate::error::Result;
use crate::gitignore::{ensure_ignored, MergeOutcome};
use crate::prune::prune_artifacts;
use crate::relocate::{relocate_main_activity, Origin, Relocation};
use crate::report::NextSteps;
use crate::secrets::write_secrets_file;

/// What a successful run changed on disk.
#[derive(Debug)]
pub struct PipelineReport {
    pub secrets_file: PathBuf,
    pub relocation: Relocation,
    pub pruned: Vec<PathBuf>,
    pub ignore_list: MergeOutcome,
}

#[derive(Debug)]
pub struct Pipeline<'a> {
    project_root: &'a Path,
    config: &'a Configuration,
    show_next_steps: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(project_root: &'a Path, config: &'a Configuration) -> Self {
        Self { project_root, config, show_next_steps: true }
    }

    /// Toggles the closing guidance report.
    pub fn show_next_steps(mut self, show: bool) -> Self {
        self.show_next_steps = show;
        self
    }

    /// Runs secrets → structure → prune → ignore list → guidance.
    ///
    /// There is no rollback: an error leaves the steps before it applied.
    /// The guidance keys are resolved up front so the report cannot fail
    /// once the tree has been changed.
    pub fn run(&self) -> Result<PipelineReport> {
        let next_steps = NextSteps {
            project_name: self.config.get_str(PROJECT_NAME)?,
            project_slug: self.config.get_str(PROJECT_SLUG)?,
        };

        println!("🔧 Setting up Flutter project in {}...", self.project_root.display());

        let secrets_file = write_secrets_file(self.project_root, self.config)?;
        println!("✅ Created {SECRETS_FILE} file");

        let relocation =
            relocate_main_activity(self.project_root, self.config.get_str(PACKAGE_NAME)?)?;
        if relocation.legacy_removed {
            println!("✅ Cleaned up old Android package structure");
        }
        match relocation.origin {
            Origin::Moved => println!("✅ Created {}", relocation.path.display()),
            Origin::Kept => println!("✅ Kept existing {}", relocation.path.display()),
            Origin::Synthesized => {
                println!("✅ Created {} from skeleton", relocation.path.display())
            }
        }

        let pruned = prune_artifacts(self.project_root, &REGENERABLE_ARTIFACTS)?;
        for path in &pruned {
            println!("✅ Removed {}", path.display());
        }

        let ignore_list = ensure_ignored(self.project_root.join(IGNORE_FILE), SECRETS_FILE)?;
        match ignore_list {
            MergeOutcome::Created => println!("✅ Created {IGNORE_FILE} with {SECRETS_FILE} entry"),
            MergeOutcome::Appended => println!("✅ Added {SECRETS_FILE} to {IGNORE_FILE}"),
            MergeOutcome::AlreadyPresent => {}
        }

        if self.show_next_steps {
            println!("{next_steps}");
        }

        Ok(PipelineReport { secrets_file, relocation, pruned, ignore_list })
    }
}
