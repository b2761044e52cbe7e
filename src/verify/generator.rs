//! Project generators the verification harness can drive.
//! A generator expands a template into an output directory and runs the
//! post-generation setup, the same way a user's `generate` invocation would.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use walkdir::WalkDir;

use crate::config::{Configuration, PROJECT_SLUG};
use crate::constants::{POST_GEN_HOOK, TEMPLATE_CONFIG_FILES, TEMPLATE_NAMESPACE};
use crate::error::{Error, Result};
use crate::pipeline::Pipeline;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};

/// Expands `template_dir` into `output_dir` with the given answers.
///
/// The generated project is expected at `output_dir/<project_slug>`.
pub trait ProjectGenerator {
    fn generate(&self, template_dir: &Path, output_dir: &Path, answers: &Configuration) -> Result<()>;
}

/// Runs an external templating engine.
///
/// `{template}` and `{output}` in the arguments are replaced by the actual
/// paths. The answers are written to the engine's stdin as a JSON object.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    fn expand_args(&self, template_dir: &Path, output_dir: &Path) -> Vec<String> {
        let template = template_dir.display().to_string();
        let output = output_dir.display().to_string();
        self.args
            .iter()
            .map(|arg| arg.replace("{template}", &template).replace("{output}", &output))
            .collect()
    }
}

impl ProjectGenerator for CommandGenerator {
    fn generate(&self, template_dir: &Path, output_dir: &Path, answers: &Configuration) -> Result<()> {
        let args = self.expand_args(template_dir, output_dir);
        debug!("Running generator: {} {}", self.program, args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::GeneratorError(format!("failed to start '{}': {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(answers.to_value().to_string().as_bytes()) {
                Ok(()) => {}
                // The engine exited or closed stdin without reading the answers.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("'{}' did not read the answers from stdin", self.program);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::GeneratorError(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}

/// In-tree engine: renders paths and text files with MiniJinja and runs the
/// post-generation pipeline on the result.
///
/// With [`MiniJinjaGenerator::run_template_hooks`] the template's own
/// `hooks/post_gen_project` is rendered and executed instead, from inside the
/// generated project and without stdin.
#[derive(Debug, Default)]
pub struct MiniJinjaGenerator {
    renderer: MiniJinjaRenderer,
    run_template_hooks: bool,
    hook_env: Vec<(String, String)>,
}

impl MiniJinjaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run_template_hooks(mut self, run: bool) -> Self {
        self.run_template_hooks = run;
        self
    }

    /// Sets an environment variable for the hook script.
    pub fn hook_env<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.hook_env.push((key.into(), value.into()));
        self
    }

    fn run_post_hook(&self, template_dir: &Path, project_root: &Path, context: &serde_json::Value) -> Result<()> {
        let hook = template_dir.join(POST_GEN_HOOK);
        if !hook.is_file() {
            return Err(Error::GeneratorError(format!("'{}' not found", hook.display())));
        }

        let mut script = tempfile::NamedTempFile::new()?;
        script.write_all(self.renderer.render(&fs::read_to_string(&hook)?, context)?.as_bytes())?;
        script.flush()?;

        debug!("Running {} in {}", hook.display(), project_root.display());
        let output = Command::new("sh")
            .arg(script.path())
            .current_dir(project_root)
            .envs(self.hook_env.iter().map(|(key, value)| (key, value)))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::GeneratorError(format!("failed to run {POST_GEN_HOOK}: {e}")))?;

        print!("{}", String::from_utf8_lossy(&output.stdout));
        if !output.status.success() {
            return Err(Error::GeneratorError(format!(
                "{POST_GEN_HOOK} exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }

    fn skipped_paths() -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        builder.add(glob("hooks")?);
        builder.add(glob("hooks/**")?);
        for file in TEMPLATE_CONFIG_FILES {
            builder.add(glob(file)?);
        }
        builder
            .build()
            .map_err(|e| Error::GeneratorError(format!("invalid skip pattern: {e}")))
    }

    fn render_tree(&self, template_dir: &Path, output_dir: &Path, context: &serde_json::Value) -> Result<()> {
        let skipped = Self::skipped_paths()?;

        for entry in WalkDir::new(template_dir).min_depth(1) {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let path = entry.path();
            let relative_path = path
                .strip_prefix(template_dir)
                .map_err(|e| Error::GeneratorError(e.to_string()))?;
            let relative_path = relative_path
                .to_str()
                .ok_or_else(|| Error::GeneratorError(format!("non UTF-8 path: {}", path.display())))?;

            if skipped.is_match(relative_path) {
                debug!("Skipping {relative_path}");
                continue;
            }

            let rendered_path = self.renderer.render(relative_path, context)?;
            let target = output_dir.join(&rendered_path);

            if path.is_dir() {
                fs::create_dir_all(&target)?;
                continue;
            }

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            match fs::read_to_string(path) {
                Ok(content) => {
                    debug!("Writing file: {}", target.display());
                    fs::write(&target, self.renderer.render(&content, context)?)?;
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    debug!("Copying file: {}", target.display());
                    fs::copy(path, &target)?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }
}

impl ProjectGenerator for MiniJinjaGenerator {
    fn generate(&self, template_dir: &Path, output_dir: &Path, answers: &Configuration) -> Result<()> {
        let mut context = serde_json::Map::new();
        context.insert(TEMPLATE_NAMESPACE.to_string(), answers.to_value());
        let context = serde_json::Value::Object(context);
        self.render_tree(template_dir, output_dir, &context)?;

        let project_root: PathBuf = output_dir.join(answers.get_str(PROJECT_SLUG)?);
        if self.run_template_hooks {
            self.run_post_hook(template_dir, &project_root, &context)
        } else {
            Pipeline::new(&project_root, answers).run()?;
            Ok(())
        }
    }
}

fn glob(pattern: &str) -> Result<Glob> {
    Glob::new(pattern).map_err(|e| Error::GeneratorError(format!("invalid skip pattern: {e}")))
}
