//! Command-line interface implementation for flutter-postgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for flutter-postgen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "flutter-postgen: post-generation setup for the Flutter starter template",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Generated project to set up. Defaults to the hook input's output
    /// directory, or the current directory when answers come from flags
    #[arg(short = 'C', long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Read answers from a JSON or YAML file instead of the hook input on stdin
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set a single answer, overriding the config file. May be repeated
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub defines: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a project from TEMPLATE with fixed answers and check the result
    Verify(VerifyArgs),
}

#[derive(ClapArgs, Debug)]
pub struct VerifyArgs {
    /// Path to the template directory
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// External templating engine to run instead of the built-in renderer.
    /// `{template}` and `{output}` in its arguments are substituted
    #[arg(long, value_name = "PROGRAM")]
    pub engine: Option<String>,

    /// Argument passed to the external engine. May be repeated
    #[arg(long = "engine-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,

    /// Do not run `flutter pub get` on the generated project
    #[arg(long)]
    pub skip_dependencies: bool,

    /// Keep the temporary output directory
    #[arg(long)]
    pub keep: bool,

    /// Run the template's post-generation hook with this binary instead of
    /// the built-in pipeline (built-in engine only)
    #[arg(long, conflicts_with = "engine")]
    pub run_hooks: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing, after printing
///   the help (or clap's own message when the help cannot be written)
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let help = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                if let Err(io_err) = help {
                    eprintln!("{e}\nFailed to print help: {io_err}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
