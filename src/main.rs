//! flutter-postgen entry point.
//! Resolves where the answers and the project come from, then runs either
//! the post-generation pipeline or the verification harness.

use std::path::PathBuf;

use flutter_postgen::{
    cli::{get_args, Args, Commands, VerifyArgs},
    config::Configuration,
    error::{default_error_handler, Result},
    hooks::read_hook_input,
    logger::init_logger,
    pipeline::Pipeline,
    verify::{CommandGenerator, MiniJinjaGenerator, ProjectGenerator, Verifier},
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Verify(verify_args)) => run_verify(verify_args),
        None => run_pipeline(args.project_dir, args.config, args.defines),
    }
}

/// Answers from `--config`/`--define` take precedence over the hook input;
/// stdin is only read when neither is given.
fn run_pipeline(
    project_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    defines: Vec<String>,
) -> Result<()> {
    let (config, default_root) = if config_file.is_none() && defines.is_empty() {
        let hook_input = read_hook_input()?;
        (hook_input.configuration(), hook_input.project_root())
    } else {
        (Configuration::from_sources(config_file, &defines)?, std::env::current_dir()?)
    };

    let project_root = project_dir.unwrap_or(default_root);
    log::debug!("Project root: {}", project_root.display());

    Pipeline::new(&project_root, &config).run()?;
    Ok(())
}

fn run_verify(args: VerifyArgs) -> Result<()> {
    let generator: Box<dyn ProjectGenerator> = match args.engine {
        Some(program) => Box::new(CommandGenerator::new(program, args.engine_args)),
        None if args.run_hooks => Box::new(
            MiniJinjaGenerator::new()
                .run_template_hooks(true)
                .hook_env("FLUTTER_POSTGEN", std::env::current_exe()?.display().to_string()),
        ),
        None => Box::new(MiniJinjaGenerator::new()),
    };

    let report = Verifier::new(&*generator)
        .resolve_dependencies(!args.skip_dependencies)
        .verify_in_temp_dir(&args.template, args.keep)?;

    log::debug!("Verified project at {}", report.project_dir.display());
    println!("\n🎉 All tests passed!");
    println!("✅ Template is ready for use");
    Ok(())
}
