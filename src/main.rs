//! Boiling's main application entry point and orchestration logic.
//! Handles command-line argument parsing and drives the configuration
//! pipeline (lex, build, validate) into the scaffolder.

use std::path::{Path, PathBuf};

use boiling::{
    cli::{get_args, Args, Command},
    config,
    error::{default_error_handler, Error, Result},
    lexer,
    logger::init_logger,
    scaffolder::Scaffolder,
    store::{self, ConfigSet, Domain},
    validator,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::New { name, lang } => new_project(name, lang),
        Command::Config { verify, where_ } => inspect_config(verify > 0, where_ > 0),
    }
}

/// Loads, lexes, builds and validates the configuration in one pass.
///
/// Returns the configuration file path alongside the populated stores; the
/// scaffolder uses the path's directory to find the bundled license
/// template.
fn load_configs() -> Result<(PathBuf, ConfigSet)> {
    let (path, text) = config::read_config()?;
    let tokens = lexer::lex(&text)?;
    let configs = store::build_configs(tokens)?;
    validator::validate(&configs)?;
    Ok((path, configs))
}

/// Handles `boiling new`: validates the configuration, then scaffolds the
/// project in the current directory.
fn new_project(name: Option<String>, lang: String) -> Result<()> {
    let language = Domain::from_cli_name(&lang).ok_or_else(|| {
        Error::SemanticError(format!("`{}` is not a supported language", lang))
    })?;

    let (config_path, configs) = load_configs()?;
    let project_dir = std::env::current_dir()?;
    let template_dir = config_path.parent().map(Path::to_path_buf);

    Scaffolder::new(configs, language, project_dir, template_dir, name).run()
}

/// Handles `boiling config`: the `--verify` and `--where` inspection flags.
/// Each flag executes at most once regardless of how often it is repeated.
fn inspect_config(verify: bool, where_: bool) -> Result<()> {
    if verify {
        load_configs()?;
        println!("Config contains no errors.");
    }

    if where_ {
        let path = config::config_path()
            .ok_or_else(|| Error::NotFoundError(config::NO_CONFIG_REPORT.to_string()))?;
        println!("Config path: {}", path.display());
    }

    Ok(())
}
