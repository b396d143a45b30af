mod cli;
mod output;
mod setup;

use std::process::ExitCode;

use ember_common::{ConfigError, Result};
use ember_config::EmberConfig;
use ember_geometry::Scene;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "ember=info";

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    )
}

/// Load config under a temporary subscriber so loader messages are visible
/// before the configured log level is known.
fn load_config(args: &cli::Args) -> std::result::Result<EmberConfig, ConfigError> {
    let directive = args.log_level.as_deref().unwrap_or(DEFAULT_DIRECTIVE);
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .finish();

    tracing::subscriber::with_default(bootstrap, || {
        if let Some(ref path) = args.config {
            tracing::info!("Using config override: {}", path.display());
        }
        ember_config::load_config(args.config.as_deref()).map_err(|e| {
            tracing::error!("Config load failed: {e}");
            e
        })
    })
}

fn run(args: &cli::Args, config: &EmberConfig) -> Result<()> {
    let spec = setup::scene_spec(config, args)?;
    let scene = Scene::build(&spec)?;

    match args.output {
        Some(ref dir) => {
            let written = output::write_scene(&scene, dir)?;
            tracing::info!("Wrote {} meshes (seed {})", written.len(), scene.seed());
        }
        None => {
            for line in output::summary(&scene) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("ember={}", config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directive))
        .init();

    tracing::info!("ember v{} starting...", env!("CARGO_PKG_VERSION"));

    if args.print_config {
        println!("{}", ember_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
