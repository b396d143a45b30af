use std::path::PathBuf;

use clap::Parser;
use ember_common::Point3;

/// ember: procedural icosphere meshes for the fire-orb effect.
#[derive(Parser, Debug)]
#[command(name = "ember", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (a tracing filter directive, e.g. `ember=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Subdivision depth override (0-8, the same range the config file allows).
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub subdivisions: Option<i64>,

    /// Generate a single sphere of this radius instead of the configured scene.
    #[arg(short = 'r', long)]
    pub radius: Option<f32>,

    /// Center of the single sphere, as `x,y,z`.
    #[arg(long, allow_hyphen_values = true)]
    pub center: Option<Point3>,

    /// Fixed random seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write one `<name>.obj` per mesh into this directory.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// True when the command line asks for a single sphere.
    pub fn single_sphere(&self) -> bool {
        self.radius.is_some() || self.center.is_some()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
