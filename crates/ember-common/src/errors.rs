use std::fmt;
use std::path::PathBuf;

/// Which planned buffer a capacity check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
    Triangles,
    Vertices,
}

impl fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityKind::Triangles => write!(f, "triangle"),
            CapacityKind::Vertices => write!(f, "vertex"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("subdivision depth must be non-negative, got {0}")]
    NegativeSubdivisions(i64),

    #[error("radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),

    #[error("buffer capacity for {subdivisions} subdivisions does not fit in 32-bit indices")]
    CapacityOverflow { subdivisions: u32 },

    #[error("{kind} capacity of {capacity} exceeded during generation")]
    CapacityExceeded { kind: CapacityKind, capacity: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no platform config directory available")]
    NoConfigDir,

    #[error("failed to write config {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum EmberError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
