pub mod errors;
pub mod types;

pub use errors::{CapacityKind, ConfigError, EmberError, MeshError};
pub use types::Point3;

pub type Result<T> = std::result::Result<T, EmberError>;
