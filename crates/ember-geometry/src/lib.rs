//! CPU-side mesh generation for the ember fire-orb scene.
//!
//! The core is [`Icosphere`]: a perturbed icosahedron subdivided with shared
//! edge midpoints and packed into exact-size index / position / normal
//! buffers. The cube and backdrop quad are fixed geometry.
//!
//! ```rust
//! use ember_common::Point3;
//! use ember_geometry::Icosphere;
//!
//! let sphere = Icosphere::new(Point3::ORIGIN, 1.0, 3u32).unwrap();
//! let mesh = sphere.generate_seeded(42).unwrap();
//! assert_eq!(mesh.triangle_count(), 20 * 4usize.pow(3));
//! ```

pub mod backdrop;
pub mod capacity;
pub mod cube;
pub mod icosahedron;
pub mod icosphere;
pub mod midpoint;
pub mod obj;
pub mod scene;
pub mod subdivide;
pub mod types;
pub mod vector;

pub use backdrop::generate_backdrop;
pub use capacity::CapacityPlan;
pub use cube::{generate_cube, TexturedMesh};
pub use icosphere::{generate_icosphere, Icosphere};
pub use midpoint::{EdgeKey, MidpointCache};
pub use obj::{save_obj, write_obj};
pub use scene::{Scene, SceneSphere, SceneSpec, SphereSpec};
pub use types::{Mesh, MeshVertex, Subdivisions, Triangle, VERTEX_STRIDE};
