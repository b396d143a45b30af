//! Writing or summarizing a generated scene.

use std::path::{Path, PathBuf};

use ember_geometry::{save_obj, Scene};
use tracing::info;

/// Write every mesh of `scene` as `<dir>/<name>.obj`, creating `dir` if needed.
pub fn write_scene(scene: &Scene, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for (name, mesh) in scene.meshes() {
        let path = save_obj(dir, name, mesh)?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// One line per mesh: name, triangle count, vertex count.
pub fn summary(scene: &Scene) -> Vec<String> {
    scene
        .meshes()
        .map(|(name, mesh)| {
            format!(
                "{name}: {} triangles, {} vertices",
                mesh.triangle_count(),
                mesh.vertex_count()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_common::Point3;
    use ember_geometry::{SceneSpec, SphereSpec, Subdivisions};

    fn small_scene() -> Scene {
        Scene::build(&SceneSpec {
            subdivisions: Subdivisions::new(1),
            seed: Some(4),
            spheres: vec![SphereSpec {
                name: "orb".into(),
                center: Point3::ORIGIN,
                radius: 1.0,
            }],
            cube_half_extent: None,
            backdrop: true,
        })
        .unwrap()
    }

    #[test]
    fn summary_lines() {
        let lines = summary(&small_scene());
        assert_eq!(
            lines,
            vec![
                "backdrop: 2 triangles, 4 vertices".to_string(),
                "orb: 80 triangles, 42 vertices".to_string(),
            ]
        );
    }

    #[test]
    fn writes_one_file_per_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("meshes");
        let written = write_scene(&small_scene(), &out).unwrap();
        assert_eq!(written, vec![out.join("backdrop.obj"), out.join("orb.obj")]);
        let orb = std::fs::read_to_string(out.join("orb.obj")).unwrap();
        assert_eq!(orb.lines().filter(|l| l.starts_with("f ")).count(), 80);
    }
}
