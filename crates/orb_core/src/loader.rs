//! JSON scene files.
//!
//! ```json
//! {
//!   "camera": { "look_from": [13, 2, 3], "look_at": [0, 0, 0], "vfov": 20 },
//!   "spheres": [
//!     { "center": [0, -1000, 0], "radius": 1000,
//!       "material": { "type": "lambertian", "albedo": [0.5, 0.5, 0.5] } }
//!   ]
//! }
//! ```
//!
//! Missing camera fields fall back to `CameraDesc::default()`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::scene::{SceneDesc, SceneResult};

/// Load and validate a scene from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<SceneDesc> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let scene: SceneDesc = serde_json::from_reader(reader)?;
    scene.validate()?;

    log::info!(
        "Loaded {} spheres from {}",
        scene.sphere_count(),
        path.display()
    );
    Ok(scene)
}

/// Load and validate a scene from a JSON string.
pub fn load_scene_from_str(source: &str) -> SceneResult<SceneDesc> {
    let scene: SceneDesc = serde_json::from_str(source)?;
    scene.validate()?;
    Ok(scene)
}

/// Write a scene as pretty-printed JSON.
pub fn save_scene(scene: &SceneDesc, path: impl AsRef<Path>) -> SceneResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, scene)?;
    writeln!(writer)?;
    writer.flush()?;

    log::info!("Wrote {} spheres to {}", scene.sphere_count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MaterialDesc, SceneError};
    use orb_math::Vec3;

    const TWO_SPHERES: &str = r#"{
        "camera": { "look_from": [0, 0, 0], "look_at": [0, 0, -1], "vfov": 90, "aperture": 0 },
        "spheres": [
            { "center": [0, 0, -1], "radius": 0.5,
              "material": { "type": "metal", "albedo": [0.8, 0.6, 0.2] } },
            { "center": [0, 0, -1], "radius": -0.45,
              "material": { "type": "dielectric", "ior": 1.5 } }
        ]
    }"#;

    #[test]
    fn test_load_from_str() {
        let scene = load_scene_from_str(TWO_SPHERES).unwrap();

        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.camera.vfov, 90.0);
        assert_eq!(scene.camera.aperture, 0.0);
        // Unspecified fields come from the default camera
        assert_eq!(scene.camera.focus_dist, 10.0);
        assert_eq!(scene.camera.vup, Vec3::Y);

        assert_eq!(
            scene.spheres[0].material,
            MaterialDesc::Metal {
                albedo: Vec3::new(0.8, 0.6, 0.2),
                fuzz: 0.0,
            }
        );
        assert_eq!(scene.spheres[1].radius, -0.45);
    }

    #[test]
    fn test_unknown_material_is_parse_error() {
        let source = r#"{ "spheres": [ { "center": [0, 0, 0], "radius": 1,
            "material": { "type": "plastic" } } ] }"#;
        assert!(matches!(load_scene_from_str(source), Err(SceneError::Json(_))));
    }

    #[test]
    fn test_invalid_scene_is_rejected_on_load() {
        let source = r#"{ "spheres": [ { "center": [0, 0, 0], "radius": 1,
            "material": { "type": "dielectric", "ior": 0 } } ] }"#;
        assert!(matches!(
            load_scene_from_str(source),
            Err(SceneError::InvalidSphere { index: 0, .. })
        ));
    }

    #[test]
    fn test_save_then_load_file() {
        let scene = load_scene_from_str(TWO_SPHERES).unwrap();
        let path = std::env::temp_dir().join(format!("orb_scene_{}.json", std::process::id()));

        save_scene(&scene, &path).unwrap();
        let loaded = load_scene(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_missing_file() {
        let result = load_scene("/nonexistent/orb/scene.json");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }
}
