//! Scene description types.
//!
//! A `SceneDesc` is plain data: it says which spheres exist, what they are
//! made of and where the camera looks from. The renderer turns it into
//! intersectable geometry; nothing here knows how to trace a ray.

use orb_math::{Point3, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Surface material of a sphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDesc {
    /// Diffuse surface
    Lambertian { albedo: Vec3 },

    /// Mirror-like surface; fuzz above 1.0 is clamped by the renderer
    Metal {
        albedo: Vec3,
        #[serde(default)]
        fuzz: f64,
    },

    /// Clear refracting surface (glass = 1.5, water = 1.33, diamond = 2.4)
    Dielectric { ior: f64 },
}

impl MaterialDesc {
    fn validate(&self) -> Result<(), String> {
        match self {
            MaterialDesc::Lambertian { albedo } => validate_albedo(*albedo),
            MaterialDesc::Metal { albedo, fuzz } => {
                validate_albedo(*albedo)?;
                if !fuzz.is_finite() || *fuzz < 0.0 {
                    return Err(format!("metal fuzz must be finite and >= 0, got {}", fuzz));
                }
                Ok(())
            }
            MaterialDesc::Dielectric { ior } => {
                if !ior.is_finite() || *ior <= 0.0 {
                    return Err(format!("dielectric ior must be finite and > 0, got {}", ior));
                }
                Ok(())
            }
        }
    }
}

fn validate_albedo(albedo: Vec3) -> Result<(), String> {
    if !albedo.is_finite() || albedo.min_element() < 0.0 {
        return Err(format!("albedo must be finite and non-negative, got {}", albedo));
    }
    Ok(())
}

/// A sphere with its material.
///
/// A negative radius keeps the geometry but flips the normal inward,
/// which is how hollow glass shells are built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Point3,
    pub radius: f64,
    pub material: MaterialDesc,
}

impl SphereDesc {
    pub fn new(center: Point3, radius: f64, material: MaterialDesc) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// Thin-lens camera parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    pub look_from: Point3,
    pub look_at: Point3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f64,
    /// Distance from the lens to the plane of perfect focus
    pub focus_dist: f64,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            look_from: Point3::new(13.0, 2.0, 3.0),
            look_at: Point3::ZERO,
            vup: Vec3::Y,
            vfov: 20.0,
            aperture: 0.1,
            focus_dist: 10.0,
        }
    }
}

impl CameraDesc {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, aperture: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Check that the camera basis can be derived without normalizing a zero vector.
    pub fn validate(&self) -> SceneResult<()> {
        let view = self.look_from - self.look_at;
        if !view.is_finite() || view.length_squared() == 0.0 {
            return Err(SceneError::InvalidCamera(
                "look_from and look_at must be distinct finite points".to_string(),
            ));
        }
        if self.vup.cross(view).length_squared() == 0.0 {
            return Err(SceneError::InvalidCamera(
                "vup must not be parallel to the view direction".to_string(),
            ));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(SceneError::InvalidCamera(format!(
                "vfov must be in (0, 180) degrees, got {}",
                self.vfov
            )));
        }
        if !self.aperture.is_finite() || self.aperture < 0.0 {
            return Err(SceneError::InvalidCamera(format!(
                "aperture must be finite and >= 0, got {}",
                self.aperture
            )));
        }
        if !self.focus_dist.is_finite() || self.focus_dist <= 0.0 {
            return Err(SceneError::InvalidCamera(format!(
                "focus_dist must be finite and > 0, got {}",
                self.focus_dist
            )));
        }
        Ok(())
    }
}

/// A complete scene: a camera and an ordered list of spheres.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    #[serde(default)]
    pub camera: CameraDesc,
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
}

impl SceneDesc {
    pub fn new(camera: CameraDesc) -> Self {
        Self {
            camera,
            spheres: Vec::new(),
        }
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: SphereDesc) {
        self.spheres.push(sphere);
    }

    /// Get the number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Validate every sphere and the camera.
    pub fn validate(&self) -> SceneResult<()> {
        self.camera.validate()?;

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: "center must be finite".to_string(),
                });
            }
            if !sphere.radius.is_finite() || sphere.radius == 0.0 {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: format!("radius must be finite and non-zero, got {}", sphere.radius),
                });
            }
            sphere
                .material
                .validate()
                .map_err(|reason| SceneError::InvalidSphere { index, reason })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glass_shell() -> SceneDesc {
        let mut scene = SceneDesc::new(CameraDesc::default());
        scene.add(SphereDesc::new(
            Point3::new(0.0, 1.0, 0.0),
            1.0,
            MaterialDesc::Dielectric { ior: 1.5 },
        ));
        scene.add(SphereDesc::new(
            Point3::new(0.0, 1.0, 0.0),
            -0.95,
            MaterialDesc::Dielectric { ior: 1.5 },
        ));
        scene
    }

    #[test]
    fn test_negative_radius_is_valid() {
        assert!(glass_shell().validate().is_ok());
    }

    #[test]
    fn test_zero_radius_is_rejected() {
        let mut scene = glass_shell();
        scene.spheres[1].radius = 0.0;

        match scene.validate() {
            Err(SceneError::InvalidSphere { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidSphere, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_ior_is_rejected() {
        let mut scene = glass_shell();
        scene.spheres[0].material = MaterialDesc::Dielectric { ior: 0.0 };
        assert!(scene.validate().is_err());

        scene.spheres[0].material = MaterialDesc::Dielectric { ior: -1.5 };
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_large_fuzz_is_accepted() {
        let mut scene = SceneDesc::default();
        scene.add(SphereDesc::new(
            Point3::ZERO,
            1.0,
            MaterialDesc::Metal {
                albedo: Vec3::splat(0.8),
                fuzz: 3.0,
            },
        ));
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_negative_albedo_is_rejected() {
        let mut scene = SceneDesc::default();
        scene.add(SphereDesc::new(
            Point3::ZERO,
            1.0,
            MaterialDesc::Lambertian {
                albedo: Vec3::new(0.5, -0.1, 0.5),
            },
        ));
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_camera_degenerate_view() {
        let camera = CameraDesc::default().with_position(Point3::ONE, Point3::ONE, Vec3::Y);
        assert!(matches!(camera.validate(), Err(SceneError::InvalidCamera(_))));

        // Looking straight down with +Y up has no defined right vector
        let camera = CameraDesc::default().with_position(Point3::new(0.0, 5.0, 0.0), Point3::ZERO, Vec3::Y);
        assert!(camera.validate().is_err());
    }

    #[test]
    fn test_camera_lens_limits() {
        assert!(CameraDesc::default().with_lens(90.0, 0.0, 1.0).validate().is_ok());
        assert!(CameraDesc::default().with_lens(180.0, 0.0, 1.0).validate().is_err());
        assert!(CameraDesc::default().with_lens(40.0, -0.1, 1.0).validate().is_err());
        assert!(CameraDesc::default().with_lens(40.0, 0.1, 0.0).validate().is_err());
    }
}
