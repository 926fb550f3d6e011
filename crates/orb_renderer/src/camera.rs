//! Thin-lens camera for ray generation.

use crate::sampling::random_in_unit_disk;
use orb_core::CameraDesc;
use orb_math::{Point3, Ray, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// All fields are derived once from a `CameraDesc` and never change during a render.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Derive the camera basis for an image with the given aspect ratio (width / height).
    ///
    /// `desc` must pass `CameraDesc::validate`, otherwise the basis
    /// vectors come from normalizing a zero vector.
    pub fn new(desc: &CameraDesc, aspect: f64) -> Self {
        let theta = desc.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        // Calculate camera basis vectors
        let w = (desc.look_from - desc.look_at).normalize();
        let u = desc.vup.cross(w).normalize();
        let v = w.cross(u);

        let focus_dist = desc.focus_dist;
        let origin = desc.look_from;
        let lower_left_corner = origin
            - half_width * focus_dist * u
            - half_height * focus_dist * v
            - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
            u,
            v,
            w,
            lens_radius: desc.aperture / 2.0,
        }
    }

    /// Generate a ray through normalized image-plane coordinates `(s, t)`,
    /// with `(0, 0)` at the lower-left corner.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        // Sampled even for a pinhole so every primary ray consumes the same draws
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        let focal_point = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(self.origin + offset, focal_point - self.origin - offset)
    }

    /// Get the lens center.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Get the orthonormal basis (u, v, w); w points away from the scene.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    pub fn lens_radius(&self) -> f64 {
        self.lens_radius
    }
}
