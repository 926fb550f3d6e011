//! orb Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for scenes made of spheres. Every pixel casts
//! many jittered rays through a thin-lens camera; each ray bounces off
//! diffuse, metal and glass surfaces until it escapes to the sky, is
//! absorbed, or reaches the fixed bounce limit.

mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod sampling;
mod sphere;
mod world;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{save_image, write_ppm, OutputError, OutputResult};
pub use renderer::{
    color_to_rgb, ray_color, render, render_pixel, sky_gradient, ImageBuffer, RenderConfig,
    MAX_DEPTH, T_MIN,
};
pub use sampling::{gen_f64, random_in_unit_disk, random_in_unit_sphere};
pub use sphere::Sphere;
pub use world::build_world;

/// Re-export Vec3 and common math types from orb_math
pub use orb_math::{Interval, Point3, Ray, Vec3};
