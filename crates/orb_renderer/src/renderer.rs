//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a fixed bounce limit
//! - Sky gradient background
//! - Anti-aliasing via multi-sampling
//! - Gamma correction

use std::time::Instant;

use crate::sampling::gen_f64;
use crate::{Camera, Color, Hittable};
use orb_math::{Interval, Ray};
use rand::RngCore;

/// Number of bounces after which a path is treated as absorbed.
pub const MAX_DEPTH: u32 = 50;

/// Lower bound on hit distance; keeps a ray from hitting the surface it just left.
pub const T_MIN: f64 = 0.001;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            samples_per_pixel: 100,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set samples per pixel.
    pub fn with_samples(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self
    }

    /// Image aspect ratio (width / height).
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Compute the color seen by a ray.
///
/// `depth` is the number of bounces already taken; callers start at 0.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f64::INFINITY)) else {
        return sky_gradient(ray);
    };

    if depth >= MAX_DEPTH {
        return Color::ZERO;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth + 1, rng),
        None => Color::ZERO,
    }
}

/// Background seen by rays that escape the scene: white at the horizon
/// fading to sky blue overhead.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Convert a linear color to 8-bit RGB.
///
/// Channels are clamped to [0, 1] first since averaged samples can stray
/// slightly outside, then gamma-2 encoded.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let unit = Interval::new(0.0, 1.0);
    let encode = |c: f64| (255.99 * unit.clamp(c).sqrt()) as u8;
    [encode(color.x), encode(color.y), encode(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` counts from the lower-left corner of the image plane.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    debug_assert!(config.samples_per_pixel > 0, "need at least one sample per pixel");
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (i as f64 + gen_f64(rng)) / config.width as f64;
        let t = (j as f64 + gen_f64(rng)) / config.height as f64;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, world, 0, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Simple image buffer for storing render output.
///
/// Pixels are stored row-major with row 0 at the top.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to gamma-encoded RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer, one scanline at a time.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let start = Instant::now();
    log::info!(
        "Rendering {}x{} @ {} spp",
        config.width,
        config.height,
        config.samples_per_pixel
    );

    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        // Top row of the image is the top of the image plane
        let j = config.height - 1 - y;
        log::debug!("Scanlines remaining: {}", config.height - y);

        for x in 0..config.width {
            let color = render_pixel(camera, world, x, j, config, rng);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
