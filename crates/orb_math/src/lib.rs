//! Math types for the orb sphere tracer.
//!
//! Everything is double precision: positions, directions and colors all
//! share the same `Vec3` type.

use glam::DVec3;

mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Three-component double-precision vector, used for points, directions and colors.
pub type Vec3 = DVec3;

/// Alias for points in world space.
pub type Point3 = DVec3;
