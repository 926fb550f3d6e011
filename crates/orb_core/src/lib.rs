//! orb Core - Renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Scene types**: `SceneDesc`, `SphereDesc`, `MaterialDesc`, `CameraDesc`
//! - **JSON support**: loading and saving scene files
//! - **Procedural scenes**: the random "cover" scene of small spheres
//!
//! # Example
//!
//! ```ignore
//! use orb_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres", scene.sphere_count());
//! ```

pub mod cover;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use cover::cover_scene;
pub use loader::{load_scene, load_scene_from_str, save_scene};
pub use scene::{CameraDesc, MaterialDesc, SceneDesc, SceneError, SceneResult, SphereDesc};
