//! Turns a scene description into intersectable geometry.

use crate::{Dielectric, HittableList, Lambertian, Metal, Sphere};
use orb_core::{MaterialDesc, SceneDesc};

/// Build one sphere per description, in scene order.
pub fn build_world(scene: &SceneDesc) -> HittableList {
    let mut world = HittableList::new();

    for sphere in &scene.spheres {
        let (center, radius) = (sphere.center, sphere.radius);
        match &sphere.material {
            MaterialDesc::Lambertian { albedo } => {
                world.add(Box::new(Sphere::new(center, radius, Lambertian::new(*albedo))));
            }
            MaterialDesc::Metal { albedo, fuzz } => {
                world.add(Box::new(Sphere::new(center, radius, Metal::new(*albedo, *fuzz))));
            }
            MaterialDesc::Dielectric { ior } => {
                world.add(Box::new(Sphere::new(center, radius, Dielectric::new(*ior))));
            }
        }
    }

    log::info!("Built world with {} spheres", world.len());
    world
}
