//! The random "cover" scene: a field of small spheres around three large ones.

use orb_math::{Point3, Vec3};
use rand::{Rng, RngCore};

use crate::scene::{CameraDesc, MaterialDesc, SceneDesc, SphereDesc};

/// Build the cover scene, drawing all randomness from `rng`.
pub fn cover_scene(rng: &mut dyn RngCore) -> SceneDesc {
    let mut scene = SceneDesc::new(CameraDesc::default());

    // Ground
    scene.add(SphereDesc::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        MaterialDesc::Lambertian {
            albedo: Vec3::splat(0.5),
        },
    ));

    let keep_clear = Point3::new(4.0, 0.2, 0.0);

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat: f64 = rng.gen();
            let center = Point3::new(
                a as f64 + 0.9 * rng.gen::<f64>(),
                0.2,
                b as f64 + 0.9 * rng.gen::<f64>(),
            );

            if (center - keep_clear).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                // Diffuse
                MaterialDesc::Lambertian {
                    albedo: Vec3::new(
                        rng.gen::<f64>() * rng.gen::<f64>(),
                        rng.gen::<f64>() * rng.gen::<f64>(),
                        rng.gen::<f64>() * rng.gen::<f64>(),
                    ),
                }
            } else if choose_mat < 0.95 {
                // Metal
                MaterialDesc::Metal {
                    albedo: Vec3::new(
                        0.5 * (1.0 + rng.gen::<f64>()),
                        0.5 * (1.0 + rng.gen::<f64>()),
                        0.5 * (1.0 + rng.gen::<f64>()),
                    ),
                    fuzz: 0.5 * rng.gen::<f64>(),
                }
            } else {
                // Glass
                MaterialDesc::Dielectric { ior: 1.5 }
            };

            scene.add(SphereDesc::new(center, 0.2, material));
        }
    }

    scene.add(SphereDesc::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        MaterialDesc::Dielectric { ior: 1.5 },
    ));
    scene.add(SphereDesc::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        MaterialDesc::Lambertian {
            albedo: Vec3::new(0.4, 0.2, 0.1),
        },
    ));
    scene.add(SphereDesc::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        MaterialDesc::Metal {
            albedo: Vec3::new(0.7, 0.6, 0.5),
            fuzz: 0.0,
        },
    ));

    scene
}
