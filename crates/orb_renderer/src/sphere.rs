//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use orb_math::{Interval, Point3, Ray};

/// A sphere primitive.
///
/// A negative radius leaves the surface where it is but makes the normal
/// point inward, which is used to model hollow glass.
pub struct Sphere<M: Material> {
    center: Point3,
    radius: f64,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere. `radius` must be non-zero.
    pub fn new(center: Point3, radius: f64, material: M) -> Self {
        debug_assert!(radius != 0.0, "sphere radius must be non-zero");
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn material(&self) -> &M {
        &self.material
    }
}

impl<M: Material> Hittable for Sphere<M> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // Half-b form of |origin + t*dir - center|^2 = r^2
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Dielectric, Lambertian};
    use orb_math::Vec3;

    fn grey() -> Lambertian {
        Lambertian::new(Vec3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, Interval::new(0.001, f64::INFINITY)).unwrap();

        assert!((rec.t - 0.5).abs() < 1e-12); // Should hit at t=0.5
        assert!((rec.normal - Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_tangent_ray_is_a_miss() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey());

        // Grazes the sphere at exactly one point: zero discriminant
        let ray = Ray::new(Vec3::new(-5.0, 1.0, 0.0), Vec3::X);
        assert!(sphere.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_hit_point_lies_on_surface_from_any_direction() {
        let radius = 2.0;
        let sphere = Sphere::new(Vec3::ZERO, radius, grey());
        let interval = Interval::new(0.001, f64::INFINITY);

        let origins = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, -7.0, 0.0),
            Vec3::new(3.0, 4.0, 5.0),
            Vec3::new(-6.0, 2.0, -1.5),
            Vec3::new(0.1, 0.2, 9.0),
        ];

        for origin in origins {
            // Aim slightly off-center, still well inside the silhouette
            let target = Vec3::new(0.3, -0.2, 0.1);
            let ray = Ray::new(origin, (target - origin) * 0.37);

            let rec = sphere.hit(&ray, interval).unwrap();
            let p = ray.at(rec.t);

            assert!((p.length() - radius).abs() < 1e-9, "|p| = {}", p.length());
            assert!((rec.normal.length() - 1.0).abs() < 1e-9);
            // Normal parallel to the hit point and facing outward
            assert!(rec.normal.cross(p).length() < 1e-9);
            assert!(rec.normal.dot(p) > 0.0);
            // The entry point is the nearer root
            assert!(rec.normal.dot(ray.direction()) < 0.0);
        }
    }

    #[test]
    fn test_far_root_when_inside() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey());

        // From the center the near root is negative, so the far one is used
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let rec = sphere.hit(&ray, Interval::new(0.001, f64::INFINITY)).unwrap();
        assert_eq!(rec.t, 1.0);
        assert_eq!(rec.p, Vec3::X);
    }

    #[test]
    fn test_interval_bounds_are_exclusive() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Near root at 0.5 excluded, far root at 1.5 still allowed
        let rec = sphere.hit(&ray, Interval::new(0.5, f64::INFINITY)).unwrap();
        assert_eq!(rec.t, 1.5);

        assert!(sphere.hit(&ray, Interval::new(0.5, 1.5)).is_none());
    }

    #[test]
    fn test_negative_radius_flips_normal() {
        let outer = Sphere::new(Vec3::ZERO, 1.0, Dielectric::new(1.5));
        let inner = Sphere::new(Vec3::ZERO, -0.9, Dielectric::new(1.5));
        let interval = Interval::new(0.001, f64::INFINITY);

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let outer_hit = outer.hit(&ray, interval).unwrap();
        let inner_hit = inner.hit(&ray, interval).unwrap();

        // Same side of both shells, geometry unchanged by the sign
        assert!((outer_hit.t - 4.0).abs() < 1e-12);
        assert!((inner_hit.t - 4.1).abs() < 1e-12);

        assert!((outer_hit.normal - Vec3::Z).length() < 1e-12);
        assert!((inner_hit.normal + Vec3::Z).length() < 1e-12);
        assert!((outer_hit.normal + inner_hit.normal).length() < 1e-12);
    }
}
