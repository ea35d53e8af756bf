//! Sphere primitive.

use lumen_math::{Interval, Ray, Vec3};

use crate::material::Material;
use crate::surface::{HitRecord, Surface};

/// A sphere owning its material.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Surface for Sphere {
    fn hit(&self, ray: &Ray, t_range: Interval, rec: &mut HitRecord) -> bool {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Nearer root first, farther root as fallback
        let mut root = (-b - sqrtd) / a;
        if !t_range.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !t_range.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(root);
        rec.normal = (rec.p - self.center) / self.radius;
        rec.material = self.material;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray() -> Material {
        Material::Diffuse {
            albedo: Vec3::splat(0.5),
        }
    }

    #[test]
    fn test_hit_reports_entry_point() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, gray());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(0.0, 10.0), &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.p - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_miss_when_entry_is_out_of_range() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, gray());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        // Entry at t = 4 lies beyond t_max = 3
        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, Interval::new(0.0, 3.0), &mut rec));
    }

    #[test]
    fn test_miss_when_ray_passes_outside() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, gray());
        let ray = Ray::new(Vec3::new(0.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, Interval::new(0.0, 10.0), &mut rec));
    }

    #[test]
    fn test_hit_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, gray());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(0.001, 10.0), &mut rec));
        assert!((rec.t - 1.0).abs() < 1e-5);

        // Normal stays outward even when hit from inside
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_hit_snapshots_material() {
        let material = Material::reflective(Vec3::new(0.7, 0.6, 0.5), 0.15);
        let sphere = Sphere::new(Vec3::ZERO, 1.0, material);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(0.0, 10.0), &mut rec));
        assert_eq!(rec.material, material);
    }

    #[test]
    fn test_scaled_direction_scales_t() {
        // Unnormalized directions are allowed; t compensates
        let sphere = Sphere::new(Vec3::ZERO, 1.0, gray());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -2.0));

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(0.0, 10.0), &mut rec));
        assert!((rec.t - 2.0).abs() < 1e-5);
        assert!((rec.p - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }
}
