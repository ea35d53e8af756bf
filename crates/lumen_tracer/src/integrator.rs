//! The recursive path integrator.

use lumen_math::{Interval, Ray, Vec3};

use crate::sampler::Sampler;
use crate::surface::{HitRecord, Surface};

/// Policy constants for the integrator.
///
/// Plain fields so callers and tests can override any of them; the
/// defaults are what the demo scenes render with.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum number of bounces before a path is cut off
    pub max_depth: u32,
    /// Lower ray-parameter bound; keeps bounces from re-hitting their own
    /// surface ("shadow acne")
    pub t_min: f32,
    /// Upper ray-parameter bound, effective infinity
    pub t_max: f32,
    /// Background color when a ray escapes the scene
    pub background: Vec3,
    /// Shade misses with the white-to-sky-blue gradient instead of the
    /// solid background
    pub use_sky_gradient: bool,
    /// Base seed for the per-pixel sample streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 50,
            t_min: 0.001,
            t_max: 5000.1,
            background: Vec3::ZERO,
            use_sky_gradient: true,
            seed: 0,
        }
    }
}

/// Compute the color seen along a ray.
///
/// Follows scattered rays recursively, multiplying attenuations per
/// bounce, until the path escapes to the background, is absorbed, or
/// runs out of bounces.
pub fn ray_color(
    ray: &Ray,
    scene: &dyn Surface,
    depth: u32,
    config: &RenderConfig,
    sampler: &mut Sampler,
) -> Vec3 {
    let mut rec = HitRecord::default();

    if scene.hit(ray, Interval::new(config.t_min, config.t_max), &mut rec) {
        if depth < config.max_depth {
            if let Some(scatter) = rec.material.scatter(ray, &rec, sampler) {
                return scatter.attenuation
                    * ray_color(&scatter.ray, scene, depth + 1, config, sampler);
            }
        }

        // Absorbed, or out of bounces
        Vec3::ZERO
    } else if config.use_sky_gradient {
        sky_gradient(ray)
    } else {
        config.background
    }
}

/// Linear blend from white to sky blue over the ray's vertical angle.
fn sky_gradient(ray: &Ray) -> Vec3 {
    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);

    (1.0 - t) * Vec3::ONE + t * Vec3::new(0.5, 0.7, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::sphere::Sphere;
    use crate::surface::SurfaceList;

    #[test]
    fn test_sky_gradient_blends_with_height() {
        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        let down = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));

        assert!((sky_gradient(&up) - Vec3::new(0.5, 0.7, 1.0)).length() < 1e-5);
        assert!((sky_gradient(&down) - Vec3::ONE).length() < 1e-5);
    }

    #[test]
    fn test_miss_returns_sky_gradient_by_default() {
        let scene = SurfaceList::new();
        let config = RenderConfig::default();
        let mut sampler = Sampler::new(1);

        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let color = ray_color(&ray, &scene, 0, &config, &mut sampler);

        assert!((color - Vec3::new(0.5, 0.7, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_miss_returns_solid_background_when_configured() {
        let scene = SurfaceList::new();
        let config = RenderConfig {
            background: Vec3::new(0.25, 0.5, 0.75),
            use_sky_gradient: false,
            ..RenderConfig::default()
        };
        let mut sampler = Sampler::new(1);

        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let color = ray_color(&ray, &scene, 0, &config, &mut sampler);

        assert_eq!(color, Vec3::new(0.25, 0.5, 0.75));
    }

    #[test]
    fn test_white_diffuse_keeps_all_energy() {
        // A perfectly white diffuse sphere under a solid white background:
        // every path escapes after one bounce carrying full energy.
        let mut scene = SurfaceList::new();
        scene.add(Box::new(Sphere::new(
            Vec3::ZERO,
            1.0,
            Material::Diffuse { albedo: Vec3::ONE },
        )));

        let config = RenderConfig {
            background: Vec3::ONE,
            use_sky_gradient: false,
            ..RenderConfig::default()
        };
        let mut sampler = Sampler::new(5);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let samples = 200;
        let mut total = Vec3::ZERO;
        for _ in 0..samples {
            total += ray_color(&ray, &scene, 0, &config, &mut sampler);
        }
        let mean = total / samples as f32;

        assert!((mean - Vec3::ONE).length() < 0.05);
    }

    #[test]
    fn test_depth_cap_terminates_hall_of_mirrors() {
        // Two large mirrors facing each other; the ray ping-pongs between
        // them forever, so only the bounce cap ends the path.
        let mirror = Material::reflective(Vec3::ONE, 0.0);
        let mut scene = SurfaceList::new();
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 104.0), 100.0, mirror)));
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -104.0), 100.0, mirror)));

        let config = RenderConfig::default();
        let mut sampler = Sampler::new(1);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        let color = ray_color(&ray, &scene, 0, &config, &mut sampler);
        assert_eq!(color, Vec3::ZERO);
    }

    #[test]
    fn test_depth_cap_is_configurable() {
        let mirror = Material::reflective(Vec3::ONE, 0.0);
        let mut scene = SurfaceList::new();
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 104.0), 100.0, mirror)));
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -104.0), 100.0, mirror)));

        let config = RenderConfig {
            max_depth: 3,
            ..RenderConfig::default()
        };
        let mut sampler = Sampler::new(1);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        assert_eq!(ray_color(&ray, &scene, 0, &config, &mut sampler), Vec3::ZERO);
    }
}
