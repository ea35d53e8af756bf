//! Material model: a closed set of scattering behaviors.

use lumen_math::{reflect, refract, schlick, Ray, Vec3};

use crate::sampler::Sampler;
use crate::surface::HitRecord;

/// A scattered ray and the color attenuation it carries.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    pub attenuation: Vec3,
    pub ray: Ray,
}

/// How a surface responds to an incoming ray.
///
/// A closed set dispatched by match, so the hit path stays
/// branch-predictable and hit records can snapshot materials by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Matte surface scattering uniformly around the normal.
    Diffuse { albedo: Vec3 },
    /// Mirror with a roughness perturbation.
    Reflective { albedo: Vec3, fuzz: f32 },
    /// Clear dielectric; picks reflection vs refraction by Fresnel.
    Refractive { refraction_index: f32 },
}

impl Default for Material {
    /// A black diffuse surface: scatters, but contributes nothing.
    fn default() -> Self {
        Material::Diffuse { albedo: Vec3::ZERO }
    }
}

impl Material {
    /// Reflective material with fuzz clamped to [0, 1].
    pub fn reflective(albedo: Vec3, fuzz: f32) -> Self {
        Material::Reflective {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Scatter an incoming ray at a hit point.
    ///
    /// Returns `None` when the ray is absorbed; the path then terminates
    /// and contributes black.
    pub fn scatter(&self, ray: &Ray, rec: &HitRecord, sampler: &mut Sampler) -> Option<Scatter> {
        match *self {
            Material::Diffuse { albedo } => {
                let target = rec.p + rec.normal + sampler.in_unit_sphere();
                Some(Scatter {
                    attenuation: albedo,
                    ray: Ray::new(rec.p, target - rec.p),
                })
            }

            Material::Reflective { albedo, fuzz } => {
                let reflected = reflect(ray.direction.normalize(), rec.normal);
                let direction = reflected + fuzz * sampler.in_unit_sphere();

                // Absorb rays that would leave below the surface
                if direction.dot(rec.normal) > 0.0 {
                    Some(Scatter {
                        attenuation: albedo,
                        ray: Ray::new(rec.p, direction),
                    })
                } else {
                    None
                }
            }

            Material::Refractive { refraction_index } => {
                let dir_dot_n = ray.direction.dot(rec.normal);

                // The hit normal always points outward; the sign of the
                // incoming direction against it tells entering from exiting.
                let (outward_normal, ratio, cosine) = if dir_dot_n > 0.0 {
                    (
                        -rec.normal,
                        refraction_index,
                        refraction_index * dir_dot_n / ray.direction.length(),
                    )
                } else {
                    (
                        rec.normal,
                        1.0 / refraction_index,
                        -dir_dot_n / ray.direction.length(),
                    )
                };

                let reflected = reflect(ray.direction, rec.normal);
                let direction = match refract(ray.direction, outward_normal, ratio) {
                    Some(refracted) => {
                        let reflect_probability = schlick(cosine, refraction_index);
                        if sampler.sample() < reflect_probability {
                            reflected
                        } else {
                            refracted
                        }
                    }
                    // Total internal reflection
                    None => reflected,
                };

                Some(Scatter {
                    attenuation: Vec3::ONE,
                    ray: Ray::new(rec.p, direction),
                })
            }
        }
    }
}
