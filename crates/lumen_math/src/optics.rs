//! Geometric optics: reflection, refraction and the Schlick approximation.

use crate::Vec3;

/// Reflect `v` about the unit normal `n`.
///
/// `v - 2*dot(v,n)*n`. `n` must be unit length; `v` may have any length
/// and the result keeps it.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with unit normal `n`.
///
/// `ratio` is the ratio of refraction indices (incident over transmitted)
/// and `n` must be the unit normal on the incident side. Returns `None`
/// when the discriminant `1 - ratio^2 * (1 - cos^2)` is non-positive,
/// i.e. total internal reflection. `v` must be non-zero (it is
/// normalized internally).
#[inline]
pub fn refract(v: Vec3, n: Vec3, ratio: f32) -> Option<Vec3> {
    let unit = v.normalize();
    let cos = unit.dot(n);
    let discriminant = 1.0 - ratio * ratio * (1.0 - cos * cos);

    if discriminant > 0.0 {
        Some(ratio * (unit - n * cos) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's polynomial approximation of Fresnel reflectance.
///
/// `r0 = ((1-n)/(1+n))^2; r0 + (1-r0)*(1-cosine)^5`
#[inline]
pub fn schlick(cosine: f32, refraction_index: f32) -> f32 {
    let mut r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    r0 *= r0;

    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
