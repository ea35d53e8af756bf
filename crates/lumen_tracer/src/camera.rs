//! Camera: maps normalized image-plane coordinates to world-space rays.

use lumen_math::{Ray, Vec3};

use crate::error::Error;
use crate::sampler::Sampler;

/// Parameters a [`Camera`] is derived from.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Canvas width over height
    pub aspect_ratio: f32,
    /// Lens diameter; 0 disables depth of field
    pub aperture: f32,
    /// Distance to the plane of perfect focus
    pub focus_dist: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let look_from = Vec3::new(6.0, 1.5, 3.0);
        let look_at = Vec3::new(2.0, 1.0, 0.0);

        Self {
            look_from,
            look_at,
            vup: Vec3::Y,
            vfov: 70.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.04,
            focus_dist: (look_from - look_at).length(),
        }
    }
}

/// A camera fixed at construction time.
///
/// Holds the orthonormal basis and the focus-plane rectangle rays are
/// aimed at; nothing mutates after [`Camera::new`].
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Build the camera basis and image-plane rectangle.
    ///
    /// Fails when look_from equals look_at, or vup is parallel to the
    /// view direction: the orthonormal basis collapses either way.
    pub fn new(config: &CameraConfig) -> Result<Self, Error> {
        let view = config.look_from - config.look_at;
        if view.length_squared() < 1e-12 {
            return Err(Error::DegenerateCamera);
        }

        let w = view.normalize();
        let cross = config.vup.cross(w);
        if cross.length_squared() < 1e-12 {
            return Err(Error::DegenerateCamera);
        }

        let u = cross.normalize();
        let v = w.cross(u);

        let half_height = (config.vfov.to_radians() / 2.0).tan();
        let half_width = config.aspect_ratio * half_height;
        let origin = config.look_from;
        let focus = config.focus_dist;

        Ok(Self {
            origin,
            lower_left_corner: origin
                - half_width * focus * u
                - half_height * focus * v
                - focus * w,
            horizontal: 2.0 * half_width * focus * u,
            vertical: 2.0 * half_height * focus * v,
            u,
            v,
            lens_radius: config.aperture / 2.0,
        })
    }

    /// Generate the ray through normalized image coordinates (s, t).
    ///
    /// s runs left to right and t bottom to top, both in [0, 1]. The ray
    /// origin is jittered within the lens disk for depth of field.
    pub fn get_ray(&self, s: f32, t: f32, sampler: &mut Sampler) -> Ray {
        let rd = self.lens_radius * sampler.in_unit_disk();
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }
}
