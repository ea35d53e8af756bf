//! Surface capability and the closest-hit scene query.

use lumen_math::{Interval, Ray, Vec3};

use crate::material::Material;

/// Record of a ray-surface intersection.
///
/// Transient and stack-scoped: intersection tests write it only on a
/// hit, so a failed query never leaves partial state behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitRecord {
    /// Ray parameter where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Outward unit normal at the intersection.
    ///
    /// Always points away from the surface; materials that need to tell
    /// entering from exiting read the sign of dot(direction, normal).
    pub normal: Vec3,
    /// Snapshot of the surface's material at intersection time
    pub material: Material,
}

/// Trait for anything a ray can intersect.
pub trait Surface: Send + Sync {
    /// Test the ray against this surface within `t_range`.
    ///
    /// On a hit strictly inside the range, fills `rec` and returns true.
    /// On a miss, `rec` is left untouched.
    fn hit(&self, ray: &Ray, t_range: Interval, rec: &mut HitRecord) -> bool;
}

/// An ordered collection of owned surfaces.
pub struct SurfaceList {
    surfaces: Vec<Box<dyn Surface>>,
}

impl SurfaceList {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }

    /// Add a surface to the scene.
    pub fn add(&mut self, surface: Box<dyn Surface>) {
        self.surfaces.push(surface);
    }

    /// Remove all surfaces.
    pub fn clear(&mut self) {
        self.surfaces.clear();
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl Default for SurfaceList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for SurfaceList {
    /// Closest-hit query: linear scan shrinking the interval's max.
    ///
    /// Ties at exactly equal t go to the earliest-inserted surface, since
    /// later candidates no longer pass the strict t < max check.
    fn hit(&self, ray: &Ray, t_range: Interval, rec: &mut HitRecord) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = t_range.max;

        for surface in &self.surfaces {
            if surface.hit(ray, Interval::new(t_range.min, closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}
