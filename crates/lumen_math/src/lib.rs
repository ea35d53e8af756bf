//! Math foundation for the Lumen path tracer.
//!
//! Re-exports [`glam`] for vector types and adds the ray, interval and
//! geometric optics primitives the tracer builds on. Colors are plain
//! [`Vec3`]s in linear RGB.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod optics;
mod ray;

pub use interval::Interval;
pub use optics::{reflect, refract, schlick};
pub use ray::Ray;
