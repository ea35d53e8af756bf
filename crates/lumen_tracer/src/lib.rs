//! Lumen - progressive CPU path tracing
//!
//! A Monte Carlo path tracer that refines its image over repeated
//! full-canvas passes: each pass traces one randomly-jittered ray per
//! pixel and folds the result into a running per-pixel average, so the
//! image sharpens the longer a session runs.
//!
//! Window management and presentation live outside this crate. Callers
//! hand a canvas size to [`Renderer::new`], drive passes with
//! [`Renderer::render_sample`] at whatever cadence their display allows,
//! and pull resolved linear RGB pixels back out.

mod camera;
mod error;
mod film;
mod integrator;
mod material;
mod renderer;
mod sampler;
mod sphere;
mod surface;

pub use camera::{Camera, CameraConfig};
pub use error::Error;
pub use film::Film;
pub use integrator::{ray_color, RenderConfig};
pub use material::{Material, Scatter};
pub use renderer::Renderer;
pub use sampler::Sampler;
pub use sphere::Sphere;
pub use surface::{HitRecord, Surface, SurfaceList};

/// Re-export common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
