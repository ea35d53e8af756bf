//! Progressive render session: per-sample parallel dispatch over pixels.

use std::time::Instant;

use lumen_math::Vec3;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::Error;
use crate::film::Film;
use crate::integrator::{ray_color, RenderConfig};
use crate::sampler::Sampler;
use crate::surface::Surface;

/// A progressive render session over a fixed canvas.
///
/// Each [`render_sample`](Renderer::render_sample) call traces one
/// jittered ray per pixel and folds the result into the film; the
/// displayed image is the running mean over all completed passes, so it
/// sharpens as the caller keeps invoking passes.
pub struct Renderer {
    config: RenderConfig,
    film: Film,
    sample_index: u32,
}

impl Renderer {
    /// Create a session with a black film and the pass counter at zero.
    pub fn new(width: u32, height: u32, config: RenderConfig) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas { width, height });
        }

        log::info!(
            "render session: {}x{} canvas, max depth {}, seed {}",
            width,
            height,
            config.max_depth,
            config.seed
        );

        Ok(Self {
            config,
            film: Film::new(width, height),
            sample_index: 0,
        })
    }

    /// The film holding the accumulated samples.
    pub fn film(&self) -> &Film {
        &self.film
    }

    /// The session's integrator configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Number of completed full-canvas passes.
    pub fn samples_completed(&self) -> u32 {
        self.sample_index
    }

    /// Resolve the current running mean for one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Vec3 {
        self.film.average(x, y, self.sample_index)
    }

    /// Resolve the whole canvas to 8-bit RGBA.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.film.to_rgba8(self.sample_index)
    }

    /// Run one full-canvas progressive pass.
    ///
    /// The fan-out partitions work by pixel index, one worker per
    /// accumulation slot, so no two workers ever touch the same pixel
    /// within a pass and no locking is needed. Each pixel draws from its
    /// own deterministic sampler stream keyed by (pixel, pass).
    pub fn render_sample(&mut self, scene: &dyn Surface, camera: &Camera) {
        let n = self.sample_index;
        let width = self.film.width();
        let height = self.film.height();
        // A 1-wide or 1-tall canvas still normalizes sanely
        let u_span = width.saturating_sub(1).max(1) as f32;
        let v_span = height.saturating_sub(1).max(1) as f32;
        let config = &self.config;
        let started = Instant::now();

        self.film
            .slots_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, slot)| {
                let x = index as u32 % width;
                let y = index as u32 / width;
                let mut sampler = Sampler::for_pixel(config.seed, index, n);

                // Jittered normalized coordinates; image row 0 is the top
                let u = (x as f32 + sampler.sample()) / u_span;
                let v = ((height - 1 - y) as f32 + sampler.sample()) / v_span;

                let ray = camera.get_ray(u, v, &mut sampler);
                *slot += ray_color(&ray, scene, 0, config, &mut sampler);
            });

        self.sample_index = n + 1;
        log::debug!(
            "sample {} accumulated in {:?}",
            self.sample_index,
            started.elapsed()
        );
    }
}
