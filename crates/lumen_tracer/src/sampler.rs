//! Seedable uniform sampling for pixel jitter, lens jitter and material
//! scattering.
//!
//! Samplers are explicit handles passed down the trace: each worker owns
//! its own state, there is no global or thread-local generator, and tests
//! inject fixed seeds to reproduce any pixel's sequence.

use lumen_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound of the default sampling interval. Keeps jittered image
/// coordinates strictly below 1.0.
const DEFAULT_MAX: f32 = 0.999_999;

/// A uniform sampler over a half-open interval, default [0, 0.999999).
pub struct Sampler {
    rng: StdRng,
    min: f32,
    max: f32,
}

impl Sampler {
    /// Create a sampler over the default interval.
    pub fn new(seed: u64) -> Self {
        Self::with_interval(seed, 0.0, DEFAULT_MAX)
    }

    /// Create a sampler drawing from [min, max).
    pub fn with_interval(seed: u64, min: f32, max: f32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min,
            max,
        }
    }

    /// Derive the sampler for one pixel within one progressive pass.
    ///
    /// The pixel and pass indices are hash-mixed into the base seed, so
    /// every (pixel, pass) pair draws from an independent stream no
    /// matter which worker runs it or in what order.
    pub fn for_pixel(seed: u64, pixel_index: usize, sample_index: u32) -> Self {
        let stream = (pixel_index as u64) ^ ((sample_index as u64) << 40);
        Self::new(mix(seed ^ stream))
    }

    /// Draw a uniform value from the sampler's interval.
    #[inline]
    pub fn sample(&mut self) -> f32 {
        self.rng.gen_range(self.min..self.max)
    }

    /// Draw a uniform value from [min, max), ignoring the sampler's own
    /// interval.
    #[inline]
    pub fn sample_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Rejection-sample a point strictly inside the unit sphere.
    ///
    /// Expected ~2 iterations per call; terminates almost surely.
    pub fn in_unit_sphere(&mut self) -> Vec3 {
        loop {
            let p = 2.0 * Vec3::new(self.sample(), self.sample(), self.sample()) - Vec3::ONE;
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// Rejection-sample a point strictly inside the unit disk at z = 0.
    pub fn in_unit_disk(&mut self) -> Vec3 {
        loop {
            let p = 2.0 * Vec3::new(self.sample(), self.sample(), 0.0) - Vec3::new(1.0, 1.0, 0.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }
}

/// splitmix64 finalizer; decorrelates consecutive stream ids.
fn mix(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    state = (state ^ (state >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    state = (state ^ (state >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    state ^ (state >> 31)
}
