//! Noise sample generation
//!
//! Produces signed 16-bit noise samples one at a time. Two colors are
//! supported: white noise (independent uniform draws across the full
//! amplitude range) and brown noise (a bounded random walk whose increments
//! are small relative to the full range, approximating the -6 dB/octave
//! spectral tilt of brown/red noise).
//!
//! Both step functions are allocation-free and branch-bounded so they are
//! safe to call from the real-time output callback.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;
use thiserror::Error;

use crate::MAX_BROWN_STEP;

/// Noise color, selecting which generation algorithm is used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseColor {
    /// Independent uniform samples over the full 16-bit range
    White,
    /// Bounded random walk: each sample is the previous plus a small delta
    Brown,
}

impl std::fmt::Display for NoiseColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoiseColor::White => write!(f, "white"),
            NoiseColor::Brown => write!(f, "brown"),
        }
    }
}

/// Error returned when a noise color name is not recognized
#[derive(Error, Debug)]
#[error("unknown generator '{0}' (expected 'white' or 'brown')")]
pub struct UnknownNoiseColor(String);

impl FromStr for NoiseColor {
    type Err = UnknownNoiseColor;

    /// Parse a noise color name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("white") {
            Ok(NoiseColor::White)
        } else if s.eq_ignore_ascii_case("brown") {
            Ok(NoiseColor::Brown)
        } else {
            Err(UnknownNoiseColor(s.to_string()))
        }
    }
}

/// Draw the next white noise sample: a uniform value over the full
/// signed 16-bit range. Depends only on the PRNG, never on prior output.
pub fn white_step(rng: &mut impl Rng) -> i16 {
    rng.gen::<i16>()
}

/// Draw the next brown noise sample: the previous sample plus a delta drawn
/// uniformly from `-MAX_BROWN_STEP..=MAX_BROWN_STEP`.
///
/// If the sum would fall outside the representable 16-bit range the delta is
/// redrawn (rejection sampling) - the walk never wraps or saturates, so the
/// algorithm itself can never introduce a discontinuity. Near an amplitude
/// bound roughly half of all draws still land in range, so the retry loop
/// terminates after a handful of iterations in the worst case.
pub fn brown_step(last_sample: i16, rng: &mut impl Rng) -> i16 {
    brown_step_with(last_sample, &mut || {
        rng.gen_range(-MAX_BROWN_STEP..=MAX_BROWN_STEP)
    })
}

/// Brown noise step over an arbitrary delta source. Deltas that would push
/// the walk out of range are discarded and redrawn.
fn brown_step_with(last_sample: i16, draw_delta: &mut impl FnMut() -> i32) -> i16 {
    loop {
        let next = i32::from(last_sample) + draw_delta();
        if let Ok(sample) = i16::try_from(next) {
            return sample;
        }
    }
}

/// Stateful noise generator for a fixed color
///
/// Carries exactly one sample of history (`last_sample`), which the brown
/// walk reads and every step updates, so the signal is continuous across
/// buffer boundaries. The generator is owned by the audio callback for the
/// duration of a session; nothing else reads or writes its state.
///
/// # Example
/// ```
/// use noise_machine::{NoiseColor, NoiseGenerator};
///
/// let mut gen = NoiseGenerator::from_seed(NoiseColor::Brown, 42);
/// let first = gen.next_sample();
/// assert!(i32::from(first).abs() <= 1000); // walk starts at 0
/// ```
#[derive(Debug)]
pub struct NoiseGenerator {
    /// Which noise algorithm to step
    color: NoiseColor,
    /// Most recently emitted amplitude; 0 before the first sample
    last_sample: i16,
    /// PRNG state
    rng: SmallRng,
}

impl NoiseGenerator {
    /// Create a generator for the given color, seeded from system entropy
    pub fn new(color: NoiseColor) -> Self {
        Self::with_rng(color, SmallRng::from_entropy())
    }

    /// Create a generator with a fixed seed, for deterministic sequences
    pub fn from_seed(color: NoiseColor, seed: u64) -> Self {
        Self::with_rng(color, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(color: NoiseColor, rng: SmallRng) -> Self {
        Self {
            color,
            last_sample: 0,
            rng,
        }
    }

    /// Get the generator's noise color
    pub fn color(&self) -> NoiseColor {
        self.color
    }

    /// Get the most recently emitted sample
    pub fn last_sample(&self) -> i16 {
        self.last_sample
    }

    /// Produce the next sample and record it as the new walk position
    pub fn next_sample(&mut self) -> i16 {
        let sample = match self.color {
            NoiseColor::White => white_step(&mut self.rng),
            NoiseColor::Brown => brown_step(self.last_sample, &mut self.rng),
        };
        self.last_sample = sample;
        sample
    }

    /// Fill an interleaved output buffer, duplicating each sample across all
    /// `channels` slots of its frame
    ///
    /// One generator step per frame; state is updated before the next frame,
    /// so consecutive calls continue the same sequence.
    pub fn fill_buffer(&mut self, output: &mut [i16], channels: usize) {
        for frame in output.chunks_mut(channels) {
            let sample = self.next_sample();
            for slot in frame.iter_mut() {
                *slot = sample;
            }
        }
    }
}
