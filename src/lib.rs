//! Noise Machine - white and brown noise generator
//!
//! This library provides the sample generators and the audio engine used by
//! the `noise-machine` binary. Samples are produced one at a time as signed
//! 16-bit values and streamed to the default output device at 44.1kHz,
//! duplicated across both stereo channels.

pub mod audio;

pub use audio::engine::AudioEngine;
pub use audio::signal::{NoiseColor, NoiseGenerator};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed output sample rate in Hz
pub const SAMPLE_RATE: u32 = 44_100;

/// Fixed output channel count (mono noise duplicated to stereo)
pub const CHANNELS: u16 = 2;

/// Largest per-sample step the brown noise walk may take, in amplitude units
pub const MAX_BROWN_STEP: i32 = 1000;
