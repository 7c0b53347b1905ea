//! Audio engine for output stream management
//!
//! Opens the default output device at the fixed 44.1kHz / 16-bit / stereo
//! format and drives a [`NoiseGenerator`] from the backend's real-time
//! callback. The generator is moved into the callback closure, so the hot
//! path takes no locks, allocates nothing, and does bounded per-frame work.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleRate, Stream, StreamConfig};
use thiserror::Error;

use crate::audio::signal::NoiseGenerator;
use crate::{CHANNELS, SAMPLE_RATE};

/// Errors that can occur during audio engine setup
#[derive(Error, Debug)]
pub enum AudioEngineError {
    #[error("no default output device available")]
    NoOutputDevice,

    #[error("failed to open output stream: {0}")]
    StreamError(String),
}

/// Audio engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Engine is stopped
    Stopped,
    /// Engine is running and streaming noise
    Running,
}

/// Audio engine owning the output stream for one playback session
///
/// All fallible work happens in [`start`](AudioEngine::start); once the
/// stream is playing, the callback has no failure modes. Dropping the engine
/// stops the stream.
pub struct AudioEngine {
    state: EngineState,
    stream: Option<Stream>,
}

impl AudioEngine {
    /// Create a new, stopped audio engine
    pub fn new() -> Self {
        Self {
            state: EngineState::Stopped,
            stream: None,
        }
    }

    /// Get current engine state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Open the default output stream and start streaming noise
    ///
    /// Takes ownership of the generator and moves it into the output
    /// callback. Each callback invocation steps the generator once per
    /// requested frame and duplicates the sample across both channels;
    /// generator state carries across invocations, so the brown walk is
    /// continuous over buffer boundaries.
    pub fn start(&mut self, mut generator: NoiseGenerator) -> Result<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioEngineError::NoOutputDevice)?;
        let device_name = device.name().unwrap_or_else(|_| "unknown".to_string());

        let config = StreamConfig {
            channels: CHANNELS,
            sample_rate: SampleRate(SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Default,
        };

        let color = generator.color();
        let channels = CHANNELS as usize;
        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [i16], _: &cpal::OutputCallbackInfo| {
                    generator.fill_buffer(data, channels);
                },
                |err| {
                    tracing::error!("Output stream error: {}", err);
                },
                None,
            )
            .map_err(|e| AudioEngineError::StreamError(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioEngineError::StreamError(e.to_string()))?;

        self.stream = Some(stream);
        self.state = EngineState::Running;

        tracing::info!(
            "Audio engine started: {} noise on '{}' @ {}Hz",
            color,
            device_name,
            SAMPLE_RATE
        );

        Ok(())
    }

    /// Stop streaming and release the output stream
    pub fn stop(&mut self) {
        if self.stream.take().is_some() {
            self.state = EngineState::Stopped;
            tracing::info!("Audio engine stopped");
        }
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AudioEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = AudioEngine::new();
        assert_eq!(engine.state(), EngineState::Stopped);
    }

    #[test]
    fn test_engine_default() {
        let engine = AudioEngine::default();
        assert_eq!(engine.state(), EngineState::Stopped);
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let mut engine = AudioEngine::new();
        engine.stop();
        assert_eq!(engine.state(), EngineState::Stopped);
    }
}
