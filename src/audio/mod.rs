//! Audio module
//!
//! This module contains all audio-related functionality:
//! - Noise sample generation ([`signal`])
//! - Output stream management and the real-time callback ([`engine`])

pub mod engine;
pub mod signal;
