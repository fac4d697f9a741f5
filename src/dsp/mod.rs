//! Low-level signal generation used by the mixer.
//!
//! Allocation-free and realtime-safe, so it can run inside the audio callback.

/// Oscillator waveforms.
pub mod oscillator;

pub use oscillator::OscillatorBlock;
