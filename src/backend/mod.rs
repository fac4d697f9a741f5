//! The audio subsystem a builder plays onto.
//!
//! [`StreamBuilder::play`](crate::stream::StreamBuilder::play) only needs a
//! clock, a way to get fresh playback units, and a way to connect them to the
//! output. Backends implement [`AudioBackend`]; the units they hand out
//! implement [`PlaybackUnit`].
//!
//! - [`RecordingBackend`] keeps every connected unit in memory (no audio).
//! - [`OfflineBackend`] renders connected units into sample buffers.
//! - `CpalBackend` (feature `cpal`) plays on a hardware output device.

#[cfg(feature = "cpal")]
pub mod device;
/// Frame-accurate rendering into memory.
pub mod offline;
/// In-memory schedule log.
pub mod recording;
/// Oscillator handle shared by the built-in backends.
pub mod unit;

use thiserror::Error;

use crate::stream::Waveform;

#[cfg(feature = "cpal")]
pub use device::{BackendError, CpalBackend, OutputConfig};
pub use offline::OfflineBackend;
pub use recording::RecordingBackend;
pub use unit::OscillatorUnit;

/// A schedulable sound generator handed out by a backend.
///
/// Wave and frequency are set before scheduling. Times are absolute seconds on
/// the owning backend's clock.
pub trait PlaybackUnit {
    type Error;

    fn set_wave(&mut self, wave: Waveform);

    fn set_frequency(&mut self, hz: f32);

    fn start(&mut self, at: f64) -> Result<(), Self::Error>;

    fn stop(&mut self, at: f64) -> Result<(), Self::Error>;
}

/// Clock plus unit factory plus output destination.
pub trait AudioBackend {
    type Unit: PlaybackUnit;
    type Error: From<<Self::Unit as PlaybackUnit>::Error>;

    /// Current time in seconds on the backend clock.
    fn current_time(&self) -> f64;

    /// Acquire a fresh, unscheduled unit.
    fn create_oscillator(&mut self) -> Result<Self::Unit, Self::Error>;

    /// Route `unit` to the final output.
    fn connect(&mut self, unit: Self::Unit) -> Result<(), Self::Error>;
}

/// Scheduling calls a unit refuses.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScheduleError {
    #[error("schedule time must be finite and non-negative, got {0}")]
    InvalidTime(f64),
    #[error("playback unit was already started")]
    AlreadyStarted,
    #[error("playback unit must be started before it can be stopped")]
    NotStarted,
}
