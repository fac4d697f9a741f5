#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{filter::Filter, wave::Waveform};

pub const DEFAULT_FREQUENCY: f32 = 440.0;
pub const DEFAULT_VOLUME: f32 = 0.5;

/// One independent sound: waveform, pitch, level, timing and filters.
///
/// Times are whole milliseconds measured from the moment the builder is
/// played. `volume` and `filters` are carried through every transform but
/// playback does not apply them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    pub wave: Waveform,
    /// Pitch in Hz
    pub frequency: f32,
    /// Level, 0.0-1.0
    pub volume: f32,
    /// Start offset in ms
    pub delay: u32,
    /// Active length in ms
    pub duration: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub filters: Vec<Filter>,
}

impl Stream {
    /// Offset (ms) at which the stream stops sounding.
    pub fn end_ms(&self) -> u64 {
        self.delay as u64 + self.duration as u64
    }

    /// Start offset in seconds, as handed to the backend.
    pub fn start_secs(&self) -> f64 {
        self.delay as f64 / 1000.0
    }

    /// Stop offset in seconds, as handed to the backend.
    pub fn stop_secs(&self) -> f64 {
        self.end_ms() as f64 / 1000.0
    }
}

impl Default for Stream {
    fn default() -> Self {
        Self {
            wave: Waveform::Sine,
            frequency: DEFAULT_FREQUENCY,
            volume: DEFAULT_VOLUME,
            delay: 0,
            duration: 0,
            filters: Vec::new(),
        }
    }
}
