use super::{PlaybackUnit, ScheduleError};
use crate::stream::{descriptor::DEFAULT_FREQUENCY, Waveform};

/// Plain oscillator settings collected before a unit is connected.
///
/// A fresh unit is a 440 Hz sine with no schedule. Start may be set once;
/// stop needs a start and may be moved by calling it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorUnit {
    pub wave: Waveform,
    pub frequency: f32,
    pub start: Option<f64>,
    pub stop: Option<f64>,
}

impl OscillatorUnit {
    pub fn new() -> Self {
        Self {
            wave: Waveform::Sine,
            frequency: DEFAULT_FREQUENCY,
            start: None,
            stop: None,
        }
    }

    /// Seconds between start and stop, if both are set.
    pub fn scheduled_length(&self) -> Option<f64> {
        match (self.start, self.stop) {
            (Some(start), Some(stop)) => Some((stop - start).max(0.0)),
            _ => None,
        }
    }
}

impl Default for OscillatorUnit {
    fn default() -> Self {
        Self::new()
    }
}

fn check_time(at: f64) -> Result<f64, ScheduleError> {
    if at.is_finite() && at >= 0.0 {
        Ok(at)
    } else {
        Err(ScheduleError::InvalidTime(at))
    }
}

impl PlaybackUnit for OscillatorUnit {
    type Error = ScheduleError;

    fn set_wave(&mut self, wave: Waveform) {
        self.wave = wave;
    }

    fn set_frequency(&mut self, hz: f32) {
        self.frequency = hz;
    }

    fn start(&mut self, at: f64) -> Result<(), Self::Error> {
        let at = check_time(at)?;
        if self.start.is_some() {
            return Err(ScheduleError::AlreadyStarted);
        }
        self.start = Some(at);
        Ok(())
    }

    fn stop(&mut self, at: f64) -> Result<(), Self::Error> {
        let at = check_time(at)?;
        if self.start.is_none() {
            return Err(ScheduleError::NotStarted);
        }
        self.stop = Some(at);
        Ok(())
    }
}
