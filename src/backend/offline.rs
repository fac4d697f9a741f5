use std::collections::VecDeque;

use super::{AudioBackend, OscillatorUnit, ScheduleError};
use crate::engine::{Mixer, SampleClock, ScheduledVoice};

/// Backend that renders into memory instead of a device.
///
/// The clock advances only as samples are rendered, which makes it useful
/// for bouncing a builder to a buffer and for checking timing in tests.
pub struct OfflineBackend {
    mixer: Mixer<VecDeque<ScheduledVoice>>,
}

impl OfflineBackend {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            mixer: Mixer::new(VecDeque::new(), SampleClock::new(sample_rate)),
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.mixer.clock().sample_rate()
    }

    /// Render the next `frames` mono samples.
    pub fn render(&mut self, frames: usize) -> Vec<f32> {
        let mut out = vec![0.0; frames];
        self.mixer.render(&mut out);
        out
    }

    /// Render enough samples to cover `secs` seconds.
    pub fn render_secs(&mut self, secs: f64) -> Vec<f32> {
        let frames = self.mixer.clock().secs_to_frames(secs) as usize;
        self.render(frames)
    }

    pub fn render_into(&mut self, out: &mut [f32]) {
        self.mixer.render(out);
    }
}

impl AudioBackend for OfflineBackend {
    type Unit = OscillatorUnit;
    type Error = ScheduleError;

    fn current_time(&self) -> f64 {
        self.mixer.clock().now_secs()
    }

    fn create_oscillator(&mut self) -> Result<Self::Unit, Self::Error> {
        Ok(OscillatorUnit::new())
    }

    fn connect(&mut self, unit: Self::Unit) -> Result<(), Self::Error> {
        if let Some(voice) = ScheduledVoice::from_unit(&unit, self.mixer.clock()) {
            self.mixer.receiver_mut().push_back(voice);
        }
        Ok(())
    }
}
