use super::clock::SampleClock;
use crate::{backend::OscillatorUnit, dsp::oscillator::OscillatorBlock, stream::Waveform};

/// A connected unit, converted to frames, as the audio thread sees it.
///
/// The voice sounds on `[start_frame, stop_frame)`. Without a stop it sounds
/// until the mixer is dropped.
#[derive(Debug, Clone)]
pub struct ScheduledVoice {
    osc: OscillatorBlock,
    frequency: f32,
    start_frame: u64,
    stop_frame: Option<u64>,
}

impl ScheduledVoice {
    pub fn new(wave: Waveform, frequency: f32, start_frame: u64, stop_frame: Option<u64>) -> Self {
        Self {
            osc: OscillatorBlock::new(wave),
            frequency,
            start_frame,
            stop_frame,
        }
    }

    /// `None` when the unit was never started; such a unit stays silent.
    pub fn from_unit(unit: &OscillatorUnit, clock: &SampleClock) -> Option<Self> {
        let start = unit.start?;
        Some(Self::new(
            unit.wave,
            unit.frequency,
            clock.secs_to_frames(start),
            unit.stop.map(|stop| clock.secs_to_frames(stop)),
        ))
    }

    pub fn start_frame(&self) -> u64 {
        self.start_frame
    }

    pub fn stop_frame(&self) -> Option<u64> {
        self.stop_frame
    }

    /// True once nothing more will be heard from this voice at or after `frame`.
    pub fn is_finished(&self, frame: u64) -> bool {
        self.stop_frame
            .is_some_and(|stop| frame >= stop || stop <= self.start_frame)
    }

    /// Add this voice into `out`, whose first sample is `block_start`.
    ///
    /// `scratch` must be at least as long as `out`.
    pub fn render_add(
        &mut self,
        out: &mut [f32],
        block_start: u64,
        sample_rate: f32,
        scratch: &mut [f32],
    ) {
        let block_end = block_start + out.len() as u64;
        let begin = self.start_frame.max(block_start);
        let end = self.stop_frame.map_or(block_end, |stop| stop.min(block_end));
        if begin >= end {
            return;
        }

        let from = (begin - block_start) as usize;
        let to = (end - block_start) as usize;
        let rendered = &mut scratch[..to - from];
        self.osc.render(rendered, self.frequency, sample_rate);

        for (o, s) in out[from..to].iter_mut().zip(rendered.iter()) {
            *o += *s;
        }
    }
}
