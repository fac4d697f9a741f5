use std::f32::consts::TAU;

use crate::stream::Waveform;

/*
Phase-Accumulator Oscillator
============================

Every waveform is a function of a normalized phase in [0, 1). Each sample the
phase advances by frequency / sample_rate and wraps at 1.0, so pitch changes
between blocks are seamless.

All four shapes start at 0.0 and rise, matching the usual browser oscillator
convention:

  Sine:      sin(2π · phase)
  Square:    +1 for the first half cycle, -1 for the second
  Triangle:  0 → +1 → 0 → -1 → 0, linear segments
  Sawtooth:  0 → +1, jump to -1, → 0

No band-limiting is applied; square and sawtooth alias at high pitches.

Example usage:
  let mut osc = OscillatorBlock::new(Waveform::Triangle);
  let mut block = [0.0f32; 128];
  osc.render(&mut block, 440.0, 48_000.0);
*/

#[derive(Debug, Clone)]
pub struct OscillatorBlock {
    waveform: Waveform,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: Waveform) -> Self {
        Self { waveform, phase: 0.0 }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn square() -> Self {
        Self::new(Waveform::Square)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    pub fn sawtooth() -> Self {
        Self::new(Waveform::Sawtooth)
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Overwrite `out` with the next `out.len()` samples.
    pub fn render(&mut self, out: &mut [f32], frequency: f32, sample_rate: f32) {
        let increment = frequency / sample_rate;

        for sample in out.iter_mut() {
            *sample = shape(self.waveform, self.phase);
            self.phase = (self.phase + increment).rem_euclid(1.0);
        }
    }
}

#[inline]
fn shape(waveform: Waveform, phase: f32) -> f32 {
    match waveform {
        Waveform::Sine => (TAU * phase).sin(),
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Triangle => {
            let shifted = (phase + 0.25).fract();
            1.0 - 4.0 * (shifted - 0.5).abs()
        }
        Waveform::Sawtooth => 2.0 * (phase + 0.5).fract() - 1.0,
    }
}
