use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Frame counter shared between the audio thread and the control side.
///
/// Only the mixer advances it; everyone else reads.
#[derive(Debug, Clone)]
pub struct SampleClock {
    frames: Arc<AtomicU64>,
    sample_rate: f32,
}

impl SampleClock {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            frames: Arc::new(AtomicU64::new(0)),
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    pub fn now_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    pub fn advance(&self, frames: u64) {
        self.frames.fetch_add(frames, Ordering::AcqRel);
    }

    /// Nearest frame to `secs` on this clock. Negative times map to frame 0.
    pub fn secs_to_frames(&self, secs: f64) -> u64 {
        (secs * self.sample_rate as f64).round().max(0.0) as u64
    }
}
