//! Audio-thread side of live playback.
//!
//! Connected units arrive as [`ScheduledVoice`]s through a [`VoiceReceiver`];
//! the [`Mixer`] renders them against a shared [`SampleClock`].

pub mod clock;
pub mod mixer;
pub mod voice;

use std::collections::VecDeque;

#[cfg(feature = "cpal")]
use rtrb::Consumer;

pub use clock::SampleClock;
pub use mixer::Mixer;
pub use voice::ScheduledVoice;

/// Source of newly connected voices, polled once per block.
pub trait VoiceReceiver {
    fn pop(&mut self) -> Option<ScheduledVoice>;
}

#[cfg(feature = "cpal")]
impl VoiceReceiver for Consumer<ScheduledVoice> {
    fn pop(&mut self) -> Option<ScheduledVoice> {
        Consumer::pop(self).ok()
    }
}

impl VoiceReceiver for VecDeque<ScheduledVoice> {
    fn pop(&mut self) -> Option<ScheduledVoice> {
        self.pop_front()
    }
}
