use super::{clock::SampleClock, voice::ScheduledVoice, VoiceReceiver};
use crate::{MAX_BLOCK_SIZE, MAX_VOICES};

/*
Voice Mixer
===========

Runs on the audio thread. Each block it:

1. Admits newly connected voices from the control queue (up to MAX_VOICES;
   the rest wait in the queue for a later block)
2. Renders every voice over its overlap with the block and sums them
3. Clamps the sum to [-1, 1]
4. Drops voices whose stop frame has passed
5. Advances the shared clock by the block length

Buffers are allocated up front, so rendering never allocates.
*/

pub struct Mixer<R> {
    voices: Vec<ScheduledVoice>,
    rx: R,
    clock: SampleClock,
    block: Vec<f32>,
    scratch: Vec<f32>,
}

impl<R: VoiceReceiver> Mixer<R> {
    pub fn new(rx: R, clock: SampleClock) -> Self {
        Self {
            voices: Vec::with_capacity(MAX_VOICES),
            rx,
            clock,
            block: vec![0.0; MAX_BLOCK_SIZE],
            scratch: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn clock(&self) -> &SampleClock {
        &self.clock
    }

    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.rx
    }

    /// Voices admitted and not yet finished.
    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Render a mono signal of any length into `out`.
    pub fn render(&mut self, out: &mut [f32]) {
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.render_block(chunk);
        }
    }

    /// Render interleaved frames with the mono mix copied to every channel.
    pub fn render_interleaved(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let mut block = std::mem::take(&mut self.block);

        for frames in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
            let frame_count = frames.len() / channels;
            let mono = &mut block[..frame_count];
            self.render_block(mono);

            for (frame, &sample) in frames.chunks_mut(channels).zip(mono.iter()) {
                frame.fill(sample);
            }
        }

        self.block = block;
    }

    fn admit_pending(&mut self) {
        while self.voices.len() < MAX_VOICES {
            match self.rx.pop() {
                Some(voice) => self.voices.push(voice),
                None => break,
            }
        }
    }

    fn render_block(&mut self, out: &mut [f32]) {
        self.admit_pending();

        let block_start = self.clock.frames();
        let sample_rate = self.clock.sample_rate();

        out.fill(0.0);
        for voice in &mut self.voices {
            voice.render_add(out, block_start, sample_rate, &mut self.scratch);
        }
        for sample in out.iter_mut() {
            *sample = sample.clamp(-1.0, 1.0);
        }

        let block_end = block_start + out.len() as u64;
        self.voices.retain(|voice| !voice.is_finished(block_end));
        self.clock.advance(out.len() as u64);
    }
}
