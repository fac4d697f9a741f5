//! Benchmarks for rendering scheduled voices through the mixer.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonestream::engine::{Mixer, SampleClock, ScheduledVoice};
use tonestream::Waveform;

use crate::BLOCK_SIZES;

const VOICE_COUNTS: &[usize] = &[1, 8, 64];

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mixer");

    for &voices in VOICE_COUNTS {
        for &size in BLOCK_SIZES {
            // Voices never stop, so every iteration renders all of them
            let queue: VecDeque<ScheduledVoice> = (0..voices)
                .map(|i| {
                    let wave = Waveform::ALL[i % Waveform::ALL.len()];
                    ScheduledVoice::new(wave, 110.0 + 55.0 * i as f32, 0, None)
                })
                .collect();
            let mut mixer = Mixer::new(queue, SampleClock::new(48_000.0));
            let mut data = vec![0.0f32; size * 2];

            group.bench_with_input(
                BenchmarkId::new(format!("{voices}_voices"), size),
                &size,
                |b, _| {
                    b.iter(|| mixer.render_interleaved(black_box(&mut data), 2));
                },
            );
        }
    }

    group.finish();
}
