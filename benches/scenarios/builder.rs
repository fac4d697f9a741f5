//! Benchmarks for builder transforms on joined builders.
//!
//! Every transform clones the stream list, so cost grows with the number of
//! joined streams.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonestream::backend::RecordingBackend;
use tonestream::StreamBuilder;

const STREAM_COUNTS: &[usize] = &[1, 16, 256];

fn joined(count: usize) -> StreamBuilder {
    let b = StreamBuilder::new();
    StreamBuilder::join((0..count).map(|i| b.sine(110.0 * (i + 1) as f32).delay(i as u32 * 10)))
}

pub fn bench_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/builder");

    for &count in STREAM_COUNTS {
        let source = joined(count);

        group.bench_with_input(BenchmarkId::new("broadcast", count), &count, |b, _| {
            b.iter(|| black_box(&source).sine(1000.0).duration(500).delay(250))
        });

        group.bench_with_input(BenchmarkId::new("join", count), &count, |b, _| {
            b.iter(|| StreamBuilder::join([black_box(&source), black_box(&source)]))
        });

        group.bench_with_input(BenchmarkId::new("play_recording", count), &count, |b, _| {
            b.iter(|| {
                let mut backend = RecordingBackend::new();
                source.clone().play(&mut backend).unwrap();
                black_box(backend.connected().len())
            })
        });
    }

    group.finish();
}
