//! Benchmarks for low-level DSP primitives.

mod oscillator;

pub use oscillator::bench_oscillator;
