//! Benchmarks for builder workloads and live mixing.

mod builder;
mod mixer;

pub use builder::bench_builder;
pub use mixer::bench_mixer;
