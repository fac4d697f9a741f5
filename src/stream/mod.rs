//! Declarative description of what to play.
//!
//! A [`StreamBuilder`] holds one or more [`Stream`] descriptors. Transforms
//! return new builders and apply to every stream at once; [`StreamBuilder::join`]
//! flattens several builders into one.

/// Immutable builder and its transforms.
pub mod builder;
/// Per-stream sound descriptor.
pub mod descriptor;
/// Filter entries attached to streams.
pub mod filter;
/// Oscillator shapes.
pub mod wave;

pub use builder::{EmptyBuilder, StreamBuilder};
pub use descriptor::Stream;
pub use filter::{Filter, FilterKind, FilterValue};
pub use wave::Waveform;
