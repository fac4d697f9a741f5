use std::borrow::Borrow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{
    descriptor::Stream,
    filter::{Filter, FilterValue},
    wave::Waveform,
};
use crate::backend::{AudioBackend, PlaybackUnit};

/*
Stream Builder
==============

A builder is an ordered, never-empty list of streams. Every transform borrows
the receiver and hands back a fresh builder, so a value can be reused as the
starting point for several variations:

  let base = StreamBuilder::new().duration(1000);
  let low  = base.sine(220.0);   // base is untouched
  let high = base.sine(880.0);

Transforms broadcast
--------------------

`wave`, `duration`, `delay` and `volume` overwrite the field on EVERY stream.
On a joined builder this retunes all of the parts at once:

  join!(sine(100), triangle(200), square(300)).sine(1000)
    -> three streams, all sine @ 1000 Hz

`lowpass`/`highpass` likewise append the same filter to every stream. There is
no way to reach a single stream after a join; compose by building the parts
first and joining last.

Join flattens
-------------

`join` concatenates the stream lists of its arguments in argument order. It
does not include any receiver, and joining a joined builder stays flat:

  join!(join!(a, b), c).streams() == [a.., b.., c..]

Playing
-------

`play` consumes the builder. For each stream, in order, it asks the backend
for a playback unit, sets wave and frequency, schedules start at
now + delay and stop at now + delay + duration (seconds), and connects it to
the output. Volume and filters are not applied.
*/

/// Immutable, ordered collection of streams with chainable transforms.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BuilderRepr"))]
#[derive(Debug, Clone, PartialEq)]
pub struct StreamBuilder {
    streams: Vec<Stream>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct BuilderRepr {
    streams: Vec<Stream>,
}

#[cfg(feature = "serde")]
impl TryFrom<BuilderRepr> for StreamBuilder {
    type Error = EmptyBuilder;

    fn try_from(repr: BuilderRepr) -> Result<Self, Self::Error> {
        StreamBuilder::try_from(repr.streams)
    }
}

/// Rejected attempt to build a builder from zero streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a stream builder must hold at least one stream")]
pub struct EmptyBuilder;

impl StreamBuilder {
    /// The initial builder: one sine stream at 440 Hz, volume 0.5, no delay,
    /// zero duration and no filters.
    pub fn new() -> Self {
        Self {
            streams: vec![Stream::default()],
        }
    }

    fn map_streams(&self, mut apply: impl FnMut(&mut Stream)) -> Self {
        let streams = self
            .streams
            .iter()
            .cloned()
            .map(|mut stream| {
                apply(&mut stream);
                stream
            })
            .collect();

        Self { streams }
    }

    /// Set waveform and frequency (Hz) on every stream.
    pub fn wave(&self, wave: Waveform, frequency: f32) -> Self {
        self.map_streams(|stream| {
            stream.wave = wave;
            stream.frequency = frequency;
        })
    }

    pub fn sine(&self, frequency: f32) -> Self {
        self.wave(Waveform::Sine, frequency)
    }

    pub fn square(&self, frequency: f32) -> Self {
        self.wave(Waveform::Square, frequency)
    }

    pub fn triangle(&self, frequency: f32) -> Self {
        self.wave(Waveform::Triangle, frequency)
    }

    pub fn sawtooth(&self, frequency: f32) -> Self {
        self.wave(Waveform::Sawtooth, frequency)
    }

    /// Set the active length (ms) of every stream.
    pub fn duration(&self, ms: u32) -> Self {
        self.map_streams(|stream| stream.duration = ms)
    }

    /// Set the start offset (ms) of every stream.
    pub fn delay(&self, ms: u32) -> Self {
        self.map_streams(|stream| stream.delay = ms)
    }

    /// Set the level of every stream. Not clamped.
    pub fn volume(&self, volume: f32) -> Self {
        self.map_streams(|stream| stream.volume = volume)
    }

    /// Append `filter` to every stream's filter chain.
    pub fn filter(&self, filter: Filter) -> Self {
        self.map_streams(|stream| stream.filters.push(filter))
    }

    pub fn lowpass(&self, value: impl Into<FilterValue>) -> Self {
        self.filter(Filter::lowpass(value))
    }

    pub fn highpass(&self, value: impl Into<FilterValue>) -> Self {
        self.filter(Filter::highpass(value))
    }

    /// Concatenate the streams of every builder, in argument order.
    ///
    /// Only the arguments contribute; there is no receiver. Joining nothing
    /// yields the initial builder, see [`join!`](crate::join) for a form that
    /// rejects an empty argument list at compile time.
    pub fn join<I>(builders: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<StreamBuilder>,
    {
        let streams: Vec<Stream> = builders
            .into_iter()
            .flat_map(|builder| builder.borrow().streams.clone())
            .collect();

        Self::try_from(streams).unwrap_or_default()
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stream> {
        self.streams.iter()
    }

    pub fn into_streams(self) -> Vec<Stream> {
        self.streams
    }

    /// Number of streams. Always at least one.
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Latest `delay + duration` across all streams, in ms.
    pub fn total_duration_ms(&self) -> u64 {
        self.streams.iter().map(Stream::end_ms).max().unwrap_or(0)
    }

    /// Hand every stream to `backend` for playback.
    ///
    /// The backend's clock is read once, so all offsets share one origin.
    /// The first backend error is returned as is; streams scheduled before it
    /// stay scheduled.
    pub fn play<B: AudioBackend>(self, backend: &mut B) -> Result<(), B::Error> {
        let now = backend.current_time();

        for (index, stream) in self.streams.into_iter().enumerate() {
            let start = now + stream.start_secs();
            let stop = now + stream.stop_secs();

            let mut unit = backend.create_oscillator()?;
            unit.set_wave(stream.wave);
            unit.set_frequency(stream.frequency);
            unit.start(start)?;
            unit.stop(stop)?;
            backend.connect(unit)?;

            debug!(
                index,
                wave = %stream.wave,
                frequency = stream.frequency,
                start,
                stop,
                "scheduled stream"
            );
        }

        Ok(())
    }
}

impl Default for StreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Stream>> for StreamBuilder {
    type Error = EmptyBuilder;

    fn try_from(streams: Vec<Stream>) -> Result<Self, Self::Error> {
        if streams.is_empty() {
            return Err(EmptyBuilder);
        }
        Ok(Self { streams })
    }
}

impl<'a> IntoIterator for &'a StreamBuilder {
    type Item = &'a Stream;
    type IntoIter = std::slice::Iter<'a, Stream>;

    fn into_iter(self) -> Self::IntoIter {
        self.streams.iter()
    }
}

/// Join one or more builders into a single flat builder.
///
/// ```
/// use tonestream::{join, StreamBuilder};
///
/// let b = StreamBuilder::new();
/// let joined = join!(b.sine(440.0).duration(1000), b.sine(880.0).delay(500));
/// assert_eq!(joined.stream_count(), 2);
/// ```
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::stream::StreamBuilder::join([&$first $(, &$rest)*])
    };
}
