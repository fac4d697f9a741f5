#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Stream Filters
==============

A filter entry describes how a stream should be shaped once filtering is
wired into playback. Entries are kept in the order they were added.

  kind    Highpass passes content above the cutoff, lowpass below it.

  value   The cutoff in Hz, either fixed or swept:

            Constant { value }                     cutoff stays put
            Exponential { initial, end, duration } cutoff moves from `initial`
                                                   to `end` over `duration` ms

Example:
  // 440 Hz tone, lowpass sweeping 0 Hz -> 400 Hz over two seconds,
  // then a fixed highpass at 1500 Hz
  let tone = StreamBuilder::new()
      .sine(440.0)
      .lowpass(FilterValue::exponential(0.0, 400.0, 2000))
      .highpass(1500.0);

Playback does not consume filters yet; they ride along in the descriptor.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Highpass,
    Lowpass,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue {
    Constant {
        value: f32,
    },
    Exponential {
        initial: f32,
        end: f32,
        /// Sweep length in milliseconds.
        duration: u32,
    },
}

impl FilterValue {
    pub fn constant(value: f32) -> Self {
        FilterValue::Constant { value }
    }

    pub fn exponential(initial: f32, end: f32, duration_ms: u32) -> Self {
        FilterValue::Exponential {
            initial,
            end,
            duration: duration_ms,
        }
    }

    /// Cutoff at the moment the stream starts.
    pub fn initial(&self) -> f32 {
        match *self {
            FilterValue::Constant { value } => value,
            FilterValue::Exponential { initial, .. } => initial,
        }
    }
}

impl From<f32> for FilterValue {
    fn from(value: f32) -> Self {
        FilterValue::constant(value)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    pub kind: FilterKind,
    pub value: FilterValue,
}

impl Filter {
    pub fn highpass(value: impl Into<FilterValue>) -> Self {
        Filter {
            kind: FilterKind::Highpass,
            value: value.into(),
        }
    }

    pub fn lowpass(value: impl Into<FilterValue>) -> Self {
        Filter {
            kind: FilterKind::Lowpass,
            value: value.into(),
        }
    }
}
