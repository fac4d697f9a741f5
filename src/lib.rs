//! Describe sounds as immutable stream builders, then play them on an audio
//! backend.
//!
//! ```
//! use tonestream::{backend::RecordingBackend, join, StreamBuilder};
//!
//! let b = StreamBuilder::new();
//! let chord = join!(b.sine(440.0).duration(1000), b.sine(880.0).delay(500).duration(500));
//!
//! let mut backend = RecordingBackend::new();
//! chord.play(&mut backend).unwrap();
//! assert_eq!(backend.connected().len(), 2);
//! ```

pub mod backend; // Playback collaborators
pub mod dsp;
pub mod engine; // Audio-thread mixing
pub mod stream; // Builder and descriptors

pub use backend::{AudioBackend, PlaybackUnit};
pub use stream::{Filter, FilterKind, FilterValue, Stream, StreamBuilder, Waveform};

pub const MAX_BLOCK_SIZE: usize = 2048;
/// Voices the mixer renders at once; later connections wait their turn.
pub const MAX_VOICES: usize = 256;
