//! Hardware output through cpal.

use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Host, SampleFormat, Stream};
use rtrb::{Producer, RingBuffer};
use thiserror::Error;
use tracing::{error, info, warn};

use super::{AudioBackend, OscillatorUnit, ScheduleError};
use crate::engine::{Mixer, SampleClock, ScheduledVoice};

pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

const WAIT_POLL: Duration = Duration::from_millis(10);

/// Which device to open and how many voices may wait to reach the audio thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output device name; `None` uses the host default.
    pub device: Option<String>,
    pub queue_capacity: usize,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self {
            device: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    pub fn device(mut self, name: impl Into<String>) -> Self {
        self.device = Some(name.into());
        self
    }

    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no output device available")]
    NoDevice,
    #[error("failed to enumerate output devices: {0}")]
    Devices(#[from] cpal::DevicesError),
    #[error("failed to fetch default output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("unsupported sample format {0:?}, only f32 output is supported")]
    UnsupportedFormat(SampleFormat),
    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
    #[error("voice queue is full")]
    QueueFull,
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Live backend: units are mixed on the cpal callback thread.
///
/// The clock counts frames rendered by the device, so it starts at zero when
/// the stream opens and runs for as long as the backend is alive. Dropping the
/// backend stops the stream and anything still scheduled.
pub struct CpalBackend {
    _stream: Stream,
    tx: Producer<ScheduledVoice>,
    clock: SampleClock,
    channels: usize,
    device_name: String,
}

impl CpalBackend {
    pub fn open(config: &OutputConfig) -> Result<Self, BackendError> {
        let host = cpal::default_host();
        let device = select_device(&host, config.device.as_deref())?;
        let device_name = device.name().unwrap_or_else(|_| "<unnamed>".to_string());

        let supported = device.default_output_config()?;
        if supported.sample_format() != SampleFormat::F32 {
            return Err(BackendError::UnsupportedFormat(supported.sample_format()));
        }

        let sample_rate = supported.sample_rate().0 as f32;
        let channels = supported.channels() as usize;

        let (tx, rx) = RingBuffer::<ScheduledVoice>::new(config.queue_capacity);
        let clock = SampleClock::new(sample_rate);
        let mut mixer = Mixer::new(rx, clock.clone());

        let stream = device.build_output_stream(
            &supported.into(),
            move |data: &mut [f32], _| mixer.render_interleaved(data, channels),
            |err| error!(%err, "audio stream error"),
            None,
        )?;
        stream.play()?;

        info!(
            device = %device_name,
            sample_rate,
            channels,
            "opened audio output"
        );

        Ok(Self {
            _stream: stream,
            tx,
            clock,
            channels,
            device_name,
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.clock.sample_rate()
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn clock(&self) -> &SampleClock {
        &self.clock
    }

    /// Block the calling thread until the device clock reaches `secs`.
    pub fn wait_until(&self, secs: f64) {
        while self.clock.now_secs() < secs {
            std::thread::sleep(WAIT_POLL);
        }
    }
}

fn select_device(host: &Host, name: Option<&str>) -> Result<Device, BackendError> {
    if let Some(name) = name {
        let found = host
            .output_devices()?
            .find(|device| device.name().is_ok_and(|n| n == name));

        match found {
            Some(device) => return Ok(device),
            None => warn!(requested = name, "output device not found, using default"),
        }
    }

    host.default_output_device().ok_or(BackendError::NoDevice)
}

impl AudioBackend for CpalBackend {
    type Unit = OscillatorUnit;
    type Error = BackendError;

    fn current_time(&self) -> f64 {
        self.clock.now_secs()
    }

    fn create_oscillator(&mut self) -> Result<Self::Unit, Self::Error> {
        Ok(OscillatorUnit::new())
    }

    fn connect(&mut self, unit: Self::Unit) -> Result<(), Self::Error> {
        let Some(voice) = ScheduledVoice::from_unit(&unit, &self.clock) else {
            return Ok(());
        };
        self.tx.push(voice).map_err(|_| BackendError::QueueFull)
    }
}
