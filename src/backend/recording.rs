use super::{AudioBackend, OscillatorUnit, ScheduleError};

/// Backend that produces no sound and remembers what it was asked to play.
///
/// The clock only moves when told to, so scheduled times are exact.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    now: f64,
    created: usize,
    connected: Vec<OscillatorUnit>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at `now` seconds instead of zero.
    pub fn starting_at(now: f64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    pub fn advance(&mut self, secs: f64) {
        self.now += secs;
    }

    /// Units handed out, connected or not.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Connected units in connection order.
    pub fn connected(&self) -> &[OscillatorUnit] {
        &self.connected
    }

    /// Take the connected units, leaving the log empty.
    pub fn drain(&mut self) -> Vec<OscillatorUnit> {
        std::mem::take(&mut self.connected)
    }
}

impl AudioBackend for RecordingBackend {
    type Unit = OscillatorUnit;
    type Error = ScheduleError;

    fn current_time(&self) -> f64 {
        self.now
    }

    fn create_oscillator(&mut self) -> Result<Self::Unit, Self::Error> {
        self.created += 1;
        Ok(OscillatorUnit::new())
    }

    fn connect(&mut self, unit: Self::Unit) -> Result<(), Self::Error> {
        self.connected.push(unit);
        Ok(())
    }
}
