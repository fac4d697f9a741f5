use tonestream::backend::{AudioBackend, OscillatorUnit, RecordingBackend, ScheduleError};
use tonestream::{join, StreamBuilder, Waveform};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn schedules_each_stream_in_order() {
    let b = StreamBuilder::new();
    let source = join!(b.sine(440.0).duration(100), b.triangle(880.0).delay(50).duration(150));

    let mut backend = RecordingBackend::new();
    source.play(&mut backend).unwrap();

    let units = backend.connected();
    assert_eq!(units.len(), 2);

    assert_eq!(units[0].wave, Waveform::Sine);
    assert_eq!(units[0].frequency, 440.0);
    assert!(close(units[0].start.unwrap(), 0.0));
    assert!(close(units[0].stop.unwrap(), 0.1));

    assert_eq!(units[1].wave, Waveform::Triangle);
    assert_eq!(units[1].frequency, 880.0);
    assert!(close(units[1].start.unwrap(), 0.05));
    assert!(close(units[1].stop.unwrap(), 0.2));
}

#[test]
fn offsets_are_relative_to_backend_time() {
    let source = StreamBuilder::new().delay(500).duration(250);

    let mut backend = RecordingBackend::starting_at(12.0);
    source.play(&mut backend).unwrap();

    let unit = backend.connected()[0];
    assert!(close(unit.start.unwrap(), 12.5));
    assert!(close(unit.stop.unwrap(), 12.75));
}

#[test]
fn volume_and_filters_do_not_reach_the_backend() {
    let plain = StreamBuilder::new().sine(300.0).duration(40);
    let dressed = plain.volume(0.05).lowpass(200.0).highpass(50.0);

    let mut a = RecordingBackend::new();
    let mut b = RecordingBackend::new();
    plain.play(&mut a).unwrap();
    dressed.play(&mut b).unwrap();

    assert_eq!(a.connected(), b.connected());
}

#[test]
fn backend_errors_surface_unchanged() {
    let mut backend = RecordingBackend::starting_at(-1.0);
    let result = StreamBuilder::new().play(&mut backend);

    assert_eq!(result, Err(ScheduleError::InvalidTime(-1.0)));
    assert!(backend.connected().is_empty());
}

#[derive(Debug, PartialEq)]
enum FlakyError {
    OutOfUnits,
    Schedule(ScheduleError),
}

impl From<ScheduleError> for FlakyError {
    fn from(err: ScheduleError) -> Self {
        FlakyError::Schedule(err)
    }
}

/// Hands out a fixed number of units, then fails.
struct FlakyBackend {
    inner: RecordingBackend,
    units_left: usize,
}

impl AudioBackend for FlakyBackend {
    type Unit = OscillatorUnit;
    type Error = FlakyError;

    fn current_time(&self) -> f64 {
        self.inner.current_time()
    }

    fn create_oscillator(&mut self) -> Result<Self::Unit, Self::Error> {
        if self.units_left == 0 {
            return Err(FlakyError::OutOfUnits);
        }
        self.units_left -= 1;
        Ok(self.inner.create_oscillator()?)
    }

    fn connect(&mut self, unit: Self::Unit) -> Result<(), Self::Error> {
        Ok(self.inner.connect(unit)?)
    }
}

#[test]
fn failure_keeps_earlier_streams_scheduled() {
    let b = StreamBuilder::new();
    let source = join!(b.sine(100.0), b.sine(200.0), b.sine(300.0));

    let mut backend = FlakyBackend {
        inner: RecordingBackend::new(),
        units_left: 2,
    };
    let result = source.play(&mut backend);

    assert_eq!(result, Err(FlakyError::OutOfUnits));
    let freqs: Vec<f32> = backend.inner.connected().iter().map(|u| u.frequency).collect();
    assert_eq!(freqs, [100.0, 200.0]);
}

#[cfg(feature = "serde")]
#[test]
fn builder_serializes_as_stream_list() {
    use tonestream::FilterValue;

    let source = join!(
        StreamBuilder::new()
            .sine(440.0)
            .volume(0.2)
            .duration(1000)
            .lowpass(FilterValue::exponential(0.0, 400.0, 2000))
            .highpass(1500.0),
        StreamBuilder::new().sine(880.0).volume(0.2).delay(500).duration(500)
    );

    let json = serde_json::to_value(&source).unwrap();
    assert_eq!(json["streams"][0]["wave"], "sine");
    assert_eq!(json["streams"][0]["filters"][0]["kind"], "lowpass");
    assert_eq!(json["streams"][0]["filters"][0]["value"]["type"], "exponential");
    assert_eq!(json["streams"][0]["filters"][1]["value"]["type"], "constant");
    assert_eq!(json["streams"][1]["delay"], 500);

    let back: StreamBuilder = serde_json::from_value(json).unwrap();
    assert_eq!(back, source);
}

#[cfg(feature = "serde")]
#[test]
fn empty_stream_list_fails_to_deserialize() {
    let result = serde_json::from_str::<StreamBuilder>(r#"{ "streams": [] }"#);
    assert!(result.is_err());
}
