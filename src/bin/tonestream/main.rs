//! tonestream - play the two-tone demo on the default output
//!
//! Run with: cargo run -- [--device NAME] [--dry-run]

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tonestream::{
    backend::{AudioBackend, CpalBackend, OutputConfig, RecordingBackend},
    join, StreamBuilder,
};

#[derive(Debug, Parser)]
#[command(name = "tonestream", about = "Play a joined pair of tones")]
struct Args {
    /// Output device name (defaults to the host's default output)
    #[arg(long, env = "TONESTREAM_DEVICE")]
    device: Option<String>,

    /// Print the schedule instead of opening a device
    #[arg(long)]
    dry_run: bool,

    /// Extra time (ms) to keep the device open after the last tone ends
    #[arg(long, default_value_t = 100)]
    tail_ms: u64,
}

/// 440 Hz for one second, joined with 880 Hz for the second half of it.
fn demo() -> StreamBuilder {
    let b = StreamBuilder::new();
    join!(b.sine(440.0).duration(1000), b.sine(880.0).duration(500).delay(500))
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonestream=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let builder = demo();
    let length_ms = builder.total_duration_ms();

    if args.dry_run {
        let mut backend = RecordingBackend::new();
        builder
            .play(&mut backend)
            .wrap_err("failed to schedule demo")?;

        for (index, unit) in backend.connected().iter().enumerate() {
            println!(
                "#{index}: {} {} Hz  start {:.3}s  stop {:.3}s",
                unit.wave,
                unit.frequency,
                unit.start.unwrap_or_default(),
                unit.stop.unwrap_or_default(),
            );
        }
        return Ok(());
    }

    let mut config = OutputConfig::new();
    if let Some(name) = args.device {
        config = config.device(name);
    }

    let mut backend = CpalBackend::open(&config).wrap_err("failed to open audio output")?;
    let end = backend.current_time() + (length_ms + args.tail_ms) as f64 / 1000.0;

    info!(streams = builder.stream_count(), length_ms, "playing demo");
    builder
        .play(&mut backend)
        .wrap_err("failed to schedule demo")?;

    backend.wait_until(end);
    info!("done");

    Ok(())
}
