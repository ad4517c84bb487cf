use std::path::PathBuf;
use std::process;
use std::thread;

use clap::Parser;
use crossbeam_channel::bounded;

use facecount_core::detection::domain::gesture_counters::GestureCounters;
use facecount_core::metrics::infrastructure::shoelace_area::ShoelaceArea;
use facecount_core::session::gesture_session::GestureSession;
use facecount_core::session::infrastructure::channel_gesture_listener::ChannelGestureListener;
use facecount_core::session::infrastructure::logging_gesture_listener::LoggingGestureListener;
use facecount_core::session::session_logger::StdoutSessionLogger;
use facecount_core::shared::config::DetectorConfig;
use facecount_core::shared::gesture::GestureEvent;
use facecount_core::shared::stream_metadata::StreamMetadata;
use facecount_core::source::domain::landmark_source::LandmarkSource;
use facecount_core::source::infrastructure::jsonl_landmark_reader::JsonlLandmarkReader;

const EVENT_QUEUE_CAPACITY: usize = 256;

/// Counts blinks, mouth openings and eyebrow raises in a recorded
/// facial-landmark stream.
#[derive(Parser)]
#[command(name = "facecount")]
struct Cli {
    /// Landmark stream in JSON Lines format.
    input: PathBuf,

    /// Detector config file (defaults to the user config, if any).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stream width in pixels, used to scale the mouth area.
    #[arg(long, default_value = "1")]
    width: u32,

    /// Stream height in pixels, used to scale the mouth area.
    #[arg(long, default_value = "1")]
    height: u32,

    /// Nominal stream frame rate, reported against measured throughput.
    #[arg(long, default_value = "30")]
    fps: f64,

    /// Start a manual calibration before this frame index.
    #[arg(long)]
    calibrate_at: Option<usize>,

    /// Frames sampled by the manual calibration.
    #[arg(long)]
    calibrate_frames: Option<usize>,

    /// Print each gesture as a JSON line as it happens.
    #[arg(long)]
    events: bool,

    /// Print the final counts as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = match &cli.config {
        Some(path) => DetectorConfig::load_from(path)?,
        None => DetectorConfig::load()?,
    };
    let mut source: Box<dyn LandmarkSource> = Box::new(JsonlLandmarkReader::open(&cli.input)?);

    let mut session = GestureSession::new(
        config,
        Some(Box::new(ShoelaceArea::new())),
        Box::new(StdoutSessionLogger::new()),
    );
    session.add_listener(Box::new(LoggingGestureListener::new()));

    let reporter = if cli.events {
        let (tx, rx) = bounded::<GestureEvent>(EVENT_QUEUE_CAPACITY);
        session.add_listener(Box::new(ChannelGestureListener::new(tx)));
        Some(thread::spawn(move || {
            for event in rx {
                match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => log::warn!("Failed to encode event: {e}"),
                }
            }
        }))
    } else {
        None
    };

    session.start(StreamMetadata::new(cli.width, cli.height, cli.fps));
    let mut index = 0;
    while let Some(sample) = source.next_sample() {
        let sample = sample?;
        if cli.calibrate_at == Some(index) {
            session.start_manual_calibration(cli.calibrate_frames)?;
        }
        session.process_frame(sample.frame.as_ref(), sample.timestamp);
        index += 1;
    }
    session.stop();
    session.summary();

    let counters = *session.counters();
    // Dropping the session closes the event channel so the reporter drains and exits.
    drop(session);
    if let Some(handle) = reporter {
        if handle.join().is_err() {
            log::warn!("Event reporter thread panicked");
        }
    }

    print_counts(&counters, cli.json)
}

fn print_counts(counters: &GestureCounters, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(counters)?);
    } else {
        println!("Blinks: {}", counters.blink);
        println!("Mouth openings: {}", counters.mouth_open);
        println!("Eyebrow raises: {}", counters.eyebrow_raise);
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(format!("Config file not found: {}", path.display()).into());
        }
    }
    if cli.width == 0 || cli.height == 0 {
        return Err(format!(
            "Stream size must be positive, got {}x{}",
            cli.width, cli.height
        )
        .into());
    }
    if !cli.fps.is_finite() || cli.fps <= 0.0 {
        return Err(format!("Frame rate must be positive, got {}", cli.fps).into());
    }
    if cli.calibrate_frames.is_some() && cli.calibrate_at.is_none() {
        return Err("--calibrate-frames requires --calibrate-at".into());
    }
    if cli.calibrate_frames == Some(0) {
        return Err("Calibration frames must be at least 1".into());
    }
    Ok(())
}
