use std::collections::HashMap;
use std::time::Instant;

use crate::calibration::domain::calibration_outcome::CalibrationOutcome;
use crate::shared::gesture::{GestureEvent, GestureKind};
use crate::shared::stream_metadata::StreamMetadata;

/// Cross-cutting logger for session activity.
///
/// Decouples the frame handler from specific output mechanisms so callers
/// can observe a run without changing the detection code.
pub trait SessionLogger: Send {
    /// Called once per session start with the stream description.
    fn stream_started(&mut self, _stream: &StreamMetadata) {}

    /// Record one handled frame and how long it took.
    fn frame(&mut self, has_face: bool, duration_ms: f64);

    fn gesture(&mut self, event: &GestureEvent);

    fn calibration(&mut self, outcome: &CalibrationOutcome);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullSessionLogger;

impl SessionLogger for NullSessionLogger {
    fn frame(&mut self, _has_face: bool, _duration_ms: f64) {}
    fn gesture(&mut self, _event: &GestureEvent) {}
    fn calibration(&mut self, _outcome: &CalibrationOutcome) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that tracks frame timing, face presence, gestures
/// and calibrations, and reports them when the run ends.
pub struct StdoutSessionLogger {
    start_time: Instant,
    frame_times: Vec<f64>,
    frames_with_face: usize,
    frames_without_face: usize,
    gestures: HashMap<GestureKind, u64>,
    calibrations_committed: usize,
    calibrations_discarded: usize,
    nominal_fps: Option<f64>,
    messages: Vec<String>,
}

impl StdoutSessionLogger {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            frame_times: Vec::new(),
            frames_with_face: 0,
            frames_without_face: 0,
            gestures: HashMap::new(),
            calibrations_committed: 0,
            calibrations_discarded: 0,
            nominal_fps: None,
            messages: Vec::new(),
        }
    }

    pub fn frames(&self) -> usize {
        self.frames_with_face + self.frames_without_face
    }

    /// Returns the formatted summary string, or `None` if no frame was seen.
    pub fn summary_string(&self) -> Option<String> {
        let frames = self.frames();
        if frames == 0 {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = Vec::new();
        lines.push(format!(
            "Session summary ({frames} frames, {:.1}s total):",
            elapsed_ms / 1000.0
        ));

        let face_pct = self.frames_with_face as f64 / frames as f64 * 100.0;
        lines.push(format!(
            "  face present: {}/{frames} ({face_pct:4.1}%)",
            self.frames_with_face
        ));

        let total_ms: f64 = self.frame_times.iter().sum();
        let avg_ms = total_ms / self.frame_times.len().max(1) as f64;
        let max_ms = self.frame_times.iter().copied().fold(0.0, f64::max);
        lines.push(format!(
            "  frame time  : avg {avg_ms:6.3}ms  max {max_ms:6.3}ms"
        ));

        for &kind in GestureKind::ALL {
            let n = self.gestures.get(&kind).copied().unwrap_or(0);
            lines.push(format!("  {:<14}: {n}", kind.to_string()));
        }

        lines.push(format!(
            "  calibrations: {} committed, {} discarded",
            self.calibrations_committed, self.calibrations_discarded
        ));

        if elapsed_ms > 0.0 {
            let fps = frames as f64 / (elapsed_ms / 1000.0);
            lines.push(format!("  Throughput: {fps:.1} fps"));
        }
        if let Some(nominal) = self.nominal_fps {
            lines.push(format!(
                "  Nominal rate: {nominal:.1} fps ({:.1}s of stream)",
                frames as f64 / nominal
            ));
        }

        Some(lines.join("\n"))
    }
}

impl Default for StdoutSessionLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLogger for StdoutSessionLogger {
    fn stream_started(&mut self, stream: &StreamMetadata) {
        // Normalized streams carry no rate.
        self.nominal_fps = (stream.fps > 0.0).then_some(stream.fps);
    }

    fn frame(&mut self, has_face: bool, duration_ms: f64) {
        if has_face {
            self.frames_with_face += 1;
        } else {
            self.frames_without_face += 1;
        }
        self.frame_times.push(duration_ms);
    }

    fn gesture(&mut self, event: &GestureEvent) {
        *self.gestures.entry(event.kind).or_default() += 1;
    }

    fn calibration(&mut self, outcome: &CalibrationOutcome) {
        match outcome {
            CalibrationOutcome::Committed(r) => {
                self.calibrations_committed += 1;
                log::info!(
                    "{} calibration committed over {} samples: open {:.4}, close {:.4}",
                    r.mode,
                    r.samples,
                    r.lip.thresholds.open(),
                    r.lip.thresholds.close()
                );
            }
            CalibrationOutcome::Discarded { mode, samples } => {
                self.calibrations_discarded += 1;
                log::info!("{mode} calibration discarded ({samples} samples)");
            }
        }
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
