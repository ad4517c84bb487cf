//! Camera-session lifecycle and the synchronous per-frame handler.
//!
//! Per frame with a usable face: extract metrics, smooth the mouth signal,
//! fill missing baselines, evaluate gestures, then feed the in-flight
//! calibration. A committed calibration takes effect from the next frame.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::calibration::domain::calibration_outcome::{CalibrationOutcome, CalibrationProgress};
use crate::calibration::domain::calibration_run::CalibrationRun;
use crate::calibration::domain::manual_calibration::ManualCalibration;
use crate::calibration::domain::threshold_derivation::HysteresisMargins;
use crate::detection::domain::baseline::Baseline;
use crate::detection::domain::event_detector::EventState;
use crate::detection::domain::gesture_counters::GestureCounters;
use crate::detection::domain::mouth_thresholds::MouthThresholds;
use crate::detection::domain::signal_smoother::SignalSmoother;
use crate::metrics::domain::face_metrics::FrameMetrics;
use crate::metrics::domain::metric_extractor::MetricExtractor;
use crate::metrics::domain::quad_area::QuadAreaCalculator;
use crate::session::domain::gesture_listener::GestureListener;
use crate::session::frame_report::FrameReport;
use crate::session::session_context::SessionContext;
use crate::session::session_logger::SessionLogger;
use crate::shared::config::DetectorConfig;
use crate::shared::landmark_frame::LandmarkFrame;
use crate::shared::stream_metadata::StreamMetadata;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("no camera session is running")]
    NotRunning,
}

pub struct GestureSession {
    config: DetectorConfig,
    extractor: MetricExtractor,
    counters: GestureCounters,
    context: Option<SessionContext>,
    listeners: Vec<Box<dyn GestureListener>>,
    logger: Box<dyn SessionLogger>,
}

impl GestureSession {
    pub fn new(
        config: DetectorConfig,
        area: Option<Box<dyn QuadAreaCalculator>>,
        logger: Box<dyn SessionLogger>,
    ) -> Self {
        let extractor = MetricExtractor::new(config.layout, area).with_epsilon(config.epsilon);
        Self {
            config,
            extractor,
            counters: GestureCounters::new(),
            context: None,
            listeners: Vec::new(),
            logger,
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn GestureListener>) {
        self.listeners.push(listener);
    }

    /// Late binding of the area utility; LIPAN reads 0 until then.
    pub fn set_area_calculator(&mut self, area: Box<dyn QuadAreaCalculator>) {
        self.extractor.set_area_calculator(area);
    }

    /// Begins frame processing with a fresh context and automatic
    /// calibration armed. No-op while already running.
    pub fn start(&mut self, stream: StreamMetadata) {
        if self.context.is_some() {
            log::debug!("Session already running, ignoring start");
            return;
        }
        self.extractor.set_stream(&stream);
        self.logger.stream_started(&stream);
        self.context = Some(SessionContext::new(&self.config));
        self.logger.info(&format!(
            "Session started ({}x{}), calibrating over {} frames",
            stream.width, stream.height, self.config.auto_calibration_frames
        ));
    }

    /// Drops all per-session state. Cumulative counts survive. Idempotent.
    pub fn stop(&mut self) {
        if self.context.take().is_some() {
            self.logger.info("Session stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.context.is_some()
    }

    /// Replaces any in-flight calibration (aborting a pending automatic
    /// one) with a manual run over `frames` face frames.
    pub fn start_manual_calibration(&mut self, frames: Option<usize>) -> Result<(), SessionError> {
        let ctx = self.context.as_mut().ok_or(SessionError::NotRunning)?;
        let frames = frames.unwrap_or(self.config.manual_calibration_frames);
        let previous = ctx.calibration.replace(CalibrationRun::Manual(ManualCalibration::new(
            frames,
            self.config.manual_min_samples,
            HysteresisMargins::from_config(&self.config),
        )));
        if let Some(run) = previous {
            let p = run.progress();
            log::info!(
                "Aborting {} calibration at {}/{} frames",
                p.mode,
                p.collected,
                p.target
            );
        }
        self.logger
            .info(&format!("Manual calibration started over {frames} frames"));
        Ok(())
    }

    pub fn reset_counters(&mut self) {
        self.counters.reset();
        self.logger.info("Counters reset");
    }

    /// Handles one frame. `None`, or a frame too short for the layout,
    /// counts as no face: nothing is evaluated and calibration waits.
    pub fn process_frame(&mut self, frame: Option<&LandmarkFrame>, now: Duration) -> FrameReport {
        let started = Instant::now();
        let Some(ctx) = self.context.as_mut() else {
            log::debug!("Frame at {now:?} ignored, session not running");
            return FrameReport::empty(now);
        };

        let face = frame.filter(|f| {
            let usable = self.extractor.accepts(f);
            if !usable {
                log::warn!(
                    "Dropping frame at {now:?}: {} landmarks, layout needs {}",
                    f.len(),
                    self.extractor.layout().required_len()
                );
            }
            usable
        });

        let mut report = FrameReport::empty(now);
        if let Some(face) = face {
            let raw = self.extractor.extract(face);
            let ema = ctx.smoother.smooth(raw.lipan);
            let metrics = FrameMetrics::new(raw, Some(ema));
            ctx.baseline.ensure(&raw);

            report.events = ctx.detector.evaluate(
                &metrics,
                &ctx.baseline,
                ctx.thresholds.as_ref(),
                now,
                &mut self.counters,
            );
            report.mouth_open_indicator = ctx.thresholds.is_some_and(|t| ema > t.open());
            report.metrics = Some(metrics);
            ctx.last_metrics = Some(metrics);

            if let Some(outcome) = ctx.calibration.as_mut().and_then(|run| run.push(&raw)) {
                ctx.calibration = None;
                if let CalibrationOutcome::Committed(result) = &outcome {
                    ctx.apply_calibration(result);
                }
                report.calibration = Some(outcome);
            }
        }
        report.baseline_lipan = ctx.baseline.lipan();
        report.thresholds = ctx.thresholds;

        for event in &report.events {
            for listener in self.listeners.iter_mut() {
                listener.on_gesture(event);
            }
            self.logger.gesture(event);
        }
        if let Some(outcome) = &report.calibration {
            self.logger.calibration(outcome);
        }
        if report.has_face() {
            log::debug!("{report}");
        }
        self.logger
            .frame(report.has_face(), started.elapsed().as_secs_f64() * 1000.0);
        report
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn counters(&self) -> &GestureCounters {
        &self.counters
    }

    pub fn baseline(&self) -> Option<&Baseline> {
        self.context.as_ref().map(|ctx| &ctx.baseline)
    }

    pub fn thresholds(&self) -> Option<MouthThresholds> {
        self.context.as_ref().and_then(|ctx| ctx.thresholds)
    }

    pub fn event_state(&self) -> Option<EventState> {
        self.context.as_ref().map(|ctx| ctx.detector.state())
    }

    pub fn smoothed_lipan(&self) -> Option<f64> {
        self.context.as_ref().and_then(|ctx| ctx.smoother.value())
    }

    pub fn last_metrics(&self) -> Option<FrameMetrics> {
        self.context.as_ref().and_then(|ctx| ctx.last_metrics)
    }

    pub fn calibration_progress(&self) -> Option<CalibrationProgress> {
        self.context
            .as_ref()
            .and_then(|ctx| ctx.calibration.as_ref())
            .map(|run| run.progress())
    }

    /// Emits the logger's end-of-run summary.
    pub fn summary(&self) {
        self.logger.summary();
    }
}
