use std::fmt;
use std::time::Duration;

use crate::calibration::domain::calibration_outcome::CalibrationOutcome;
use crate::detection::domain::mouth_thresholds::MouthThresholds;
use crate::metrics::domain::face_metrics::FrameMetrics;
use crate::shared::gesture::GestureEvent;

/// What the session made of one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub timestamp: Duration,
    /// `None` when no usable face was present.
    pub metrics: Option<FrameMetrics>,
    pub events: Vec<GestureEvent>,
    /// Smoothed mouth signal above the open threshold; drives overlay fill.
    pub mouth_open_indicator: bool,
    /// Set on the frame a calibration run finished.
    pub calibration: Option<CalibrationOutcome>,
    pub baseline_lipan: Option<f64>,
    pub thresholds: Option<MouthThresholds>,
}

impl FrameReport {
    pub(crate) fn empty(timestamp: Duration) -> Self {
        Self {
            timestamp,
            metrics: None,
            events: Vec::new(),
            mouth_open_indicator: false,
            calibration: None,
            baseline_lipan: None,
            thresholds: None,
        }
    }

    pub fn has_face(&self) -> bool {
        self.metrics.is_some()
    }
}

struct Value(Option<f64>);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.4}"),
            None => write!(f, "-"),
        }
    }
}

/// Mouth-signal debug line: raw, smoothed, baseline and band.
impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LIPAN: {} | EMA: {} | base: {} | open: {} | close: {}",
            Value(self.metrics.map(|m| m.raw.lipan)),
            Value(self.metrics.and_then(|m| m.lipan_ema)),
            Value(self.baseline_lipan),
            Value(self.thresholds.map(|t| t.open())),
            Value(self.thresholds.map(|t| t.close())),
        )
    }
}
