use crate::calibration::domain::auto_calibration::AutoCalibration;
use crate::calibration::domain::calibration_outcome::CalibrationResult;
use crate::calibration::domain::calibration_run::CalibrationRun;
use crate::calibration::domain::threshold_derivation::HysteresisMargins;
use crate::detection::domain::baseline::Baseline;
use crate::detection::domain::event_detector::EventDetector;
use crate::detection::domain::mouth_thresholds::MouthThresholds;
use crate::detection::domain::signal_smoother::{EmaSmoother, SignalSmoother};
use crate::metrics::domain::face_metrics::FrameMetrics;
use crate::shared::config::DetectorConfig;

/// All state scoped to one camera session.
///
/// Created on start with automatic calibration armed and dropped whole on
/// stop, so a new session never sees a previous baseline, band, EMA value
/// or half-finished calibration.
pub struct SessionContext {
    pub(crate) baseline: Baseline,
    pub(crate) thresholds: Option<MouthThresholds>,
    pub(crate) smoother: EmaSmoother,
    pub(crate) detector: EventDetector,
    pub(crate) calibration: Option<CalibrationRun>,
    pub(crate) last_metrics: Option<FrameMetrics>,
}

impl SessionContext {
    pub fn new(config: &DetectorConfig) -> Self {
        let auto = AutoCalibration::new(
            config.auto_calibration_frames,
            HysteresisMargins::from_config(config),
        );
        Self {
            baseline: Baseline::new(),
            thresholds: None,
            smoother: EmaSmoother::new(config.ema_alpha),
            detector: EventDetector::new(config),
            calibration: Some(CalibrationRun::Automatic(auto)),
            last_metrics: None,
        }
    }

    /// Installs a committed calibration: mouth baseline and band, eye
    /// baselines for manual runs, and restarts the EMA from the new mean.
    pub fn apply_calibration(&mut self, result: &CalibrationResult) {
        self.baseline.set_mouth(result.lip.mean, result.lip.sigma);
        if let Some((ear, ebh)) = result.eyes {
            self.baseline.set_eyes(ear, ebh);
        }
        self.thresholds = Some(result.lip.thresholds);
        self.smoother.reset_to(result.lip.mean);
    }
}
