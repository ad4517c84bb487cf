use crate::calibration::domain::calibration_outcome::{
    CalibrationMode, CalibrationOutcome, CalibrationResult,
};
use crate::calibration::domain::threshold_derivation::{derive_lip_calibration, HysteresisMargins};
use crate::metrics::domain::face_metrics::Metrics;

/// On-demand calibration over up to `target` face frames.
///
/// Accumulates EAR/EBH sums and raw mouth samples. Commits only with more
/// than `min_samples` samples; otherwise the run is discarded and the
/// previous baseline stays authoritative.
pub struct ManualCalibration {
    target: usize,
    min_samples: usize,
    margins: HysteresisMargins,
    sum_ear: f64,
    sum_ebh: f64,
    lip_samples: Vec<f64>,
}

impl ManualCalibration {
    pub fn new(target: usize, min_samples: usize, margins: HysteresisMargins) -> Self {
        Self {
            target: target.max(1),
            min_samples,
            margins,
            sum_ear: 0.0,
            sum_ebh: 0.0,
            lip_samples: Vec::with_capacity(target),
        }
    }

    pub fn collected(&self) -> usize {
        self.lip_samples.len()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn push(&mut self, m: &Metrics) -> Option<CalibrationOutcome> {
        self.sum_ear += m.ear;
        self.sum_ebh += m.ebh;
        self.lip_samples.push(m.lipan);
        if self.lip_samples.len() < self.target {
            return None;
        }
        Some(self.finish())
    }

    fn finish(&self) -> CalibrationOutcome {
        let n = self.lip_samples.len();
        let discarded = CalibrationOutcome::Discarded {
            mode: CalibrationMode::Manual,
            samples: n,
        };
        if n <= self.min_samples {
            return discarded;
        }
        match derive_lip_calibration(&self.lip_samples, &self.margins) {
            Some(lip) => CalibrationOutcome::Committed(CalibrationResult {
                mode: CalibrationMode::Manual,
                samples: n,
                lip,
                eyes: Some((self.sum_ear / n as f64, self.sum_ebh / n as f64)),
            }),
            None => discarded,
        }
    }
}
