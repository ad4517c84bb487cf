use crate::calibration::domain::calibration_outcome::{
    CalibrationMode, CalibrationOutcome, CalibrationResult,
};
use crate::calibration::domain::threshold_derivation::{derive_lip_calibration, HysteresisMargins};

/// Collects raw mouth samples over a fixed number of face frames right
/// after session start, then derives the mouth band once.
///
/// Assumes the mouth is closed while sampling; nothing checks this.
pub struct AutoCalibration {
    target: usize,
    margins: HysteresisMargins,
    samples: Vec<f64>,
}

impl AutoCalibration {
    pub fn new(target: usize, margins: HysteresisMargins) -> Self {
        Self {
            target: target.max(1),
            margins,
            samples: Vec::with_capacity(target),
        }
    }

    pub fn collected(&self) -> usize {
        self.samples.len()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Adds one raw LIPAN sample; returns the outcome once the target is reached.
    pub fn push(&mut self, lipan: f64) -> Option<CalibrationOutcome> {
        self.samples.push(lipan);
        if self.samples.len() < self.target {
            return None;
        }
        let samples = self.samples.len();
        Some(match derive_lip_calibration(&self.samples, &self.margins) {
            Some(lip) => CalibrationOutcome::Committed(CalibrationResult {
                mode: CalibrationMode::Automatic,
                samples,
                lip,
                eyes: None,
            }),
            None => CalibrationOutcome::Discarded {
                mode: CalibrationMode::Automatic,
                samples,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_completes_exactly_at_target() {
        let mut cal = AutoCalibration::new(60, HysteresisMargins::default());
        for _ in 0..59 {
            assert!(cal.push(0.01).is_none());
        }
        assert_eq!(cal.collected(), 59);
        let outcome = cal.push(0.01).unwrap();
        let CalibrationOutcome::Committed(result) = outcome else {
            panic!("expected commit, got {outcome:?}");
        };
        assert_eq!(result.mode, CalibrationMode::Automatic);
        assert_eq!(result.samples, 60);
        assert_eq!(result.eyes, None);
        assert_relative_eq!(result.lip.thresholds.open(), 0.014, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_target_clamps_to_one() {
        let mut cal = AutoCalibration::new(0, HysteresisMargins::default());
        assert_eq!(cal.target(), 1);
        assert!(cal.push(0.02).is_some());
    }

    #[test]
    fn test_unusable_samples_are_discarded() {
        let mut cal = AutoCalibration::new(2, HysteresisMargins::default());
        cal.push(f64::NAN);
        assert_eq!(
            cal.push(0.01),
            Some(CalibrationOutcome::Discarded {
                mode: CalibrationMode::Automatic,
                samples: 2
            })
        );
    }
}
