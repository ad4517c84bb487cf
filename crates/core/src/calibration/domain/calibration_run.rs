use crate::calibration::domain::auto_calibration::AutoCalibration;
use crate::calibration::domain::calibration_outcome::{
    CalibrationMode, CalibrationOutcome, CalibrationProgress,
};
use crate::calibration::domain::manual_calibration::ManualCalibration;
use crate::metrics::domain::face_metrics::Metrics;

/// The single in-flight calibration of a session, fed one face frame at a
/// time until its sample count is reached.
pub enum CalibrationRun {
    Automatic(AutoCalibration),
    Manual(ManualCalibration),
}

impl CalibrationRun {
    pub fn push(&mut self, m: &Metrics) -> Option<CalibrationOutcome> {
        match self {
            CalibrationRun::Automatic(cal) => cal.push(m.lipan),
            CalibrationRun::Manual(cal) => cal.push(m),
        }
    }

    pub fn progress(&self) -> CalibrationProgress {
        match self {
            CalibrationRun::Automatic(cal) => CalibrationProgress {
                mode: CalibrationMode::Automatic,
                collected: cal.collected(),
                target: cal.target(),
            },
            CalibrationRun::Manual(cal) => CalibrationProgress {
                mode: CalibrationMode::Manual,
                collected: cal.collected(),
                target: cal.target(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::domain::threshold_derivation::HysteresisMargins;

    #[test]
    fn test_automatic_ignores_eye_metrics() {
        let mut run =
            CalibrationRun::Automatic(AutoCalibration::new(2, HysteresisMargins::default()));
        run.push(&Metrics::new(0.3, 0.5, 0.01));
        assert_eq!(
            run.progress(),
            CalibrationProgress {
                mode: CalibrationMode::Automatic,
                collected: 1,
                target: 2
            }
        );
        let outcome = run.push(&Metrics::new(0.3, 0.5, 0.01)).unwrap();
        let CalibrationOutcome::Committed(result) = outcome else {
            panic!("expected commit");
        };
        assert_eq!(result.eyes, None);
    }

    #[test]
    fn test_manual_progress() {
        let mut run =
            CalibrationRun::Manual(ManualCalibration::new(75, 10, HysteresisMargins::default()));
        run.push(&Metrics::new(0.3, 0.5, 0.01));
        let p = run.progress();
        assert_eq!(p.mode, CalibrationMode::Manual);
        assert_eq!((p.collected, p.target), (1, 75));
    }
}
