use std::fmt;

use crate::calibration::domain::threshold_derivation::LipCalibration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalibrationMode {
    /// Armed at session start; mouth samples only.
    Automatic,
    /// Requested on demand; also re-baselines EAR and EBH.
    Manual,
}

impl fmt::Display for CalibrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationMode::Automatic => write!(f, "automatic"),
            CalibrationMode::Manual => write!(f, "manual"),
        }
    }
}

/// A committed calibration, ready to be applied to the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationResult {
    pub mode: CalibrationMode,
    pub samples: usize,
    pub lip: LipCalibration,
    /// Mean EAR and EBH over the run; manual calibration only.
    pub eyes: Option<(f64, f64)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalibrationOutcome {
    Committed(CalibrationResult),
    /// Too few samples (or unusable ones); prior values stay in force.
    Discarded {
        mode: CalibrationMode,
        samples: usize,
    },
}

impl CalibrationOutcome {
    pub fn mode(&self) -> CalibrationMode {
        match self {
            CalibrationOutcome::Committed(r) => r.mode,
            CalibrationOutcome::Discarded { mode, .. } => *mode,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, CalibrationOutcome::Committed(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalibrationProgress {
    pub mode: CalibrationMode,
    pub collected: usize,
    pub target: usize,
}
