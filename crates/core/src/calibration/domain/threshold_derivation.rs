//! Mean + sigma of closed-mouth samples to an absolute hysteresis band.
//!
//! `open = mean + max(open_floor, open_multiplier * sigma)` and
//! `close = mean + max(close_floor, close_multiplier * sigma)`. The floors
//! keep the band open even for a nearly noiseless sample.

use crate::detection::domain::mouth_thresholds::MouthThresholds;
use crate::shared::config::DetectorConfig;
use crate::shared::constants::*;
use crate::shared::geometry::{mean, sample_std};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HysteresisMargins {
    pub open_multiplier: f64,
    pub close_multiplier: f64,
    pub open_floor: f64,
    pub close_floor: f64,
}

impl HysteresisMargins {
    pub fn from_config(config: &DetectorConfig) -> Self {
        Self {
            open_multiplier: config.open_sigma_multiplier,
            close_multiplier: config.close_sigma_multiplier,
            open_floor: config.open_min_delta,
            close_floor: config.close_min_delta,
        }
    }
}

impl Default for HysteresisMargins {
    fn default() -> Self {
        Self {
            open_multiplier: OPEN_SIGMA_MULTIPLIER,
            close_multiplier: CLOSE_SIGMA_MULTIPLIER,
            open_floor: OPEN_MIN_DELTA,
            close_floor: CLOSE_MIN_DELTA,
        }
    }
}

/// Result of deriving mouth thresholds from a sample run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LipCalibration {
    pub mean: f64,
    pub sigma: f64,
    pub thresholds: MouthThresholds,
}

/// Derives the mouth baseline and band. Returns `None` only when the
/// margins cannot produce `close < open` or the samples are not finite.
pub fn derive_lip_calibration(
    samples: &[f64],
    margins: &HysteresisMargins,
) -> Option<LipCalibration> {
    let m = mean(samples);
    let sigma = sample_std(samples);
    let open = m + margins.open_floor.max(margins.open_multiplier * sigma);
    let close = m + margins.close_floor.max(margins.close_multiplier * sigma);
    MouthThresholds::new(open, close).map(|thresholds| LipCalibration {
        mean: m,
        sigma,
        thresholds,
    })
}
