use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::domain::landmark_layout::LandmarkLayout;
use crate::shared::constants::*;
use crate::shared::gesture::GestureKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Tuning for metric extraction, calibration and event detection.
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub ear_ratio: f64,
    pub ebh_ratio: f64,
    pub ema_alpha: f64,
    pub mouth_confirm_frames: u32,
    pub blink_cooldown_ms: u64,
    pub mouth_cooldown_ms: u64,
    pub brow_cooldown_ms: u64,
    pub auto_calibration_frames: usize,
    pub manual_calibration_frames: usize,
    pub manual_min_samples: usize,
    pub open_sigma_multiplier: f64,
    pub close_sigma_multiplier: f64,
    pub open_min_delta: f64,
    pub close_min_delta: f64,
    pub epsilon: f64,
    pub layout: LandmarkLayout,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            ear_ratio: EAR_RATIO,
            ebh_ratio: EBH_RATIO,
            ema_alpha: EMA_ALPHA,
            mouth_confirm_frames: MOUTH_CONFIRM_FRAMES,
            blink_cooldown_ms: BLINK_COOLDOWN_MS,
            mouth_cooldown_ms: MOUTH_COOLDOWN_MS,
            brow_cooldown_ms: BROW_COOLDOWN_MS,
            auto_calibration_frames: AUTO_CAL_FRAMES,
            manual_calibration_frames: MANUAL_CAL_FRAMES,
            manual_min_samples: MANUAL_CAL_MIN_SAMPLES,
            open_sigma_multiplier: OPEN_SIGMA_MULTIPLIER,
            close_sigma_multiplier: CLOSE_SIGMA_MULTIPLIER,
            open_min_delta: OPEN_MIN_DELTA,
            close_min_delta: CLOSE_MIN_DELTA,
            epsilon: EPSILON,
            layout: LandmarkLayout::default(),
        }
    }
}

impl DetectorConfig {
    pub fn cooldown(&self, kind: GestureKind) -> Duration {
        let ms = match kind {
            GestureKind::Blink => self.blink_cooldown_ms,
            GestureKind::MouthOpen => self.mouth_cooldown_ms,
            GestureKind::EyebrowRaise => self.brow_cooldown_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ema_alpha > 0.0 && self.ema_alpha <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "ema_alpha must be in (0, 1], got {}",
                self.ema_alpha
            )));
        }
        if !(self.ear_ratio > 0.0 && self.ear_ratio < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "ear_ratio must be in (0, 1), got {}",
                self.ear_ratio
            )));
        }
        if self.ebh_ratio <= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "ebh_ratio must be greater than 1, got {}",
                self.ebh_ratio
            )));
        }
        if self.mouth_confirm_frames == 0 {
            return Err(ConfigError::Invalid(
                "mouth_confirm_frames must be at least 1".into(),
            ));
        }
        if self.auto_calibration_frames == 0 {
            return Err(ConfigError::Invalid(
                "auto_calibration_frames must be at least 1".into(),
            ));
        }
        if self.close_min_delta < 0.0 || self.close_min_delta >= self.open_min_delta {
            return Err(ConfigError::Invalid(format!(
                "close_min_delta must be in [0, open_min_delta), got {} vs {}",
                self.close_min_delta, self.open_min_delta
            )));
        }
        if self.close_sigma_multiplier < 0.0
            || self.close_sigma_multiplier >= self.open_sigma_multiplier
        {
            return Err(ConfigError::Invalid(format!(
                "close_sigma_multiplier must be in [0, open_sigma_multiplier), got {} vs {}",
                self.close_sigma_multiplier, self.open_sigma_multiplier
            )));
        }
        if self.epsilon <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.layout.max_index() > MAX_LANDMARK_INDEX {
            return Err(ConfigError::Invalid(format!(
                "layout index {} exceeds the maximum of {MAX_LANDMARK_INDEX}",
                self.layout.max_index()
            )));
        }
        Ok(())
    }

    /// `<config_dir>/FaceCount/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the user config, falling back to defaults when none exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        fs::write(path, json).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_defaults_match_constants() {
        let config = DetectorConfig::default();
        assert_relative_eq!(config.ear_ratio, 0.75);
        assert_relative_eq!(config.ebh_ratio, 1.25);
        assert_relative_eq!(config.ema_alpha, 0.25);
        assert_eq!(config.mouth_confirm_frames, 3);
        assert_eq!(config.auto_calibration_frames, 60);
        assert_eq!(config.manual_calibration_frames, 75);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case::blink(GestureKind::Blink, 180)]
    #[case::mouth(GestureKind::MouthOpen, 250)]
    #[case::brow(GestureKind::EyebrowRaise, 350)]
    fn test_cooldowns(#[case] kind: GestureKind, #[case] ms: u64) {
        assert_eq!(DetectorConfig::default().cooldown(kind), Duration::from_millis(ms));
    }

    #[rstest]
    #[case::alpha_zero(DetectorConfig { ema_alpha: 0.0, ..Default::default() })]
    #[case::alpha_above_one(DetectorConfig { ema_alpha: 1.5, ..Default::default() })]
    #[case::ear_ratio_one(DetectorConfig { ear_ratio: 1.0, ..Default::default() })]
    #[case::ebh_ratio_below_one(DetectorConfig { ebh_ratio: 0.9, ..Default::default() })]
    #[case::no_confirm_frames(DetectorConfig { mouth_confirm_frames: 0, ..Default::default() })]
    #[case::no_auto_frames(DetectorConfig { auto_calibration_frames: 0, ..Default::default() })]
    #[case::inverted_floors(DetectorConfig { close_min_delta: 0.005, ..Default::default() })]
    #[case::inverted_multipliers(DetectorConfig {
        close_sigma_multiplier: 4.0,
        ..Default::default()
    })]
    #[case::zero_epsilon(DetectorConfig { epsilon: 0.0, ..Default::default() })]
    fn test_validate_rejects(#[case] config: DetectorConfig) {
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[rstest]
    #[case::huge_brow(usize::MAX)]
    #[case::just_past_bound(MAX_LANDMARK_INDEX + 1)]
    fn test_validate_rejects_out_of_range_layout(#[case] index: usize) {
        let mut config = DetectorConfig::default();
        config.layout.left_brow = index;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_accepts_layout_at_bound() {
        let mut config = DetectorConfig::default();
        config.layout.right_brow = MAX_LANDMARK_INDEX;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_rejects_out_of_range_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = DetectorConfig::default();
        config.layout.mouth.top = 100_000;
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        assert!(matches!(
            DetectorConfig::load_from(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = DetectorConfig {
            blink_cooldown_ms: 200,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        let loaded = DetectorConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "mouth_confirm_frames": 5 }"#).unwrap();
        let loaded = DetectorConfig::load_from(&path).unwrap();
        assert_eq!(loaded.mouth_confirm_frames, 5);
        assert_eq!(loaded.blink_cooldown_ms, 180);
        assert_eq!(loaded.layout, LandmarkLayout::media_pipe());
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = DetectorConfig::load_from(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_from_malformed_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            DetectorConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "ema_alpha": 2.0 }"#).unwrap();
        assert!(matches!(
            DetectorConfig::load_from(&path),
            Err(ConfigError::Invalid(_))
        ));
    }
}
