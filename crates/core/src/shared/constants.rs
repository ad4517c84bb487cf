/// Added to denominators so coincident landmarks never divide by zero.
pub const EPSILON: f64 = 1e-6;

/// Blink fires when EAR drops below `baseline * EAR_RATIO`.
pub const EAR_RATIO: f64 = 0.75;
/// Eyebrow raise fires when EBH rises above `baseline * EBH_RATIO`.
pub const EBH_RATIO: f64 = 1.25;

pub const EMA_ALPHA: f64 = 0.25;

/// Consecutive confirming evaluations required to open or close the mouth.
pub const MOUTH_CONFIRM_FRAMES: u32 = 3;

pub const BLINK_COOLDOWN_MS: u64 = 180;
pub const MOUTH_COOLDOWN_MS: u64 = 250;
pub const BROW_COOLDOWN_MS: u64 = 350;

pub const AUTO_CAL_FRAMES: usize = 60;
pub const MANUAL_CAL_FRAMES: usize = 75;
/// Manual calibration commits only with strictly more samples than this.
pub const MANUAL_CAL_MIN_SAMPLES: usize = 10;

pub const OPEN_SIGMA_MULTIPLIER: f64 = 3.0;
pub const CLOSE_SIGMA_MULTIPLIER: f64 = 1.5;
pub const OPEN_MIN_DELTA: f64 = 0.004;
pub const CLOSE_MIN_DELTA: f64 = 0.002;

/// Upper bound for any configured landmark index. Face meshes in use
/// stay well under it (MediaPipe: 478 with irises).
pub const MAX_LANDMARK_INDEX: usize = 1023;

pub const CONFIG_DIR_NAME: &str = "FaceCount";
pub const CONFIG_FILE_NAME: &str = "config.json";
