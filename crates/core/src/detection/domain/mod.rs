pub mod baseline;
pub mod cooldown;
pub mod event_detector;
pub mod gesture_counters;
pub mod mouth_gesture;
pub mod mouth_thresholds;
pub mod relative_gesture;
pub mod signal_smoother;
