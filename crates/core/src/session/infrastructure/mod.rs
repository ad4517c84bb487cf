pub mod channel_gesture_listener;
pub mod logging_gesture_listener;
