pub mod gesture_listener;
