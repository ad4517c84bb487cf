use crate::session::domain::gesture_listener::GestureListener;
use crate::shared::gesture::GestureEvent;

/// Reports every gesture through the `log` facade at info level.
#[derive(Default)]
pub struct LoggingGestureListener;

impl LoggingGestureListener {
    pub fn new() -> Self {
        Self
    }
}

impl GestureListener for LoggingGestureListener {
    fn on_gesture(&mut self, event: &GestureEvent) {
        log::info!(
            "{} #{} at {:.0}ms",
            event.kind,
            event.count,
            event.timestamp.as_secs_f64() * 1000.0
        );
    }
}
