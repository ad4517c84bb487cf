use crate::shared::gesture::GestureEvent;

/// Domain interface for observers of counter increments.
///
/// Called synchronously from the frame handler, once per fired gesture.
/// Implementations must return promptly and swallow their own failures.
pub trait GestureListener: Send {
    fn on_gesture(&mut self, event: &GestureEvent);
}

/// Listener that discards all events.
pub struct NullGestureListener;

impl GestureListener for NullGestureListener {
    fn on_gesture(&mut self, _event: &GestureEvent) {}
}
