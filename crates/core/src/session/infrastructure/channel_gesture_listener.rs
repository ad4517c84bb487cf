use crossbeam_channel::{Sender, TrySendError};

use crate::session::domain::gesture_listener::GestureListener;
use crate::shared::gesture::GestureEvent;

/// Forwards gestures to another thread over a crossbeam channel.
///
/// Fire-and-forget: uses `try_send`, so a full or disconnected channel
/// drops the event with a warning instead of stalling the frame handler.
pub struct ChannelGestureListener {
    tx: Sender<GestureEvent>,
    dropped: usize,
}

impl ChannelGestureListener {
    pub fn new(tx: Sender<GestureEvent>) -> Self {
        Self { tx, dropped: 0 }
    }

    /// Number of events that could not be delivered.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl GestureListener for ChannelGestureListener {
    fn on_gesture(&mut self, event: &GestureEvent) {
        match self.tx.try_send(event.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(e)) => {
                self.dropped += 1;
                log::warn!("Gesture channel full, dropping {} #{}", e.kind, e.count);
            }
            Err(TrySendError::Disconnected(e)) => {
                self.dropped += 1;
                log::warn!("Gesture receiver gone, dropping {} #{}", e.kind, e.count);
            }
        }
    }
}
