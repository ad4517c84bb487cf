use serde::{Deserialize, Serialize};

use crate::shared::gesture::GestureKind;

/// Cumulative gesture counts. Monotonic until an explicit [`reset`](Self::reset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureCounters {
    pub blink: u64,
    pub mouth_open: u64,
    pub eyebrow_raise: u64,
}

impl GestureCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: GestureKind) -> u64 {
        match kind {
            GestureKind::Blink => self.blink,
            GestureKind::MouthOpen => self.mouth_open,
            GestureKind::EyebrowRaise => self.eyebrow_raise,
        }
    }

    /// Increments the counter for `kind` and returns its new value.
    pub(crate) fn increment(&mut self, kind: GestureKind) -> u64 {
        let slot = match kind {
            GestureKind::Blink => &mut self.blink,
            GestureKind::MouthOpen => &mut self.mouth_open,
            GestureKind::EyebrowRaise => &mut self.eyebrow_raise,
        };
        *slot += 1;
        *slot
    }

    pub fn total(&self) -> u64 {
        self.blink + self.mouth_open + self.eyebrow_raise
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
