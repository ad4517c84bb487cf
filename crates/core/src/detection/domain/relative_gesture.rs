use std::time::Duration;

use crate::detection::domain::cooldown::Cooldown;

/// Which side of `baseline * ratio` counts as the gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Below,
    Above,
}

/// Two-state latch for gestures measured relative to a baseline
/// (blink, eyebrow raise).
///
/// Fires on entering the active state when the cooldown allows; clears
/// as soon as the condition stops holding, with no exit debounce.
pub struct RelativeGesture {
    crossing: Crossing,
    ratio: f64,
    active: bool,
    cooldown: Cooldown,
}

impl RelativeGesture {
    pub fn new(crossing: Crossing, ratio: f64, cooldown: Duration) -> Self {
        Self {
            crossing,
            ratio,
            active: false,
            cooldown: Cooldown::new(cooldown),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_fired(&self) -> Option<Duration> {
        self.cooldown.last_fired()
    }

    /// Non-positive baselines count as unset.
    pub fn holds(&self, value: f64, baseline: Option<f64>) -> bool {
        match baseline.filter(|b| *b > 0.0) {
            None => false,
            Some(b) => match self.crossing {
                Crossing::Below => value < b * self.ratio,
                Crossing::Above => value > b * self.ratio,
            },
        }
    }

    /// Evaluates one frame. Returns true when the gesture fires.
    pub fn update(&mut self, value: f64, baseline: Option<f64>, now: Duration) -> bool {
        let holds = self.holds(value, baseline);
        if holds && !self.active && self.cooldown.ready(now) {
            self.active = true;
            self.cooldown.mark(now);
            return true;
        }
        if !holds {
            self.active = false;
        }
        false
    }
}
