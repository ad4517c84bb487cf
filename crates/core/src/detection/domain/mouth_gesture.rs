use std::time::Duration;

use crate::detection::domain::cooldown::Cooldown;
use crate::detection::domain::mouth_thresholds::MouthThresholds;

/// Hysteresis state machine for the mouth signal.
///
/// Two saturating counters track consecutive evaluations above the open
/// level and below the close level. In the dead zone between them both
/// counters decay by one instead of resetting, so brief flicker neither
/// confirms nor cancels a transition.
pub struct MouthGesture {
    confirm_frames: u32,
    frames_above_open: u32,
    frames_below_close: u32,
    open: bool,
    cooldown: Cooldown,
}

impl MouthGesture {
    pub fn new(confirm_frames: u32, cooldown: Duration) -> Self {
        Self {
            confirm_frames,
            frames_above_open: 0,
            frames_below_close: 0,
            open: false,
            cooldown: Cooldown::new(cooldown),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn frames_above_open(&self) -> u32 {
        self.frames_above_open
    }

    pub fn frames_below_close(&self) -> u32 {
        self.frames_below_close
    }

    pub fn last_fired(&self) -> Option<Duration> {
        self.cooldown.last_fired()
    }

    /// Evaluates one frame. Without thresholds nothing changes. Returns
    /// true when a mouth-open event fires.
    pub fn update(
        &mut self,
        signal: f64,
        thresholds: Option<&MouthThresholds>,
        now: Duration,
    ) -> bool {
        let Some(t) = thresholds else {
            return false;
        };

        if signal > t.open() {
            self.frames_above_open = self.frames_above_open.saturating_add(1);
            self.frames_below_close = 0;
        } else if signal < t.close() {
            self.frames_below_close = self.frames_below_close.saturating_add(1);
            self.frames_above_open = 0;
        } else {
            self.frames_above_open = self.frames_above_open.saturating_sub(1);
            self.frames_below_close = self.frames_below_close.saturating_sub(1);
        }

        let mut fired = false;
        if !self.open
            && self.frames_above_open >= self.confirm_frames
            && self.cooldown.ready(now)
        {
            self.open = true;
            self.cooldown.mark(now);
            fired = true;
        }
        if self.open && self.frames_below_close >= self.confirm_frames {
            self.open = false;
        }
        fired
    }
}
