//! Per-frame conversion of continuous metrics into counted gesture events.
//!
//! Three independent sub-machines run on every frame with a face:
//! blink (EAR below baseline ratio), mouth (smoothed LIPAN against the
//! calibrated hysteresis band) and eyebrow (EBH above baseline ratio).
//! Blink and eyebrow release immediately; the mouth needs confirmed frames
//! both to open and to close.

use std::time::Duration;

use crate::detection::domain::baseline::Baseline;
use crate::detection::domain::gesture_counters::GestureCounters;
use crate::detection::domain::mouth_gesture::MouthGesture;
use crate::detection::domain::mouth_thresholds::MouthThresholds;
use crate::detection::domain::relative_gesture::{Crossing, RelativeGesture};
use crate::metrics::domain::face_metrics::FrameMetrics;
use crate::shared::config::DetectorConfig;
use crate::shared::gesture::{GestureEvent, GestureKind};

/// Read-only view of the latches and mouth counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventState {
    pub eye_closed: bool,
    pub mouth_open: bool,
    pub brow_raised: bool,
    pub frames_above_open: u32,
    pub frames_below_close: u32,
}

pub struct EventDetector {
    blink: RelativeGesture,
    mouth: MouthGesture,
    brow: RelativeGesture,
}

impl EventDetector {
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            blink: RelativeGesture::new(
                Crossing::Below,
                config.ear_ratio,
                config.cooldown(GestureKind::Blink),
            ),
            mouth: MouthGesture::new(
                config.mouth_confirm_frames,
                config.cooldown(GestureKind::MouthOpen),
            ),
            brow: RelativeGesture::new(
                Crossing::Above,
                config.ebh_ratio,
                config.cooldown(GestureKind::EyebrowRaise),
            ),
        }
    }

    /// Runs all three sub-machines on one frame, recording every firing in
    /// `counters`. Events come back in blink, mouth, eyebrow order.
    pub fn evaluate(
        &mut self,
        metrics: &FrameMetrics,
        baseline: &Baseline,
        thresholds: Option<&MouthThresholds>,
        now: Duration,
        counters: &mut GestureCounters,
    ) -> Vec<GestureEvent> {
        let mut fired = Vec::new();
        if self.blink.update(metrics.raw.ear, baseline.ear(), now) {
            fired.push(GestureKind::Blink);
        }
        if self.mouth.update(metrics.mouth_signal(), thresholds, now) {
            fired.push(GestureKind::MouthOpen);
        }
        if self.brow.update(metrics.raw.ebh, baseline.ebh(), now) {
            fired.push(GestureKind::EyebrowRaise);
        }

        fired
            .into_iter()
            .map(|kind| GestureEvent {
                kind,
                count: counters.increment(kind),
                timestamp: now,
            })
            .collect()
    }

    pub fn state(&self) -> EventState {
        EventState {
            eye_closed: self.blink.is_active(),
            mouth_open: self.mouth.is_open(),
            brow_raised: self.brow.is_active(),
            frames_above_open: self.mouth.frames_above_open(),
            frames_below_close: self.mouth.frames_below_close(),
        }
    }

    pub fn last_fired(&self, kind: GestureKind) -> Option<Duration> {
        match kind {
            GestureKind::Blink => self.blink.last_fired(),
            GestureKind::MouthOpen => self.mouth.last_fired(),
            GestureKind::EyebrowRaise => self.brow.last_fired(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::domain::face_metrics::Metrics;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn calibrated_baseline() -> Baseline {
        let mut b = Baseline::new();
        b.set_eyes(0.30, 0.50);
        b.set_mouth(0.01, 0.0);
        b
    }

    fn frame(ear: f64, ebh: f64, lipan_ema: f64) -> FrameMetrics {
        FrameMetrics::new(Metrics::new(ear, ebh, lipan_ema), Some(lipan_ema))
    }

    #[test]
    fn test_blink_scenario() {
        let mut d = EventDetector::new(&DetectorConfig::default());
        let mut counters = GestureCounters::new();
        let b = calibrated_baseline();
        let mut fired_at = Vec::new();
        for (ear, t) in [(0.30, 0), (0.20, 50), (0.20, 100), (0.32, 300)] {
            let events = d.evaluate(&frame(ear, 0.5, 0.01), &b, None, ms(t), &mut counters);
            fired_at.extend(events.iter().map(|e| e.timestamp));
            if t == 100 {
                assert!(d.state().eye_closed);
            }
        }
        assert_eq!(fired_at, vec![ms(50)]);
        assert_eq!(counters.blink, 1);
        assert!(!d.state().eye_closed);
        assert_eq!(d.last_fired(GestureKind::Blink), Some(ms(50)));
    }

    #[test]
    fn test_mouth_uses_smoothed_signal() {
        let mut d = EventDetector::new(&DetectorConfig::default());
        let mut counters = GestureCounters::new();
        let b = calibrated_baseline();
        let t = MouthThresholds::new(0.014, 0.012).unwrap();
        // Raw is wide open but the smoothed value sits below close.
        let m = FrameMetrics::new(Metrics::new(0.3, 0.5, 0.09), Some(0.011));
        for i in 0..5 {
            assert!(d.evaluate(&m, &b, Some(&t), ms(i * 100), &mut counters).is_empty());
        }
        assert_eq!(d.state().frames_below_close, 5);
    }

    #[test]
    fn test_simultaneous_gestures_fire_together() {
        let mut d = EventDetector::new(&DetectorConfig::default());
        let mut counters = GestureCounters::new();
        let b = calibrated_baseline();
        let t = MouthThresholds::new(0.014, 0.012).unwrap();
        let mut all = Vec::new();
        for i in 0..3 {
            all.extend(d.evaluate(&frame(0.1, 0.9, 0.05), &b, Some(&t), ms(i * 10), &mut counters));
        }
        let kinds: Vec<_> = all.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![GestureKind::Blink, GestureKind::EyebrowRaise, GestureKind::MouthOpen]
        );
        assert_eq!(counters.total(), 3);
        assert_eq!(all[2].count, 1);
    }

    #[test]
    fn test_unset_baseline_and_thresholds_fire_nothing() {
        let mut d = EventDetector::new(&DetectorConfig::default());
        let mut counters = GestureCounters::new();
        let events = d.evaluate(
            &frame(0.0, 5.0, 1.0),
            &Baseline::new(),
            None,
            ms(0),
            &mut counters,
        );
        assert!(events.is_empty());
        assert_eq!(d.state(), EventState::default());
    }

    #[test]
    fn test_counts_accumulate_across_events() {
        let mut d = EventDetector::new(&DetectorConfig::default());
        let mut counters = GestureCounters::new();
        let b = calibrated_baseline();
        let mut t_ms = 0;
        let mut last = None;
        for _ in 0..3 {
            last = d
                .evaluate(&frame(0.1, 0.5, 0.01), &b, None, ms(t_ms), &mut counters)
                .pop();
            d.evaluate(&frame(0.3, 0.5, 0.01), &b, None, ms(t_ms + 100), &mut counters);
            t_ms += 200;
        }
        assert_eq!(last.map(|e| e.count), Some(3));
        assert_eq!(counters.blink, 3);
    }
}
