use std::time::Duration;

/// Minimum stream time between two firings of the same gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct Cooldown {
    period: Duration,
    last_fired: Option<Duration>,
}

impl Cooldown {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_fired: None,
        }
    }

    /// True when nothing has fired yet or strictly more than `period` has
    /// elapsed since the last firing.
    pub fn ready(&self, now: Duration) -> bool {
        match self.last_fired {
            None => true,
            Some(last) => now.saturating_sub(last) > self.period,
        }
    }

    pub fn mark(&mut self, now: Duration) {
        self.last_fired = Some(now);
    }

    pub fn last_fired(&self) -> Option<Duration> {
        self.last_fired
    }
}
