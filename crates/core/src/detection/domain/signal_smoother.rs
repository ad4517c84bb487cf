use crate::shared::constants::EMA_ALPHA;

/// Domain interface for temporal smoothing of a scalar signal.
pub trait SignalSmoother: Send {
    fn smooth(&mut self, value: f64) -> f64;

    fn value(&self) -> Option<f64>;

    /// Forget all history; the next sample seeds the filter.
    fn reset(&mut self);

    /// Restart from a known level instead of the next sample.
    fn reset_to(&mut self, value: f64);
}

/// EMA (Exponential Moving Average) smoother.
///
/// Formula: `ema[t] = alpha * current + (1 - alpha) * ema[t-1]`, seeded
/// with the first observation.
pub struct EmaSmoother {
    alpha: f64,
    state: Option<f64>,
}

impl EmaSmoother {
    pub fn new(alpha: f64) -> Self {
        Self { alpha, state: None }
    }
}

impl Default for EmaSmoother {
    fn default() -> Self {
        Self::new(EMA_ALPHA)
    }
}

impl SignalSmoother for EmaSmoother {
    fn smooth(&mut self, value: f64) -> f64 {
        let smoothed = match self.state {
            None => value,
            Some(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
        };
        self.state = Some(smoothed);
        smoothed
    }

    fn value(&self) -> Option<f64> {
        self.state
    }

    fn reset(&mut self) {
        self.state = None;
    }

    fn reset_to(&mut self, value: f64) {
        self.state = Some(value);
    }
}
