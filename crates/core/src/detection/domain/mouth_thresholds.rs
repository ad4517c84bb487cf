/// Absolute open/close levels for the mouth signal.
///
/// Both levels exist together or not at all, and `close < open` always
/// holds so the gap between them forms the hysteresis band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouthThresholds {
    open: f64,
    close: f64,
}

impl MouthThresholds {
    /// Returns `None` unless `close < open` and both are finite.
    pub fn new(open: f64, close: f64) -> Option<Self> {
        (open.is_finite() && close.is_finite() && close < open).then_some(Self { open, close })
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn close(&self) -> f64 {
        self.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_band() {
        let t = MouthThresholds::new(0.014, 0.012).unwrap();
        assert_eq!(t.open(), 0.014);
        assert_eq!(t.close(), 0.012);
    }

    #[rstest]
    #[case::equal(0.01, 0.01)]
    #[case::inverted(0.01, 0.02)]
    #[case::nan(f64::NAN, 0.01)]
    #[case::infinite(f64::INFINITY, 0.01)]
    fn test_rejects_invalid_band(#[case] open: f64, #[case] close: f64) {
        assert!(MouthThresholds::new(open, close).is_none());
    }
}
