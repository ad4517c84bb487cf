/// Scalar measurements derived from one landmark frame.
///
/// - `ear`: eye aspect ratio, averaged over both eyes. Drops on a blink.
/// - `ebh`: eyebrow height over eye width, averaged over both brows. Rises on a raise.
/// - `lipan`: mouth quadrilateral area over squared mouth width. Rises as the mouth opens.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    pub ear: f64,
    pub ebh: f64,
    pub lipan: f64,
}

impl Metrics {
    pub fn new(ear: f64, ebh: f64, lipan: f64) -> Self {
        Self { ear, ebh, lipan }
    }
}

/// Metrics paired with the smoothed mouth signal for the same frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMetrics {
    pub raw: Metrics,
    pub lipan_ema: Option<f64>,
}

impl FrameMetrics {
    pub fn new(raw: Metrics, lipan_ema: Option<f64>) -> Self {
        Self { raw, lipan_ema }
    }

    /// Smoothed mouth signal, or the raw one when no smoothed value exists.
    pub fn mouth_signal(&self) -> f64 {
        self.lipan_ema.unwrap_or(self.raw.lipan)
    }
}
