use crate::metrics::domain::face_metrics::Metrics;

/// Per-session reference values for each metric.
///
/// Fields are filled first-observation-wins by [`Baseline::ensure`] and are
/// only ever overwritten as a whole by a calibration pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Baseline {
    ear: Option<f64>,
    ebh: Option<f64>,
    lipan: Option<f64>,
    lipan_sigma: f64,
}

impl Baseline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ear(&self) -> Option<f64> {
        self.ear
    }

    pub fn ebh(&self) -> Option<f64> {
        self.ebh
    }

    pub fn lipan(&self) -> Option<f64> {
        self.lipan
    }

    pub fn lipan_sigma(&self) -> f64 {
        self.lipan_sigma
    }

    /// Fills each unset field from `m` when the reading is plausible:
    /// positive for EAR/EBH, non-negative for LIPAN.
    pub fn ensure(&mut self, m: &Metrics) {
        if self.ear.is_none() && m.ear > 0.0 {
            self.ear = Some(m.ear);
        }
        if self.ebh.is_none() && m.ebh > 0.0 {
            self.ebh = Some(m.ebh);
        }
        if self.lipan.is_none() && m.lipan >= 0.0 {
            self.lipan = Some(m.lipan);
        }
    }

    pub fn set_mouth(&mut self, mean: f64, sigma: f64) {
        self.lipan = Some(mean);
        self.lipan_sigma = sigma;
    }

    pub fn set_eyes(&mut self, ear: f64, ebh: f64) {
        self.ear = Some(ear);
        self.ebh = Some(ebh);
    }
}
