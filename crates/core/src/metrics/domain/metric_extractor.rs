//! Landmark frame to scalar metrics (EAR, EBH, LIPAN).
//!
//! EAR and EBH are ratios of distances in normalized space. LIPAN scales
//! the mouth points into stream pixel space first, so the measure follows
//! the camera's aspect ratio; it stays invariant to face size either way.

use crate::metrics::domain::face_metrics::Metrics;
use crate::metrics::domain::landmark_layout::{EyeIndices, LandmarkLayout};
use crate::metrics::domain::quad_area::QuadAreaCalculator;
use crate::shared::constants::EPSILON;
use crate::shared::geometry::{dist, midpoint, Point};
use crate::shared::landmark_frame::LandmarkFrame;
use crate::shared::stream_metadata::StreamMetadata;

pub struct MetricExtractor {
    layout: LandmarkLayout,
    epsilon: f64,
    scale: (f64, f64),
    area: Option<Box<dyn QuadAreaCalculator>>,
}

impl MetricExtractor {
    /// Without an area calculator, LIPAN reports 0.
    pub fn new(layout: LandmarkLayout, area: Option<Box<dyn QuadAreaCalculator>>) -> Self {
        Self {
            layout,
            epsilon: EPSILON,
            scale: (1.0, 1.0),
            area,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn set_stream(&mut self, metadata: &StreamMetadata) {
        self.scale = metadata.scale();
    }

    pub fn set_area_calculator(&mut self, area: Box<dyn QuadAreaCalculator>) {
        self.area = Some(area);
    }

    pub fn has_area_calculator(&self) -> bool {
        self.area.is_some()
    }

    pub fn layout(&self) -> &LandmarkLayout {
        &self.layout
    }

    /// Whether every configured index is addressable in `frame`.
    pub fn accepts(&self, frame: &LandmarkFrame) -> bool {
        frame.len() >= self.layout.required_len()
    }

    /// Callers must ensure [`accepts`](Self::accepts) holds for `frame`.
    pub fn extract(&self, frame: &LandmarkFrame) -> Metrics {
        let ear = (self.eye_aspect_ratio(frame, &self.layout.left_eye)
            + self.eye_aspect_ratio(frame, &self.layout.right_eye))
            / 2.0;
        Metrics::new(ear, self.eyebrow_height(frame), self.mouth_area(frame))
    }

    /// Mean of the two lid gaps over the corner-to-corner width.
    pub fn eye_aspect_ratio(&self, frame: &LandmarkFrame, eye: &EyeIndices) -> f64 {
        let vertical = (dist(frame.at(eye.top_1), frame.at(eye.bottom_1))
            + dist(frame.at(eye.top_2), frame.at(eye.bottom_2)))
            / 2.0;
        let horizontal = dist(frame.at(eye.corner_a), frame.at(eye.corner_b));
        vertical / (horizontal + self.epsilon)
    }

    pub fn eyebrow_height(&self, frame: &LandmarkFrame) -> f64 {
        let left = self.brow_height(frame, frame.at(self.layout.left_brow), &self.layout.left_eye);
        let right =
            self.brow_height(frame, frame.at(self.layout.right_brow), &self.layout.right_eye);
        (left + right) / 2.0
    }

    fn brow_height(&self, frame: &LandmarkFrame, brow: Point, eye: &EyeIndices) -> f64 {
        let a = frame.at(eye.corner_a);
        let b = frame.at(eye.corner_b);
        let center = midpoint(a, b);
        (brow.y - center.y).abs() / (dist(a, b) + self.epsilon)
    }

    pub fn mouth_area(&self, frame: &LandmarkFrame) -> f64 {
        let Some(area) = self.area.as_ref() else {
            return 0.0;
        };
        let (sx, sy) = self.scale;
        let quad = self.layout.mouth.polygon().map(|i| frame.at(i).scaled(sx, sy));
        let [left, _, right, _] = quad;
        let width = dist(left, right) + self.epsilon;
        area.area(&quad).abs() / (width * width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::infrastructure::shoelace_area::ShoelaceArea;
    use crate::shared::test_faces::{face, neutral_face};
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn extractor() -> MetricExtractor {
        MetricExtractor::new(LandmarkLayout::media_pipe(), Some(Box::new(ShoelaceArea::new())))
    }

    #[rstest]
    #[case::open(0.30, 0.50, 0.01)]
    #[case::blinking(0.12, 0.50, 0.01)]
    #[case::brow_raised(0.30, 0.80, 0.01)]
    #[case::mouth_open(0.30, 0.50, 0.08)]
    fn test_extract_recovers_synthetic_metrics(
        #[case] ear: f64,
        #[case] ebh: f64,
        #[case] lipan: f64,
    ) {
        let m = extractor().extract(&face(ear, ebh, lipan));
        assert_relative_eq!(m.ear, ear, max_relative = 1e-4);
        assert_relative_eq!(m.ebh, ebh, max_relative = 1e-4);
        assert_relative_eq!(m.lipan, lipan, max_relative = 1e-4);
    }

    #[test]
    fn test_ear_invariant_to_horizontal_mirroring() {
        let ex = extractor();
        let frame = face(0.27, 0.5, 0.01);
        let mirrored = frame.mirrored();
        let layout = *ex.layout();
        for eye in [layout.left_eye, layout.right_eye] {
            assert_relative_eq!(
                ex.eye_aspect_ratio(&frame, &eye),
                ex.eye_aspect_ratio(&mirrored, &eye),
                epsilon = 1e-12
            );
        }
        assert_relative_eq!(ex.extract(&frame).ear, ex.extract(&mirrored).ear, epsilon = 1e-12);
    }

    #[test]
    fn test_smaller_lid_gap_lowers_ear() {
        let ex = extractor();
        assert!(ex.extract(&face(0.1, 0.5, 0.01)).ear < ex.extract(&face(0.3, 0.5, 0.01)).ear);
    }

    #[test]
    fn test_lipan_is_scale_invariant() {
        // Halving every coordinate about the origin shrinks the face but
        // keeps mouth area over width squared unchanged.
        let ex = extractor();
        let frame = face(0.3, 0.5, 0.05);
        let shrunk =
            LandmarkFrame::new(frame.points().iter().map(|p| p.scaled(0.5, 0.5)).collect());
        assert_relative_eq!(
            ex.extract(&frame).lipan,
            ex.extract(&shrunk).lipan,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_missing_area_calculator_reports_zero() {
        let ex = MetricExtractor::new(LandmarkLayout::media_pipe(), None);
        assert!(!ex.has_area_calculator());
        let m = ex.extract(&face(0.3, 0.5, 0.08));
        assert_eq!(m.lipan, 0.0);
        assert!(m.ear > 0.0);
    }

    #[test]
    fn test_area_calculator_can_arrive_later() {
        let mut ex = MetricExtractor::new(LandmarkLayout::media_pipe(), None);
        ex.set_area_calculator(Box::new(ShoelaceArea::new()));
        assert_relative_eq!(ex.extract(&face(0.3, 0.5, 0.08)).lipan, 0.08, max_relative = 1e-4);
    }

    #[test]
    fn test_coincident_points_stay_finite() {
        let frame = LandmarkFrame::new(vec![Point::new(0.5, 0.5); 468]);
        let m = extractor().extract(&frame);
        assert_eq!(m, Metrics::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_stream_scale_changes_lipan_with_aspect_ratio() {
        let mut ex = extractor();
        let frame = face(0.3, 0.5, 0.05);
        let square = ex.extract(&frame).lipan;
        ex.set_stream(&StreamMetadata::new(960, 540, 30.0));
        let wide = ex.extract(&frame).lipan;
        // Horizontal mouth stretched by 960, vertical opening by 540.
        assert_relative_eq!(wide, square * 540.0 / 960.0, max_relative = 1e-3);
    }

    #[test]
    fn test_accepts_checks_layout_length() {
        let ex = extractor();
        assert!(ex.accepts(&neutral_face()));
        assert!(!ex.accepts(&LandmarkFrame::new(vec![Point::default(); 100])));
    }
}
