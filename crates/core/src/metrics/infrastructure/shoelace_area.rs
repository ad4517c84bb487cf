use crate::metrics::domain::quad_area::QuadAreaCalculator;
use crate::shared::geometry::Point;

/// Shoelace-formula area: signed polygon area, reported unsigned.
pub struct ShoelaceArea;

impl ShoelaceArea {
    pub fn new() -> Self {
        Self
    }

    /// Signed area; positive for counter-clockwise order in a y-up frame.
    pub fn signed_area(points: &[Point]) -> f64 {
        let n = points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = points[i];
                let b = points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }
}

impl Default for ShoelaceArea {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadAreaCalculator for ShoelaceArea {
    fn area(&self, quad: &[Point; 4]) -> f64 {
        Self::signed_area(quad).abs()
    }
}
