use crate::shared::geometry::Point;

/// One face's worth of landmarks for a single camera frame.
///
/// Index-addressable in the landmark model's fixed scheme. Coordinates are
/// normalized to `[0, 1]`; the domain never validates them.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkFrame {
    points: Vec<Point>,
}

impl LandmarkFrame {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`. Callers guarantee the index is in range.
    pub fn at(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Mirrors every point horizontally (`x -> 1 - x`).
    pub fn mirrored(&self) -> Self {
        Self::new(
            self.points
                .iter()
                .map(|p| Point::new(1.0 - p.x, p.y))
                .collect(),
        )
    }
}

impl From<Vec<(f64, f64)>> for LandmarkFrame {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Point::from).collect())
    }
}
