use crate::shared::geometry::Point;

/// Domain interface for the external polygon-area utility.
///
/// Given four points in polygon order, returns the unsigned area in the
/// same units as the input coordinates.
pub trait QuadAreaCalculator: Send {
    fn area(&self, quad: &[Point; 4]) -> f64;
}
