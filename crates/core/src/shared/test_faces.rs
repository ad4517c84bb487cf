//! Synthetic MediaPipe-layout faces with controllable metrics.
//!
//! Eyes are 0.1 wide and the mouth is 0.1 wide, so each metric maps to a
//! single coordinate offset.

use crate::shared::geometry::Point;
use crate::shared::landmark_frame::LandmarkFrame;

pub const FACE_POINTS: usize = 468;

const EYE_Y: f64 = 0.40;
const EYE_WIDTH: f64 = 0.1;
const MOUTH_Y: f64 = 0.60;

/// A symmetric face whose extracted metrics are approximately
/// `(ear, ebh, lipan)`; exact up to the 1e-6 denominator guard.
pub fn face(ear: f64, ebh: f64, lipan: f64) -> LandmarkFrame {
    let mut pts = vec![Point::new(0.5, 0.5); FACE_POINTS];
    let h = ear * EYE_WIDTH / 2.0;

    // Left eye: corners 33/133, lids 160/158 over 144/153.
    pts[33] = Point::new(0.30, EYE_Y);
    pts[133] = Point::new(0.40, EYE_Y);
    pts[160] = Point::new(0.33, EYE_Y - h);
    pts[158] = Point::new(0.37, EYE_Y - h);
    pts[144] = Point::new(0.33, EYE_Y + h);
    pts[153] = Point::new(0.37, EYE_Y + h);

    // Right eye mirrors the left about x = 0.5.
    pts[263] = Point::new(0.70, EYE_Y);
    pts[362] = Point::new(0.60, EYE_Y);
    pts[387] = Point::new(0.67, EYE_Y - h);
    pts[385] = Point::new(0.63, EYE_Y - h);
    pts[373] = Point::new(0.67, EYE_Y + h);
    pts[380] = Point::new(0.63, EYE_Y + h);

    pts[105] = Point::new(0.35, EYE_Y - ebh * EYE_WIDTH);
    pts[334] = Point::new(0.65, EYE_Y - ebh * EYE_WIDTH);

    // Diamond mouth: area = 0.1 * 2m / 2, width^2 = 0.01, so lipan = 10m.
    let m = lipan / 10.0;
    pts[61] = Point::new(0.45, MOUTH_Y);
    pts[291] = Point::new(0.55, MOUTH_Y);
    pts[13] = Point::new(0.50, MOUTH_Y - m);
    pts[14] = Point::new(0.50, MOUTH_Y + m);

    LandmarkFrame::new(pts)
}

pub fn neutral_face() -> LandmarkFrame {
    face(0.30, 0.50, 0.01)
}
