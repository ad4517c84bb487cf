/// Properties of the camera stream the landmarks were extracted from.
///
/// Width and height scale normalized mouth points into pixel space before
/// area is computed, so the mouth measure follows the frame's aspect ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamMetadata {
    pub width: u32,
    pub height: u32,
    /// Nominal frame rate, 0 when unknown. Reported in the session summary.
    pub fps: f64,
}

impl StreamMetadata {
    pub fn new(width: u32, height: u32, fps: f64) -> Self {
        Self { width, height, fps }
    }

    /// Unit-size stream: pixel space equals normalized space.
    pub fn normalized() -> Self {
        Self::new(1, 1, 0.0)
    }

    pub fn scale(&self) -> (f64, f64) {
        (self.width.max(1) as f64, self.height.max(1) as f64)
    }
}

impl Default for StreamMetadata {
    fn default() -> Self {
        Self::normalized()
    }
}
