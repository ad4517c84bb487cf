use std::time::Duration;

use crate::shared::landmark_frame::LandmarkFrame;

/// One frame's worth of landmark-model output.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSample {
    /// Time since the start of the stream.
    pub timestamp: Duration,
    /// `None` when the model found no face in the frame.
    pub frame: Option<LandmarkFrame>,
}

/// Supplies landmark samples in strict temporal order.
///
/// Implementations hide where the landmarks come from (live model, recorded
/// file) while the session works with the abstract `LandmarkSample`.
pub trait LandmarkSource: Send {
    /// The next sample, or `None` once the stream is exhausted.
    fn next_sample(&mut self) -> Option<Result<LandmarkSample, Box<dyn std::error::Error>>>;
}
