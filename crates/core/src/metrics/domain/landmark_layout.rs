//! Landmark indices the metric extractor reads.
//!
//! Defaults follow the MediaPipe Face Mesh 468-point topology.

use serde::{Deserialize, Serialize};

/// Six-point eye contour: two corners and two lid pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeIndices {
    pub corner_a: usize,
    pub corner_b: usize,
    pub top_1: usize,
    pub top_2: usize,
    pub bottom_1: usize,
    pub bottom_2: usize,
}

impl EyeIndices {
    fn max_index(&self) -> usize {
        [
            self.corner_a,
            self.corner_b,
            self.top_1,
            self.top_2,
            self.bottom_1,
            self.bottom_2,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Quadrilateral mouth contour, in polygon order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouthIndices {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl MouthIndices {
    pub fn polygon(&self) -> [usize; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkLayout {
    pub left_eye: EyeIndices,
    pub right_eye: EyeIndices,
    pub mouth: MouthIndices,
    pub left_brow: usize,
    pub right_brow: usize,
}

impl LandmarkLayout {
    pub fn media_pipe() -> Self {
        Self {
            left_eye: EyeIndices {
                corner_a: 33,
                corner_b: 133,
                top_1: 160,
                top_2: 158,
                bottom_1: 144,
                bottom_2: 153,
            },
            right_eye: EyeIndices {
                corner_a: 263,
                corner_b: 362,
                top_1: 387,
                top_2: 385,
                bottom_1: 373,
                bottom_2: 380,
            },
            mouth: MouthIndices {
                left: 61,
                top: 13,
                right: 291,
                bottom: 14,
            },
            left_brow: 105,
            right_brow: 334,
        }
    }

    pub fn max_index(&self) -> usize {
        self.left_eye
            .max_index()
            .max(self.right_eye.max_index())
            .max(self.mouth.polygon().into_iter().max().unwrap_or(0))
            .max(self.left_brow)
            .max(self.right_brow)
    }

    /// Minimum landmark count a frame needs for every index to be valid.
    /// Saturates, so an absurd index rejects every frame instead of wrapping.
    pub fn required_len(&self) -> usize {
        self.max_index().saturating_add(1)
    }
}

impl Default for LandmarkLayout {
    fn default() -> Self {
        Self::media_pipe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_pipe_required_len() {
        // Highest index used is 387 (right eye top_1).
        assert_eq!(LandmarkLayout::media_pipe().required_len(), 388);
    }

    #[test]
    fn test_mouth_polygon_order() {
        let layout = LandmarkLayout::default();
        assert_eq!(layout.mouth.polygon(), [61, 13, 291, 14]);
    }

    #[test]
    fn test_required_len_tracks_custom_indices() {
        let mut layout = LandmarkLayout::media_pipe();
        layout.left_brow = 500;
        assert_eq!(layout.required_len(), 501);
    }

    #[test]
    fn test_required_len_saturates_on_huge_index() {
        let mut layout = LandmarkLayout::media_pipe();
        layout.left_brow = usize::MAX;
        assert_eq!(layout.max_index(), usize::MAX);
        assert_eq!(layout.required_len(), usize::MAX);
    }
}
