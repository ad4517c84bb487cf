pub mod face_metrics;
pub mod landmark_layout;
pub mod metric_extractor;
pub mod quad_area;
