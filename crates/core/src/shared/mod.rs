pub mod config;
pub mod constants;
pub mod geometry;
pub mod gesture;
pub mod landmark_frame;
pub mod stream_metadata;

#[cfg(test)]
pub(crate) mod test_faces;
