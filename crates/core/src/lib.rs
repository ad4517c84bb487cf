pub mod calibration;
pub mod detection;
pub mod metrics;
pub mod session;
pub mod shared;
pub mod source;
