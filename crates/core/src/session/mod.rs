pub mod domain;
pub mod frame_report;
pub mod gesture_session;
pub mod infrastructure;
pub mod session_context;
pub mod session_logger;
