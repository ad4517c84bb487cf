pub mod auto_calibration;
pub mod calibration_outcome;
pub mod calibration_run;
pub mod manual_calibration;
pub mod threshold_derivation;
