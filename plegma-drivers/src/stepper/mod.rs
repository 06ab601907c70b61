//! Stepper driver implementations

pub mod step_dir;
pub mod uln2003;

pub use step_dir::StepDirStepper;
pub use uln2003::Uln2003;
