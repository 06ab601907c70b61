//! Hardware abstraction traits
//!
//! These traits define the interface between the motion logic and
//! hardware-specific driver implementations.

pub mod stepper;

pub use stepper::{Direction, StepperDriver};
