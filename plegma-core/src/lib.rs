//! Board-agnostic motion core for Plegma CoreXY gantries
//!
//! This crate contains all motion logic that does not depend on specific
//! hardware implementations:
//!
//! - Integer lattice vector types
//! - Discrete straight-line path planning (unit-step rasterization)
//! - Stepper actuation trait (direction, phase count, pulse trains)
//! - Step pulse timing policies
//! - Lock-step stepping across multiple motors
//! - CoreXY belt kinematics with dead-reckoned position tracking
//!
//! Everything here is synchronous and blocking: a movement call owns the
//! calling thread until the last pulse of the move has been emitted.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod kinematics;
pub mod motion;
pub mod timing;
pub mod traits;
