//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the actuation traits
//! defined in plegma-core, built on the pin traits of plegma-hal:
//!
//! - Stepper drivers (STEP/DIR pulse drivers, ULN2003 half-stepping)
//! - Input helpers (button)
//!
//! Drivers hold pins and electrical state only; pulse pacing and
//! kinematics stay in plegma-core.

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod stepper;
