//! Plegma Hardware Abstraction Layer
//!
//! This crate defines the pin-level hardware traits consumed by the Plegma
//! motion crates. Board support packages implement these traits for their
//! chip; the core and driver crates never name a concrete pin type.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / board support package    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  plegma-drivers (STEP/DIR, ULN2003, …)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  plegma-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, IoPin, OutputPin};
