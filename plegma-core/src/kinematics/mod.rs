//! CoreXY belt kinematics
//!
//! Translates Cartesian step requests into pulse trains on the two belt
//! motors of a CoreXY gantry, keeping both belts phase-synchronized during
//! compound moves.

pub mod corexy;
pub mod sync;

pub use corexy::{CoreXy, CoreXyConfig, GantryState};
pub use sync::step_in_lockstep;

/// Caller-contract violations of the kinematic translator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KinematicsError {
    /// A lock-step group mixes motors with different phase counts
    ///
    /// Interleaving phases across such a group would skew the belts; the
    /// move is rejected before any motor is pulsed.
    MismatchedPhases,
    /// A unit-step dispatch received a vector with a component outside
    /// `-1..=1`
    OversizedStep,
}
