//! Stepper motor driver trait
//!
//! This trait abstracts over different stepper driver implementations
//! (STEP/DIR pulse drivers, multi-coil drivers like the ULN2003, etc.)

use embedded_hal::delay::DelayNs;

use crate::timing::DelayCurve;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Clockwise rotation
    Clockwise,
    /// Counter-clockwise rotation
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Trait for stepper motor drivers
///
/// A logical step is made of one or more physical phase transitions:
/// a STEP/DIR driver pulses its step pin low then high (2 phases), while a
/// half-stepped 4-coil driver walks 8 coil patterns per step. The trait
/// exposes that decomposition so groups of motors can be advanced phase by
/// phase in lock step (see [`crate::kinematics::step_in_lockstep`]).
///
/// Drivers never sleep on their own; all pulse pacing flows through the
/// caller-supplied [`DelayCurve`] and [`DelayNs`] provider.
pub trait StepperDriver {
    /// Set the rotation direction
    ///
    /// Takes effect from the next phase advance. Direction should only be
    /// changed between logical steps, never mid-step.
    fn set_direction(&mut self, dir: Direction);

    /// Get the current direction
    fn get_direction(&self) -> Direction;

    /// Number of physical phase transitions that make up one logical step
    ///
    /// Constant for the lifetime of the driver.
    fn phases_per_step(&self) -> u32;

    /// Advance the motor by a single phase in the current direction
    ///
    /// Performs exactly one pin transition and returns immediately without
    /// sleeping.
    fn advance_phase(&mut self);

    /// Emit `steps` full logical steps in the current direction
    ///
    /// The curve is consulted once per step; its duration elapses on the
    /// delay provider after every phase of that step.
    fn step(&mut self, steps: u32, curve: &dyn DelayCurve, delay: &mut dyn DelayNs) {
        for i in 0..steps {
            let pause_us = curve.step_delay_us(i, steps);
            for _ in 0..self.phases_per_step() {
                self.advance_phase();
                delay.delay_us(pause_us);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ConstantDelay;

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    struct CountingStepper {
        dir: Direction,
        phases: u32,
        advances: u32,
    }

    impl StepperDriver for CountingStepper {
        fn set_direction(&mut self, dir: Direction) {
            self.dir = dir;
        }

        fn get_direction(&self) -> Direction {
            self.dir
        }

        fn phases_per_step(&self) -> u32 {
            self.phases
        }

        fn advance_phase(&mut self) {
            self.advances += 1;
        }
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Clockwise.opposite(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.opposite(), Direction::Clockwise);
    }

    #[test]
    fn test_step_advances_every_phase() {
        let mut stepper = CountingStepper {
            dir: Direction::Clockwise,
            phases: 4,
            advances: 0,
        };

        stepper.step(5, &ConstantDelay::new(0), &mut NoopDelay);
        assert_eq!(stepper.advances, 20);
    }

    #[test]
    fn test_step_zero_is_noop() {
        let mut stepper = CountingStepper {
            dir: Direction::Clockwise,
            phases: 2,
            advances: 0,
        };

        stepper.step(0, &ConstantDelay::new(0), &mut NoopDelay);
        assert_eq!(stepper.advances, 0);
    }
}
