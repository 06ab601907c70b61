//! STEP/DIR pulse driver
//!
//! Drives external stepper driver boards (A4988, DRV8825, TB6600, most
//! "stp/dir" breakouts) that take a step pulse on one pin and a direction
//! level on another. One logical step is two phases: step pin low, then
//! high - the driver board steps on the rising edge.

use plegma_core::traits::{Direction, StepperDriver};
use plegma_hal::gpio::OutputPin;

/// Phases per logical step (step pin low, step pin high)
const PHASES_PER_STEP: u32 = 2;

/// Stepper driver pulsing a STEP and a DIR pin
pub struct StepDirStepper<S, D> {
    step_pin: S,
    dir_pin: D,
    direction: Direction,
    phase: u8,
}

impl<S: OutputPin, D: OutputPin> StepDirStepper<S, D> {
    /// Create a driver over the given pins
    ///
    /// Both pins are driven to a known state: step low, direction
    /// clockwise (DIR high).
    pub fn new(mut step_pin: S, mut dir_pin: D) -> Self {
        step_pin.set_low();
        dir_pin.set_high();
        Self {
            step_pin,
            dir_pin,
            direction: Direction::Clockwise,
            phase: 0,
        }
    }

    /// Release the pins
    pub fn into_pins(self) -> (S, D) {
        (self.step_pin, self.dir_pin)
    }
}

impl<S: OutputPin, D: OutputPin> StepperDriver for StepDirStepper<S, D> {
    fn set_direction(&mut self, dir: Direction) {
        self.direction = dir;
        // DIR high = clockwise, by this crate's convention. Boards wired
        // the other way are handled by CoreXyConfig inversion.
        self.dir_pin.set_state(dir == Direction::Clockwise);
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }

    fn phases_per_step(&self) -> u32 {
        PHASES_PER_STEP
    }

    fn advance_phase(&mut self) {
        if self.phase == 0 {
            self.step_pin.set_low();
        } else {
            self.step_pin.set_high();
        }
        self.phase = (self.phase + 1) % 2;
    }
}
