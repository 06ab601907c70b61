//! CoreXY translator
//!
//! On a CoreXY gantry the two belt motors A and B jointly determine the
//! carriage position: stepping both in the same direction moves along X,
//! stepping them in opposite directions moves along Y, and stepping only
//! one motor moves diagonally, half a Cartesian unit per axis per pulse.
//!
//! The sign convention is fixed as:
//!
//! | request      | motor A           | motor B           |
//! |--------------|-------------------|-------------------|
//! | `move_x(+)`  | Clockwise         | Clockwise         |
//! | `move_x(-)`  | CounterClockwise  | CounterClockwise  |
//! | `move_y(+)`  | CounterClockwise  | Clockwise         |
//! | `move_y(-)`  | Clockwise         | CounterClockwise  |
//! | `(+x, +y)`   | idle              | Clockwise         |
//! | `(+x, -y)`   | Clockwise         | idle              |
//! | `(-x, +y)`   | CounterClockwise  | idle              |
//! | `(-x, -y)`   | idle              | CounterClockwise  |
//!
//! Each diagonal row is the superposition of its two axis rows: the motor
//! whose directions cancel stays idle, the other runs at twice the
//! Cartesian step count. Motors wired the other way around are absorbed by
//! [`CoreXyConfig`], not by alternative tables.

use embedded_hal::delay::DelayNs;

use super::{step_in_lockstep, KinematicsError};
use crate::motion::grid::{GridVec2, GridVector};
use crate::timing::DelayCurve;
use crate::traits::{Direction, StepperDriver};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Translator activity state
///
/// `Moving` is only ever observable from within a movement call; every
/// call restores `Idle` before returning, on the error path included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GantryState {
    /// No movement call in progress
    #[default]
    Idle,
    /// A movement call owns the motors
    Moving,
}

/// Motor wiring configuration
///
/// A motor wired with swapped coil pairs turns the opposite way for the
/// same direction command. Inversion is applied where directions reach the
/// motors; the position estimate is unaffected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoreXyConfig {
    /// Reverse motor A's direction commands
    pub invert_a: bool,
    /// Reverse motor B's direction commands
    pub invert_b: bool,
}

/// CoreXY kinematic translator
///
/// Owns the two belt motors and a blocking delay provider, and tracks the
/// carriage position by dead reckoning: the estimate accumulates commanded
/// moves and is updated only when a movement call completes normally.
/// There is no feedback input, so it is an estimate, not ground truth.
///
/// One control context owns one `CoreXy` for the machine's lifetime; the
/// `&mut self` receivers make concurrent movement calls unrepresentable.
pub struct CoreXy<A, B, D> {
    motor_a: A,
    motor_b: B,
    delay: D,
    config: CoreXyConfig,
    position: GridVec2,
    state: GantryState,
}

impl<A, B, D> CoreXy<A, B, D>
where
    A: StepperDriver,
    B: StepperDriver,
    D: DelayNs,
{
    /// Create a translator with default wiring, positioned at the origin
    pub fn new(motor_a: A, motor_b: B, delay: D) -> Self {
        Self::with_config(motor_a, motor_b, delay, CoreXyConfig::default())
    }

    /// Create a translator with explicit wiring configuration
    pub fn with_config(motor_a: A, motor_b: B, delay: D, config: CoreXyConfig) -> Self {
        Self {
            motor_a,
            motor_b,
            delay,
            config,
            position: GridVec2::ZERO,
            state: GantryState::Idle,
        }
    }

    /// Current dead-reckoned carriage position
    pub fn position(&self) -> GridVec2 {
        self.position
    }

    /// Re-seed the position estimate, e.g. after an external homing move
    pub fn set_position(&mut self, position: GridVec2) {
        self.position = position;
    }

    /// Current activity state
    pub fn state(&self) -> GantryState {
        self.state
    }

    /// Borrow motor A
    pub fn motor_a(&self) -> &A {
        &self.motor_a
    }

    /// Borrow motor B
    pub fn motor_b(&self) -> &B {
        &self.motor_b
    }

    /// Release the motors and delay provider
    pub fn into_parts(self) -> (A, B, D) {
        (self.motor_a, self.motor_b, self.delay)
    }

    fn command_a(&self, dir: Direction) -> Direction {
        if self.config.invert_a {
            dir.opposite()
        } else {
            dir
        }
    }

    fn command_b(&self, dir: Direction) -> Direction {
        if self.config.invert_b {
            dir.opposite()
        } else {
            dir
        }
    }

    /// Move `steps` lattice units along X (negative for -X)
    ///
    /// Both motors run the same direction for `|steps|` lock-step pulses.
    /// Zero steps is a no-op that touches neither motor.
    pub fn move_x(&mut self, steps: i32, curve: &dyn DelayCurve) -> Result<(), KinematicsError> {
        if steps == 0 {
            return Ok(());
        }
        let dir = if steps > 0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };

        self.state = GantryState::Moving;
        self.motor_a.set_direction(self.command_a(dir));
        self.motor_b.set_direction(self.command_b(dir));
        let result = step_in_lockstep(
            &mut [&mut self.motor_a as &mut dyn StepperDriver, &mut self.motor_b],
            steps.unsigned_abs(),
            curve,
            &mut self.delay,
        );
        self.state = GantryState::Idle;
        result?;

        self.position = self.position + GridVec2::new(steps, 0);
        Ok(())
    }

    /// Move `steps` lattice units along Y (negative for -Y)
    ///
    /// The motors run opposite directions for `|steps|` lock-step pulses.
    pub fn move_y(&mut self, steps: i32, curve: &dyn DelayCurve) -> Result<(), KinematicsError> {
        if steps == 0 {
            return Ok(());
        }
        let (dir_a, dir_b) = if steps > 0 {
            (Direction::CounterClockwise, Direction::Clockwise)
        } else {
            (Direction::Clockwise, Direction::CounterClockwise)
        };

        self.state = GantryState::Moving;
        self.motor_a.set_direction(self.command_a(dir_a));
        self.motor_b.set_direction(self.command_b(dir_b));
        let result = step_in_lockstep(
            &mut [&mut self.motor_a as &mut dyn StepperDriver, &mut self.motor_b],
            steps.unsigned_abs(),
            curve,
            &mut self.delay,
        );
        self.state = GantryState::Idle;
        result?;

        self.position = self.position + GridVec2::new(0, steps);
        Ok(())
    }

    /// Move `steps` lattice units along a 45-degree diagonal
    ///
    /// Exactly one motor runs, at twice the Cartesian step count, since
    /// each of its pulses contributes half a unit to both axes. The signs
    /// of `x_dir` and `y_dir` select the quadrant; if either is zero the
    /// request is not a diagonal and the call is a no-op - axis moves are
    /// never inferred on the caller's behalf.
    pub fn move_diagonal(
        &mut self,
        steps: u32,
        x_dir: i32,
        y_dir: i32,
        curve: &dyn DelayCurve,
    ) -> Result<(), KinematicsError> {
        if steps == 0 || x_dir == 0 || y_dir == 0 {
            return Ok(());
        }
        let pulses = steps.saturating_mul(2);

        self.state = GantryState::Moving;
        match (x_dir > 0, y_dir > 0) {
            (true, true) => {
                let dir = self.command_b(Direction::Clockwise);
                self.motor_b.set_direction(dir);
                self.motor_b.step(pulses, curve, &mut self.delay);
            }
            (true, false) => {
                let dir = self.command_a(Direction::Clockwise);
                self.motor_a.set_direction(dir);
                self.motor_a.step(pulses, curve, &mut self.delay);
            }
            (false, true) => {
                let dir = self.command_a(Direction::CounterClockwise);
                self.motor_a.set_direction(dir);
                self.motor_a.step(pulses, curve, &mut self.delay);
            }
            (false, false) => {
                let dir = self.command_b(Direction::CounterClockwise);
                self.motor_b.set_direction(dir);
                self.motor_b.step(pulses, curve, &mut self.delay);
            }
        }
        self.state = GantryState::Idle;

        let signed = i32::try_from(steps).unwrap_or(i32::MAX);
        self.position =
            self.position + GridVec2::new(x_dir.signum() * signed, y_dir.signum() * signed);
        Ok(())
    }

    /// Execute a single unit step, as produced by the path planner
    ///
    /// Dispatches to [`move_x`](Self::move_x), [`move_y`](Self::move_y) or
    /// [`move_diagonal`](Self::move_diagonal) based on which components are
    /// nonzero. The zero vector is a no-op; components outside `-1..=1`
    /// are a contract violation.
    pub fn step_unit(
        &mut self,
        step: GridVec2,
        curve: &dyn DelayCurve,
    ) -> Result<(), KinematicsError> {
        if !step.is_unit_bounded() {
            return Err(KinematicsError::OversizedStep);
        }
        match (step.x, step.y) {
            (0, 0) => Ok(()),
            (x, 0) => self.move_x(x, curve),
            (0, y) => self.move_y(y, curve),
            (x, y) => self.move_diagonal(1, x, y, curve),
        }
    }
}
