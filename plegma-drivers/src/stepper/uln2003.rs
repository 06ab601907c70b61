//! ULN2003 half-step driver
//!
//! Drives 5-wire unipolar steppers (28BYJ-48 and friends) behind a ULN2003
//! darlington array by energizing the four coil inputs directly. The motor
//! is half-stepped: one logical step walks all eight rows of the
//! energization table, giving the usual 8 phases per step.

use plegma_core::traits::{Direction, StepperDriver};
use plegma_hal::gpio::OutputPin;

/// Half-step energization table, one row per phase (IN1..IN4)
const HALF_STEP: [[bool; 4]; 8] = [
    [true, false, false, false],
    [true, true, false, false],
    [false, true, false, false],
    [false, true, true, false],
    [false, false, true, false],
    [false, false, true, true],
    [false, false, false, true],
    [true, false, false, true],
];

/// 4-coil stepper driver over a ULN2003 array
pub struct Uln2003<P1, P2, P3, P4> {
    in1: P1,
    in2: P2,
    in3: P3,
    in4: P4,
    direction: Direction,
    /// Last energized table row
    row: u8,
    /// False until the first phase advance; the coils start released
    energized: bool,
}

impl<P1, P2, P3, P4> Uln2003<P1, P2, P3, P4>
where
    P1: OutputPin,
    P2: OutputPin,
    P3: OutputPin,
    P4: OutputPin,
{
    /// Create a driver with all coils released
    pub fn new(mut in1: P1, mut in2: P2, mut in3: P3, mut in4: P4) -> Self {
        in1.set_low();
        in2.set_low();
        in3.set_low();
        in4.set_low();
        Self {
            in1,
            in2,
            in3,
            in4,
            direction: Direction::Clockwise,
            row: 0,
            energized: false,
        }
    }

    /// De-energize all coils, dropping holding torque
    pub fn release(&mut self) {
        self.in1.set_low();
        self.in2.set_low();
        self.in3.set_low();
        self.in4.set_low();
        self.energized = false;
    }

    fn apply_row(&mut self, row: u8) {
        let pattern = HALF_STEP[row as usize];
        self.in1.set_state(pattern[0]);
        self.in2.set_state(pattern[1]);
        self.in3.set_state(pattern[2]);
        self.in4.set_state(pattern[3]);
    }
}

impl<P1, P2, P3, P4> StepperDriver for Uln2003<P1, P2, P3, P4>
where
    P1: OutputPin,
    P2: OutputPin,
    P3: OutputPin,
    P4: OutputPin,
{
    fn set_direction(&mut self, dir: Direction) {
        self.direction = dir;
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }

    fn phases_per_step(&self) -> u32 {
        HALF_STEP.len() as u32
    }

    fn advance_phase(&mut self) {
        if self.energized {
            self.row = match self.direction {
                Direction::Clockwise => (self.row + 1) % 8,
                Direction::CounterClockwise => (self.row + 7) % 8,
            };
        } else {
            // First advance energizes the current row without moving.
            self.energized = true;
        }
        self.apply_row(self.row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;
    use plegma_core::timing::ConstantDelay;

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn driver() -> Uln2003<MockPin, MockPin, MockPin, MockPin> {
        Uln2003::new(MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new())
    }

    fn coils(driver: &Uln2003<MockPin, MockPin, MockPin, MockPin>) -> [bool; 4] {
        [
            driver.in1.is_set_high(),
            driver.in2.is_set_high(),
            driver.in3.is_set_high(),
            driver.in4.is_set_high(),
        ]
    }

    #[test]
    fn test_starts_released() {
        let driver = driver();
        assert_eq!(coils(&driver), [false; 4]);
        assert_eq!(driver.phases_per_step(), 8);
    }

    #[test]
    fn test_walks_half_step_table_forward() {
        let mut driver = driver();

        driver.advance_phase();
        assert_eq!(coils(&driver), HALF_STEP[0]);
        driver.advance_phase();
        assert_eq!(coils(&driver), HALF_STEP[1]);
        driver.advance_phase();
        assert_eq!(coils(&driver), HALF_STEP[2]);
    }

    #[test]
    fn test_direction_reverses_walk() {
        let mut driver = driver();
        driver.advance_phase();
        driver.advance_phase();
        assert_eq!(coils(&driver), HALF_STEP[1]);

        driver.set_direction(Direction::CounterClockwise);
        driver.advance_phase();
        assert_eq!(coils(&driver), HALF_STEP[0]);
        driver.advance_phase();
        assert_eq!(coils(&driver), HALF_STEP[7]);
    }

    #[test]
    fn test_full_step_returns_to_first_row() {
        let mut driver = driver();
        driver.step(1, &ConstantDelay::new(0), &mut NoopDelay);
        // 8 phases: rows 0..=7; one more advance wraps to row 0.
        assert_eq!(coils(&driver), HALF_STEP[7]);
        driver.advance_phase();
        assert_eq!(coils(&driver), HALF_STEP[0]);
    }

    #[test]
    fn test_release_drops_all_coils() {
        let mut driver = driver();
        driver.step(1, &ConstantDelay::new(0), &mut NoopDelay);
        driver.release();
        assert_eq!(coils(&driver), [false; 4]);

        // Next advance re-energizes where the walk left off.
        driver.advance_phase();
        assert_eq!(coils(&driver), HALF_STEP[7]);
    }
}
