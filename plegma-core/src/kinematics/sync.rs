//! Lock-step pulse generation across motor groups
//!
//! Multi-coil steppers decompose one logical step into several physical
//! phase transitions. Fully stepping one motor before starting the next
//! would let the belts drift within every step, so a synchronized move
//! advances the whole group one phase at a time.

use embedded_hal::delay::DelayNs;

use super::KinematicsError;
use crate::timing::DelayCurve;
use crate::traits::StepperDriver;

/// Advance every motor in `steppers` by `steps` logical steps in lock step
///
/// For each step index the curve is consulted once; for each phase of that
/// step, every motor advances one phase before the pause elapses on the
/// delay provider. Directions are whatever each motor was last set to.
///
/// Fails with [`KinematicsError::MismatchedPhases`] before any pulse is
/// emitted if the motors do not agree on `phases_per_step`. An empty group
/// or a zero step count is a no-op.
pub fn step_in_lockstep(
    steppers: &mut [&mut dyn StepperDriver],
    steps: u32,
    curve: &dyn DelayCurve,
    delay: &mut dyn DelayNs,
) -> Result<(), KinematicsError> {
    let phases = match steppers.first() {
        Some(stepper) => stepper.phases_per_step(),
        None => return Ok(()),
    };
    if steppers.iter().any(|s| s.phases_per_step() != phases) {
        return Err(KinematicsError::MismatchedPhases);
    }

    for i in 0..steps {
        let pause_us = curve.step_delay_us(i, steps);
        for _ in 0..phases {
            for stepper in steppers.iter_mut() {
                stepper.advance_phase();
            }
            delay.delay_us(pause_us);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ConstantDelay;
    use crate::traits::Direction;
    use core::cell::RefCell;

    type PhaseLog = RefCell<heapless::Vec<(u8, u32), 64>>;

    struct LogStepper<'a> {
        id: u8,
        phases: u32,
        phase: u32,
        dir: Direction,
        log: &'a PhaseLog,
    }

    impl<'a> LogStepper<'a> {
        fn new(id: u8, phases: u32, log: &'a PhaseLog) -> Self {
            Self {
                id,
                phases,
                phase: 0,
                dir: Direction::Clockwise,
                log,
            }
        }
    }

    impl StepperDriver for LogStepper<'_> {
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
            self.log.borrow_mut().push((self.id, self.phase)).unwrap();
            self.phase = (self.phase + 1) % self.phases;
        }
    }

    struct CountingDelay {
        calls: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, _ns: u32) {
            self.calls += 1;
        }
    }

    #[test]
    fn test_phases_interleave_across_motors() {
        let log = PhaseLog::default();
        let mut a = LogStepper::new(0, 3, &log);
        let mut b = LogStepper::new(1, 3, &log);
        let mut delay = CountingDelay { calls: 0 };

        step_in_lockstep(
            &mut [&mut a, &mut b],
            2,
            &ConstantDelay::new(10),
            &mut delay,
        )
        .unwrap();

        // A0,B0,A1,B1,A2,B2 per step - never A0,A1,A2,B0,B1,B2.
        let per_step = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)];
        let mut expected: heapless::Vec<(u8, u32), 64> = heapless::Vec::new();
        for _ in 0..2 {
            expected.extend_from_slice(&per_step).unwrap();
        }
        assert_eq!(*log.borrow(), expected);

        // One pause after each phase-advance across the whole group.
        assert_eq!(delay.calls, 6);
    }

    #[test]
    fn test_mismatched_phase_counts_rejected() {
        let log = PhaseLog::default();
        let mut a = LogStepper::new(0, 2, &log);
        let mut b = LogStepper::new(1, 8, &log);
        let mut delay = CountingDelay { calls: 0 };

        let result = step_in_lockstep(
            &mut [&mut a, &mut b],
            4,
            &ConstantDelay::new(10),
            &mut delay,
        );

        assert_eq!(result, Err(KinematicsError::MismatchedPhases));
        // Rejected before any pulse.
        assert!(log.borrow().is_empty());
        assert_eq!(delay.calls, 0);
    }

    #[test]
    fn test_empty_group_and_zero_steps() {
        let log = PhaseLog::default();
        let mut a = LogStepper::new(0, 4, &log);
        let mut delay = CountingDelay { calls: 0 };

        step_in_lockstep(&mut [], 3, &ConstantDelay::new(10), &mut delay).unwrap();
        step_in_lockstep(&mut [&mut a], 0, &ConstantDelay::new(10), &mut delay).unwrap();

        assert!(log.borrow().is_empty());
        assert_eq!(delay.calls, 0);
    }
}
