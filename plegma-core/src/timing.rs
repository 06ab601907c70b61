//! Step pulse timing policies
//!
//! A [`DelayCurve`] decides how long to pause after each step of a move,
//! which is how speed and acceleration are shaped on a blocking pulse
//! train. The curve only computes durations; actually sleeping is the job
//! of the caller's `DelayNs` provider.

/// Default pause after each step in microseconds (6 ms)
///
/// Used by [`ConstantDelay::default`]. Callers with timing requirements
/// should pass their own curve instead of relying on this.
pub const DEFAULT_STEP_DELAY_US: u32 = 6_000;

/// Per-step pulse timing
///
/// Maps a step index within a move to the pause, in microseconds, that
/// follows each phase of that step. Use [`FnCurve`] to pass a plain
/// closure anywhere a curve is expected.
pub trait DelayCurve {
    /// Pause in microseconds after step `step` of `total_steps`
    fn step_delay_us(&self, step: u32, total_steps: u32) -> u32;
}

/// Adapter implementing [`DelayCurve`] for a plain closure
pub struct FnCurve<F>(F);

impl<F: Fn(u32, u32) -> u32> FnCurve<F> {
    /// Wrap a `(step, total_steps) -> microseconds` closure
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: Fn(u32, u32) -> u32> DelayCurve for FnCurve<F> {
    fn step_delay_us(&self, step: u32, total_steps: u32) -> u32 {
        (self.0)(step, total_steps)
    }
}

/// Fixed pause after every step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConstantDelay {
    us: u32,
}

impl ConstantDelay {
    /// Create a curve that pauses `us` microseconds after every step
    pub const fn new(us: u32) -> Self {
        Self { us }
    }
}

impl Default for ConstantDelay {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY_US)
    }
}

impl DelayCurve for ConstantDelay {
    fn step_delay_us(&self, _step: u32, _total_steps: u32) -> u32 {
        self.us
    }
}

/// Trapezoidal speed profile expressed as a delay ramp
///
/// The pause shrinks linearly from `start_us` to `floor_us` over
/// `ramp_steps` steps, holds at `floor_us`, and grows back symmetrically
/// toward the end of the move. Short moves that never reach the floor stay
/// on the two ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampDelay {
    /// Pause at the first and last step
    pub start_us: u32,
    /// Pause at full speed
    pub floor_us: u32,
    /// Steps spent ramping between `start_us` and `floor_us`
    pub ramp_steps: u32,
}

impl RampDelay {
    /// Create a symmetric accelerate/cruise/decelerate ramp
    pub const fn new(start_us: u32, floor_us: u32, ramp_steps: u32) -> Self {
        Self {
            start_us,
            floor_us,
            ramp_steps,
        }
    }
}

impl DelayCurve for RampDelay {
    fn step_delay_us(&self, step: u32, total_steps: u32) -> u32 {
        if self.ramp_steps == 0 || self.start_us <= self.floor_us {
            return self.floor_us;
        }
        // Distance from the nearer end of the move bounds the ramp index.
        let from_end = total_steps.saturating_sub(step + 1);
        let k = step.min(from_end).min(self.ramp_steps);
        let span = (self.start_us - self.floor_us) as u64;
        self.start_us - (span * k as u64 / self.ramp_steps as u64) as u32
    }
}
