//! Discrete straight-line path planning
//!
//! Rasterizes the straight line between two lattice points into an ordered
//! sequence of unit steps, one per motor pulse. The line is sampled at
//! unit-arc-length intervals and rounded to the lattice; differences of
//! consecutive distinct samples telescope, so the emitted steps always sum
//! exactly to `end - start` while each moves at most one cell per axis.

use core::iter::FusedIterator;

use heapless::Vec;

use crate::motion::grid::GridVector;

/// Planner fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PathError {
    /// A sampled differential left the `-1..=1` range on some component
    ///
    /// This is an internal consistency fault of the sampling/rounding
    /// policy, not a malformed input; retrying with the same endpoints
    /// reproduces it deterministically.
    StepOutOfRange,
}

/// Failure while collecting a plan into a bounded buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PathCollectError {
    /// The planner reported a fault mid-path
    Plan(PathError),
    /// The path has more steps than the buffer holds
    Capacity,
}

impl From<PathError> for PathCollectError {
    fn from(err: PathError) -> Self {
        Self::Plan(err)
    }
}

/// Plan the unit-step path from `start` to `end`
///
/// Returns a lazy iterator over the steps; `start == end` yields an empty
/// plan. Works for any [`GridVector`] dimensionality.
pub fn plan_path<V: GridVector>(start: V, end: V) -> PathPlan<V> {
    PathPlan::new(end - start)
}

/// Collect a plan into a fixed-capacity vector
pub fn collect_path<V: GridVector, const N: usize>(
    plan: PathPlan<V>,
) -> Result<Vec<V, N>, PathCollectError> {
    let mut path = Vec::new();
    for step in plan {
        path.push(step?).map_err(|_| PathCollectError::Capacity)?;
    }
    Ok(path)
}

enum State<V> {
    Done,
    /// Single-axis move: `remaining` repeats of the same signed unit step
    Axis { unit: V, remaining: u32 },
    /// Oblique move: rounded samples of `delta * (i / total)`
    Sampled {
        delta: V,
        total: u32,
        next: u32,
        prev: V,
    },
}

/// Iterator over the unit steps of a planned path
///
/// Yields `Err` once and fuses if a differential ever violates the unit
/// bound (see [`PathError::StepOutOfRange`]).
pub struct PathPlan<V> {
    state: State<V>,
}

impl<V: GridVector> PathPlan<V> {
    fn new(delta: V) -> Self {
        if delta.is_zero() {
            return Self { state: State::Done };
        }
        // The fast path also sidesteps the zero-length orthogonal
        // components that the sampled slope would divide by.
        if let Some((unit, remaining)) = delta.axis_step() {
            return Self {
                state: State::Axis { unit, remaining },
            };
        }
        Self::sampled(delta)
    }

    /// General-case rasterizer, reachable for axis-aligned deltas only from
    /// tests comparing it against the fast path
    fn sampled(delta: V) -> Self {
        let total = libm::ceil(delta.length()) as u32;
        Self {
            state: State::Sampled {
                delta,
                total,
                next: 1,
                prev: V::ZERO,
            },
        }
    }
}

impl<V: GridVector> Iterator for PathPlan<V> {
    type Item = Result<V, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Done => None,
            State::Axis { unit, remaining } => {
                let unit = *unit;
                *remaining -= 1;
                if *remaining == 0 {
                    self.state = State::Done;
                }
                Some(Ok(unit))
            }
            State::Sampled {
                delta,
                total,
                next,
                prev,
            } => {
                while *next <= *total {
                    let point = *delta * (*next as f64 / *total as f64);
                    *next += 1;
                    // Several parameter values may round into the same
                    // lattice cell near the start of short segments.
                    if point == *prev {
                        continue;
                    }
                    let step = point - *prev;
                    if !step.is_unit_bounded() {
                        self.state = State::Done;
                        return Some(Err(PathError::StepOutOfRange));
                    }
                    *prev = point;
                    return Some(Ok(step));
                }
                self.state = State::Done;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Done => (0, Some(0)),
            State::Axis { remaining, .. } => (*remaining as usize, Some(*remaining as usize)),
            State::Sampled { total, next, .. } => {
                (0, Some(total.saturating_add(1).saturating_sub(*next) as usize))
            }
        }
    }
}

impl<V: GridVector> FusedIterator for PathPlan<V> {}
