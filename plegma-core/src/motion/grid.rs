//! Integer lattice vectors
//!
//! Positions and displacements on the step lattice. All arithmetic returns
//! new values; components are always exact integers.

use core::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Round `component * factor` to the nearest integer, ties away from zero
fn round_scaled(component: i32, factor: f64) -> i32 {
    libm::round(component as f64 * factor) as i32
}

/// Operations the path planner needs from a lattice vector
///
/// Implemented by [`GridVec2`] and [`GridVec3`]; the planner itself is
/// dimension-agnostic.
pub trait GridVector:
    Copy + PartialEq + Sub<Output = Self> + Mul<f64, Output = Self> + Sized
{
    /// The zero vector
    const ZERO: Self;

    /// Euclidean length
    fn length(&self) -> f64;

    /// True when every component lies in `-1..=1`
    fn is_unit_bounded(&self) -> bool;

    /// Decompose a vector that is nonzero along exactly one axis
    ///
    /// Returns the signed unit step along that axis and the number of
    /// repeats, or `None` for the zero vector and for oblique vectors.
    fn axis_step(&self) -> Option<(Self, u32)>;

    /// True for the zero vector
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Integer vector on the XY step lattice
///
/// Scalar multiplication rounds each component to the nearest integer,
/// with ties away from zero (`1.5 -> 2`, `-1.5 -> -2`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridVec2 {
    pub x: i32,
    pub y: i32,
}

impl GridVec2 {
    /// Create a vector from components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for GridVec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridVec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for GridVec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for GridVec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(round_scaled(self.x, rhs), round_scaled(self.y, rhs))
    }
}

impl GridVector for GridVec2 {
    const ZERO: Self = Self::new(0, 0);

    fn length(&self) -> f64 {
        let x = self.x as f64;
        let y = self.y as f64;
        libm::sqrt(x * x + y * y)
    }

    fn is_unit_bounded(&self) -> bool {
        (-1..=1).contains(&self.x) && (-1..=1).contains(&self.y)
    }

    fn axis_step(&self) -> Option<(Self, u32)> {
        match (self.x, self.y) {
            (0, 0) => None,
            (x, 0) => Some((Self::new(x.signum(), 0), x.unsigned_abs())),
            (0, y) => Some((Self::new(0, y.signum()), y.unsigned_abs())),
            _ => None,
        }
    }
}

/// Integer vector on the XYZ step lattice
///
/// Same arithmetic and rounding rule as [`GridVec2`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridVec3 {
    /// Create a vector from components
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean magnitude
    pub fn magnitude(&self) -> f64 {
        self.length()
    }
}

impl Add for GridVec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for GridVec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for GridVec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for GridVec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(
            round_scaled(self.x, rhs),
            round_scaled(self.y, rhs),
            round_scaled(self.z, rhs),
        )
    }
}

impl GridVector for GridVec3 {
    const ZERO: Self = Self::new(0, 0, 0);

    fn length(&self) -> f64 {
        let x = self.x as f64;
        let y = self.y as f64;
        let z = self.z as f64;
        libm::sqrt(x * x + y * y + z * z)
    }

    fn is_unit_bounded(&self) -> bool {
        (-1..=1).contains(&self.x) && (-1..=1).contains(&self.y) && (-1..=1).contains(&self.z)
    }

    fn axis_step(&self) -> Option<(Self, u32)> {
        match (self.x, self.y, self.z) {
            (0, 0, 0) => None,
            (x, 0, 0) => Some((Self::new(x.signum(), 0, 0), x.unsigned_abs())),
            (0, y, 0) => Some((Self::new(0, y.signum(), 0), y.unsigned_abs())),
            (0, 0, z) => Some((Self::new(0, 0, z.signum()), z.unsigned_abs())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = GridVec2::new(3, -2);
        let b = GridVec2::new(-1, 5);

        assert_eq!(a + b, GridVec2::new(2, 3));
        assert_eq!(a - b, GridVec2::new(4, -7));
        assert_eq!(-a, GridVec2::new(-3, 2));
    }

    #[test]
    fn test_vec3_arithmetic() {
        let a = GridVec3::new(1, 2, 3);
        let b = GridVec3::new(4, -5, 6);

        assert_eq!(a + b, GridVec3::new(5, -3, 9));
        assert_eq!(b - a, GridVec3::new(3, -7, 3));
    }

    #[test]
    fn test_scalar_multiply_rounds_ties_away_from_zero() {
        // The documented rounding rule: 0.5 -> 1, 1.5 -> 2, -0.5 -> -1.
        assert_eq!(GridVec2::new(1, -1) * 0.5, GridVec2::new(1, -1));
        assert_eq!(GridVec2::new(3, -3) * 0.5, GridVec2::new(2, -2));
        assert_eq!(GridVec3::new(1, 3, -5) * 0.5, GridVec3::new(1, 2, -3));
    }

    #[test]
    fn test_scalar_multiply_nearest() {
        assert_eq!(GridVec2::new(10, 10) * 0.24, GridVec2::new(2, 2));
        assert_eq!(GridVec2::new(10, 10) * 0.26, GridVec2::new(3, 3));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(GridVec3::new(3, 4, 12).magnitude(), 13.0);
        assert_eq!(GridVec3::new(0, 0, 0).magnitude(), 0.0);
    }

    #[test]
    fn test_unit_bounds() {
        assert!(GridVec2::new(1, -1).is_unit_bounded());
        assert!(GridVec2::new(0, 0).is_unit_bounded());
        assert!(!GridVec2::new(2, 0).is_unit_bounded());
        assert!(!GridVec3::new(0, -2, 1).is_unit_bounded());
    }

    #[test]
    fn test_axis_step() {
        assert_eq!(
            GridVec2::new(0, -4).axis_step(),
            Some((GridVec2::new(0, -1), 4))
        );
        assert_eq!(
            GridVec3::new(7, 0, 0).axis_step(),
            Some((GridVec3::new(1, 0, 0), 7))
        );
        assert_eq!(GridVec2::new(0, 0).axis_step(), None);
        assert_eq!(GridVec2::new(2, 1).axis_step(), None);
        assert_eq!(GridVec3::new(0, 3, -3).axis_step(), None);
    }
}
