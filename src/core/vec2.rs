//! Fixed-Point 2D Vector
//!
//! Positions and velocities of pooled projectiles.

use std::fmt;
use std::ops::Add;
use serde::{Serialize, Deserialize};

use super::fixed::{Fixed, FIXED_ONE, fixed_mul, from_int, to_fixed, to_float, to_int};

/// 2D vector with fixed-point components, in pixels (or pixels/second).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec2 {
    /// X component (Q16.16 fixed-point)
    pub x: Fixed,
    /// Y component (Q16.16 fixed-point)
    pub y: Fixed,
}

impl FixedVec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Unit vector pointing right (+X)
    pub const RIGHT: Self = Self { x: FIXED_ONE, y: 0 };

    /// Create a new vector from fixed-point components.
    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Create a vector from whole-pixel components.
    #[inline]
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self {
            x: from_int(x),
            y: from_int(y),
        }
    }

    /// Create a vector from float components (API edge only).
    #[inline]
    pub fn from_floats(x: f64, y: f64) -> Self {
        Self {
            x: to_fixed(x),
            y: to_fixed(y),
        }
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }

    /// Multiply both components by a fixed-point factor (e.g. velocity * dt).
    #[inline]
    pub fn scale(self, factor: Fixed) -> Self {
        Self::new(fixed_mul(self.x, factor), fixed_mul(self.y, factor))
    }

    /// Whole-pixel coordinates (floor), as used for bounding boxes.
    #[inline]
    pub fn to_ints(self) -> (i32, i32) {
        (to_int(self.x), to_int(self.y))
    }

    /// Float coordinates, for logs and the debug overlay.
    #[inline]
    pub fn to_floats(self) -> (f32, f32) {
        (to_float(self.x), to_float(self.y))
    }
}

impl Add for FixedVec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        FixedVec2::add(self, rhs)
    }
}

impl fmt::Debug for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_floats();
        write!(f, "FixedVec2({x:.2}, {y:.2})")
    }
}

// =============================================================================
// TESTS
// =============================================================================
