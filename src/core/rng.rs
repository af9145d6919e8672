//! Deterministic Random Number Generator
//!
//! Xorshift128+ used to generate arena scenarios (enemy placement, shot
//! patterns) for the demo, tests and benchmarks. Given the same seed it
//! produces the identical sequence on every platform, which is what lets a
//! scripted arena be replayed and its collision digest compared.

use serde::{Serialize, Deserialize};

use super::fixed::{Fixed, FIXED_ONE};
use super::rect::BoundingBox;
use super::vec2::FixedVec2;

/// 1/sqrt(2) in Q16.16
const DIAGONAL: Fixed = 46341;

/// The eight compass directions as unit vectors.
///
/// Precomputed so shot directions never go through a float conversion.
pub static DIRECTION_LUT: [FixedVec2; 8] = [
    FixedVec2::new(FIXED_ONE, 0),
    FixedVec2::new(DIAGONAL, DIAGONAL),
    FixedVec2::new(0, FIXED_ONE),
    FixedVec2::new(-DIAGONAL, DIAGONAL),
    FixedVec2::new(-FIXED_ONE, 0),
    FixedVec2::new(-DIAGONAL, -DIAGONAL),
    FixedVec2::new(0, -FIXED_ONE),
    FixedVec2::new(DIAGONAL, -DIAGONAL),
];

/// Deterministic PRNG using Xorshift128+ algorithm.
///
/// # Example
///
/// ```
/// use brawl_collision::core::rng::DeterministicRng;
///
/// let mut a = DeterministicRng::new(12345);
/// let mut b = DeterministicRng::new(12345);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // Ensure state is never all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a random integer in range [0, max).
    #[inline]
    pub fn next_int(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Simple modulo - slight bias for very large max, but acceptable
        (self.next_u64() % max as u64) as u32
    }

    /// Generate a random integer in range [min, max].
    #[inline]
    pub fn next_int_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let range = (max - min + 1) as u32;
        min + self.next_int(range) as i32
    }

    /// Random top-left corner for a `width`x`height` box fully inside `area`.
    ///
    /// Falls back to the area's corner when the box does not fit.
    pub fn random_box_in(&mut self, area: &BoundingBox, width: i32, height: i32) -> BoundingBox {
        let x = self.next_int_range(area.x, area.right() - width);
        let y = self.next_int_range(area.y, area.bottom() - height);
        BoundingBox::new(x, y, width, height)
    }

    /// Pick one of the eight compass directions.
    #[inline]
    pub fn random_direction(&mut self) -> FixedVec2 {
        DIRECTION_LUT[self.next_int(8) as usize]
    }
}

/// SplitMix64 for seed initialization.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

// =============================================================================
// TESTS
// =============================================================================
