//! Q16.16 Fixed-Point Arithmetic
//!
//! Projectile motion is integrated in fixed point so that a replayed frame
//! sequence produces bit-identical positions, and therefore identical hit
//! ordering, on every platform.
//!
//! ## Format: Q16.16
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Bit Layout: Q16.16 (32-bit signed integer)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  [S][IIIIIIIIIIIIIIII][FFFFFFFFFFFFFFFF]                    │
//! │   │  └──── 16 bits ────┘└──── 16 bits ────┘                 │
//! │   └─ Sign bit                                               │
//! │                                                             │
//! │  Range: -32768.0 to +32767.99998 pixels                     │
//! │  Precision: 1/65536 pixel                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The play field is 1280x720 pixels plus a 200 pixel margin, well inside
//! the representable range.

/// Q16.16 fixed-point number stored as i32.
pub type Fixed = i32;

/// Number of fractional bits (16)
pub const FIXED_SCALE: i32 = 16;

/// 1.0 in fixed-point (65536)
pub const FIXED_ONE: Fixed = 1 << FIXED_SCALE;

/// 0.5 in fixed-point (32768)
pub const FIXED_HALF: Fixed = FIXED_ONE >> 1;

// =============================================================================
// GAME CONSTANTS
// =============================================================================

/// Tick duration: 1/60 second = round(65536/60) = 1092
pub const TICK_DURATION: Fixed = 1092;

/// Projectile lifetime: 3.0 seconds = 3 * 65536
pub const PROJECTILE_TTL: Fixed = 196608;

/// Default projectile speed: 400 px/s = 400 * 65536
pub const DEFAULT_PROJECTILE_SPEED: Fixed = 26214400;

// =============================================================================
// CORE OPERATIONS
// =============================================================================

/// Convert a float to fixed-point.
///
/// # Warning
/// Only use at initialization or at the API edge. Never inside the frame pass.
///
/// # Example
/// ```
/// use brawl_collision::core::fixed::{to_fixed, FIXED_ONE};
/// const MY_VALUE: i32 = to_fixed(2.5);
/// assert_eq!(MY_VALUE, FIXED_ONE * 2 + FIXED_ONE / 2);
/// ```
#[inline]
pub const fn to_fixed(f: f64) -> Fixed {
    (f * (FIXED_ONE as f64)) as Fixed
}

/// Convert fixed-point to float for display.
#[inline]
pub fn to_float(f: Fixed) -> f32 {
    f as f32 / FIXED_ONE as f32
}

/// Whole pixels from an integer.
#[inline]
pub const fn from_int(i: i32) -> Fixed {
    i << FIXED_SCALE
}

/// Integer pixel coordinate (floor).
#[inline]
pub const fn to_int(f: Fixed) -> i32 {
    f >> FIXED_SCALE
}

/// Multiply two fixed-point numbers.
///
/// Uses i64 intermediate to prevent overflow, then truncates.
#[inline]
pub fn fixed_mul(a: Fixed, b: Fixed) -> Fixed {
    let wide = (a as i64) * (b as i64);
    (wide >> FIXED_SCALE) as Fixed
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(1.0), FIXED_ONE);
        assert_eq!(to_fixed(0.5), FIXED_HALF);
        assert_eq!(to_fixed(-1.0), -FIXED_ONE);
    }

    #[test]
    fn test_int_conversions() {
        assert_eq!(from_int(640), 640 * FIXED_ONE);
        assert_eq!(to_int(from_int(640) + FIXED_HALF), 640);
        // Floor, not truncation
        assert_eq!(to_int(-FIXED_HALF), -1);
    }

    #[test]
    fn test_fixed_mul() {
        assert_eq!(fixed_mul(to_fixed(2.0), to_fixed(3.0)), to_fixed(6.0));
        assert_eq!(fixed_mul(FIXED_HALF, FIXED_HALF), to_fixed(0.25));
        assert_eq!(fixed_mul(to_fixed(-2.0), to_fixed(3.0)), to_fixed(-6.0));
    }

    #[test]
    fn test_game_constants() {
        assert_eq!(TICK_DURATION, 1092);
        assert_eq!(PROJECTILE_TTL, 3 * FIXED_ONE);
        assert_eq!(DEFAULT_PROJECTILE_SPEED, 400 * FIXED_ONE);
    }

    #[test]
    fn test_speed_times_tick_fits() {
        // 400 px/s for one tick is ~6.67 px
        let step = fixed_mul(DEFAULT_PROJECTILE_SPEED, TICK_DURATION);
        assert_eq!(to_int(step), 6);
    }
}
