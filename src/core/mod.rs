//! Core deterministic primitives.
//!
//! Everything the collision pass computes is built on these types, so a
//! replayed frame sequence yields identical results on every platform.

pub mod fixed;
pub mod vec2;
pub mod rect;
pub mod rng;
pub mod hash;

// Re-export core types
pub use fixed::{Fixed, FIXED_ONE, FIXED_HALF, FIXED_SCALE};
pub use vec2::FixedVec2;
pub use rect::{BoundingBox, Collidable};
pub use rng::DeterministicRng;
pub use hash::{FrameDigest, FrameHasher};
