//! Frame Digests
//!
//! SHA-256 digests over collision output, used to check that replaying the
//! same arena script produces the same hits in the same order.

use sha2::{Sha256, Digest};

/// Hash output type (256 bits / 32 bytes)
pub type FrameDigest = [u8; 32];

/// Deterministic hasher for frame output.
///
/// Wraps SHA-256 with helpers for the core's value types.
/// Order of updates is significant.
pub struct FrameHasher {
    hasher: Sha256,
}

impl FrameHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for a stream of collision events.
    pub fn for_collision_events() -> Self {
        Self::new(b"BRAWL_COLLISION_EVENTS_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an i32 value (little-endian).
    #[inline]
    pub fn update_i32(&mut self, value: i32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> FrameDigest {
        self.hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hasher_determinism() {
        let make_hash = || {
            let mut hasher = FrameHasher::for_collision_events();
            hasher.update_u32(100);
            hasher.update_i32(-7);
            hasher.update_bool(true);
            hasher.finalize()
        };

        assert_eq!(make_hash(), make_hash());
    }

    #[test]
    fn test_hash_order_matters() {
        let hash1 = {
            let mut h = FrameHasher::new(b"test");
            h.update_u32(1);
            h.update_u32(2);
            h.finalize()
        };

        let hash2 = {
            let mut h = FrameHasher::new(b"test");
            h.update_u32(2);
            h.update_u32(1);
            h.finalize()
        };

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_domain_separation() {
        let a = FrameHasher::new(b"DOMAIN_A").finalize();
        let b = FrameHasher::new(b"DOMAIN_B").finalize();
        assert_ne!(a, b);
    }
}
