//! # Brawl Collision Core
//!
//! Spatial indexing and projectile pooling for a top-down arena shooter,
//! run once per simulation tick by the game loop.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    BRAWL COLLISION CORE                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Q16.16 fixed-point arithmetic             │
//! │  ├── vec2.rs     - 2D vector with fixed-point                │
//! │  ├── rect.rs     - Pixel bounding boxes, Collidable          │
//! │  ├── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │  └── hash.rs     - Event stream digests                      │
//! │                                                              │
//! │  spatial/        - Broad phase                               │
//! │  └── quadtree.rs - Quadtree over bounding boxes              │
//! │                                                              │
//! │  pool/           - Projectile reuse                          │
//! │  ├── object_pool.rs - Handle-based pool, LIFO reuse          │
//! │  └── projectile.rs  - Pooled projectile                      │
//! │                                                              │
//! │  collision/      - Per-frame pass                            │
//! │  ├── coordinator.rs - Rebuild, broad, narrow, resolve        │
//! │  ├── events.rs      - Hit reports                            │
//! │  └── overlay.rs     - Debug snapshot                         │
//! │                                                              │
//! │  config.rs       - JSON tunables                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Given the same entities, obstacles and pool contents, a frame produces
//! the same events in the same order on any platform:
//! - Projectile motion uses Q16.16 fixed-point
//! - Only `Vec` storage, no hash containers
//! - Candidate order is fixed by the quadtree layout and insertion order

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod spatial;
pub mod pool;
pub mod collision;
pub mod config;

// Re-export commonly used types
pub use self::core::fixed::{Fixed, FIXED_ONE, FIXED_HALF, FIXED_SCALE};
pub use self::core::vec2::FixedVec2;
pub use self::core::rect::{BoundingBox, Collidable};
pub use self::core::rng::DeterministicRng;
pub use spatial::{SpatialIndex, QuadTree, Quadrant};
pub use pool::{ObjectPool, ProjectilePool, ProjectileHandle, Projectile, SpawnParams, Owner, ProjectileKind, PoolStats};
pub use collision::{CollisionCoordinator, CollisionEvent, TargetRef, Damageable, Obstacle, FrameStats, DebugOverlay};
pub use config::{CollisionConfig, ConfigError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;
