//! Projectile Collision Pass
//!
//! - `coordinator`: per-frame rebuild, broad/narrow phase and pool release
//! - `events`: hit reports and frame counters
//! - `overlay`: debug snapshot of the index and pool

pub mod coordinator;
pub mod events;
pub mod overlay;

pub use coordinator::{CollisionCoordinator, Damageable, Obstacle, IndexEntry};
pub use events::{CollisionEvent, TargetRef, FrameStats, digest_events};
pub use overlay::DebugOverlay;
