//! Projectile Pooling
//!
//! - `object_pool`: generic reusable-instance pool with stable handles
//! - `projectile`: the pooled projectile and its spawn parameters

pub mod object_pool;
pub mod projectile;

pub use object_pool::{ObjectPool, Poolable, Handle, PoolStats, ProjectilePool, ProjectileHandle};
pub use projectile::{Projectile, SpawnParams, Owner, ProjectileKind, PROJECTILE_SIZE, DEFAULT_DAMAGE};
