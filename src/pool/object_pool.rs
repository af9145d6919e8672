//! Object Pool
//!
//! Owns every instance of a pooled type and lends them out by [`Handle`].
//! Instances move between an ordered active list and a LIFO inactive stack;
//! they are reset on reuse, never freed, and the pool never shrinks.
//!
//! ## Invariants
//!
//! - `len() == active_count + inactive_count` after every call
//! - a handle is in exactly one of the two lists
//! - active handles keep acquisition order (the collision pass depends on it)

use std::fmt;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::fixed::Fixed;
use crate::core::rect::BoundingBox;
use crate::pool::projectile::Projectile;

/// A type that can live in an [`ObjectPool`].
pub trait Poolable {
    /// Parameters for (re)initialization.
    type Spawn;

    /// An inactive placeholder, used to pre-warm the pool.
    fn dormant() -> Self;

    /// A fresh live instance.
    fn spawn(params: &Self::Spawn) -> Self;

    /// Overwrite every field so the instance is indistinguishable from
    /// `spawn(params)`.
    fn reset(&mut self, params: &Self::Spawn);

    /// Mark as no longer live.
    fn deactivate(&mut self);
}

/// Stable reference to a pooled slot. Survives reset and reuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Handle(u32);

impl Handle {
    /// Slot index in the pool's backing store.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pool counters for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Total instances ever created
    pub pool_size: usize,
    /// Instances currently lent out
    pub active_count: usize,
    /// Instances waiting for reuse
    pub inactive_count: usize,
    /// `active_count / pool_size * 100`, or 0 for an empty pool
    pub utilization_percent: f32,
}

impl fmt::Display for PoolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pool {} | active {} | inactive {} | {:.1}%",
            self.pool_size, self.active_count, self.inactive_count, self.utilization_percent
        )
    }
}

/// Growable pool of reusable instances.
#[derive(Clone, Debug)]
pub struct ObjectPool<T> {
    slots: Vec<T>,
    listed_active: Vec<bool>,
    active: Vec<Handle>,
    inactive: Vec<Handle>,
}

impl<T: Poolable> Default for ObjectPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Poolable> ObjectPool<T> {
    /// Empty pool; grows on first acquire.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            listed_active: Vec::new(),
            active: Vec::new(),
            inactive: Vec::new(),
        }
    }

    /// Pool pre-warmed with `size` dormant instances.
    pub fn with_capacity(size: usize) -> Self {
        let mut pool = Self {
            slots: Vec::with_capacity(size),
            listed_active: Vec::with_capacity(size),
            active: Vec::with_capacity(size),
            inactive: Vec::with_capacity(size),
        };
        for _ in 0..size {
            let handle = pool.push_slot(T::dormant(), false);
            pool.inactive.push(handle);
        }
        pool
    }

    fn push_slot(&mut self, value: T, active: bool) -> Handle {
        let handle = Handle(self.slots.len() as u32);
        self.slots.push(value);
        self.listed_active.push(active);
        handle
    }

    /// Take an instance, reusing the most recently released one if any,
    /// otherwise growing the pool by one. Never fails.
    pub fn acquire(&mut self, params: T::Spawn) -> Handle {
        let handle = match self.inactive.pop() {
            Some(handle) => {
                self.slots[handle.index()].reset(&params);
                self.listed_active[handle.index()] = true;
                handle
            }
            None => {
                let handle = self.push_slot(T::spawn(&params), true);
                debug!(pool_size = self.slots.len(), "object pool grew");
                handle
            }
        };

        self.active.push(handle);
        handle
    }

    /// Return an instance to the pool.
    ///
    /// Returns `false` (and changes nothing) if the handle is not currently
    /// active, so calling this twice, or from several code paths in the same
    /// frame, is harmless.
    pub fn release(&mut self, handle: Handle) -> bool {
        let idx = handle.index();
        if !self.listed_active.get(idx).copied().unwrap_or(false) {
            return false;
        }

        if let Some(pos) = self.active.iter().position(|h| *h == handle) {
            self.active.remove(pos);
        }
        self.listed_active[idx] = false;
        self.slots[idx].deactivate();
        self.inactive.push(handle);
        true
    }

    /// Release every active instance, in active order.
    pub fn clear_all(&mut self) {
        let Self { slots, listed_active, active, inactive } = self;
        for handle in active.drain(..) {
            listed_active[handle.index()] = false;
            slots[handle.index()].deactivate();
            inactive.push(handle);
        }
    }

    /// True if the handle is currently lent out.
    #[inline]
    pub fn is_active(&self, handle: Handle) -> bool {
        self.listed_active.get(handle.index()).copied().unwrap_or(false)
    }

    /// Borrow an instance. `None` for a handle this pool never issued.
    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.index())
    }

    /// Mutably borrow an instance.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots.get_mut(handle.index())
    }

    /// Active handles in acquisition order.
    #[inline]
    pub fn active_handles(&self) -> &[Handle] {
        &self.active
    }

    /// Active instances with their handles, in acquisition order.
    pub fn iter_active(&self) -> impl Iterator<Item = (Handle, &T)> + '_ {
        self.active.iter().map(move |&h| (h, &self.slots[h.index()]))
    }

    /// Total instances ever created.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if nothing was ever created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current counters.
    pub fn stats(&self) -> PoolStats {
        let pool_size = self.slots.len();
        let active_count = self.active.len();
        let utilization_percent = if pool_size == 0 {
            0.0
        } else {
            active_count as f32 / pool_size as f32 * 100.0
        };

        PoolStats {
            pool_size,
            active_count,
            inactive_count: self.inactive.len(),
            utilization_percent,
        }
    }
}

/// The projectile pool used by the game loop.
pub type ProjectilePool = ObjectPool<Projectile>;

/// Handle to a pooled projectile.
pub type ProjectileHandle = Handle;

impl ObjectPool<Projectile> {
    /// Move every active projectile by its velocity over `dt` seconds.
    pub fn advance(&mut self, dt: Fixed) {
        for handle in &self.active {
            self.slots[handle.index()].integrate(dt);
        }
    }

    /// Age active projectiles by `dt` and release every one that is no longer
    /// live or whose box has left `field` (the play field plus its margin).
    ///
    /// Returns how many were released.
    pub fn sweep_expired(&mut self, dt: Fixed, field: &BoundingBox) -> usize {
        let Self { slots, listed_active, active, inactive } = self;
        let before = active.len();

        active.retain(|&handle| {
            let projectile = &mut slots[handle.index()];
            projectile.age(dt);

            if projectile.active && !projectile.is_outside(field) {
                return true;
            }

            projectile.deactivate();
            listed_active[handle.index()] = false;
            inactive.push(handle);
            false
        });

        before - active.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
