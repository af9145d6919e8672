//! Collision Coordinator
//!
//! Runs the per-frame projectile pass:
//!
//! ```text
//!   entities ─┐                 ┌─► entity index ──┐
//!             ├─► 1. rebuild ───┤                  ├─► 2. broad ─► 3. narrow ─► 4. resolve
//!  obstacles ─┘                 └─► obstacle index ┘      phase       phase        & release
//!                                                           ▲
//!                       pool.active_handles() (player) ─────┘
//! ```
//!
//! The coordinator never touches entity health. Each hit becomes a
//! [`CollisionEvent`] and the projectile goes back to the pool in the same
//! frame, so it cannot hit twice.

use tracing::debug;

use crate::config::CollisionConfig;
use crate::core::rect::{BoundingBox, Collidable};
use crate::pool::object_pool::{ProjectileHandle, ProjectilePool};
use crate::spatial::SpatialIndex;
use super::events::{CollisionEvent, FrameStats, TargetRef};
use super::overlay::DebugOverlay;

/// Something projectiles can damage.
pub trait Damageable: Collidable {
    /// False once health has run out; dead targets are not indexed.
    fn is_alive(&self) -> bool;
}

/// Terrain that stops projectiles.
pub trait Obstacle: Collidable {
    /// True if hits should damage it; every obstacle absorbs the shot.
    fn is_destructible(&self) -> bool;
}

/// What the index stores: a slot in the caller's slice and the box it had
/// when the frame started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Position in the slice passed to the pass
    pub slot: usize,
    /// Box captured at rebuild time
    pub bounds: BoundingBox,
}

impl Collidable for IndexEntry {
    #[inline]
    fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

/// Owns the spatial indices and the per-frame scratch state.
#[derive(Debug)]
pub struct CollisionCoordinator {
    entity_index: SpatialIndex<IndexEntry>,
    obstacle_index: SpatialIndex<IndexEntry>,
    candidates: Vec<IndexEntry>,
    pending: Vec<ProjectileHandle>,
    events: Vec<CollisionEvent>,
    stats: FrameStats,
    debug_overlay: bool,
}

impl CollisionCoordinator {
    /// Coordinator sized and tuned from config.
    pub fn new(config: &CollisionConfig) -> Self {
        let mut coordinator =
            Self::with_bounds(config.field(), config.max_objects_per_node, config.max_levels);
        coordinator.debug_overlay = config.debug_collision_overlay;
        coordinator
    }

    /// Coordinator over `bounds` with explicit quadtree limits.
    pub fn with_bounds(bounds: BoundingBox, max_objects: usize, max_levels: u32) -> Self {
        Self {
            entity_index: SpatialIndex::new(bounds, max_objects, max_levels),
            obstacle_index: SpatialIndex::new(bounds, max_objects, max_levels),
            candidates: Vec::new(),
            pending: Vec::new(),
            events: Vec::new(),
            stats: FrameStats::default(),
            debug_overlay: false,
        }
    }

    /// Turn the debug overlay snapshot on or off.
    pub fn set_debug_overlay(&mut self, enabled: bool) {
        self.debug_overlay = enabled;
    }

    /// Run one frame of player projectiles against entities, then obstacles.
    ///
    /// Each active player shot is tested against the live entities it might
    /// overlap, in the order the index returns them; the first real overlap
    /// wins. A shot that hits no entity is tested against obstacles the same
    /// way. Any hit releases the projectile. Enemy shots are left alone (see
    /// [`run_hostile_pass`](Self::run_hostile_pass)).
    pub fn run_frame<E, O>(
        &mut self,
        entities: &[E],
        pool: &mut ProjectilePool,
        obstacles: &[O],
    ) -> &[CollisionEvent]
    where
        E: Damageable,
        O: Obstacle,
    {
        self.events.clear();
        self.stats = FrameStats::default();

        // Phase 1: rebuild
        self.entity_index.clear();
        for (slot, entity) in entities.iter().enumerate() {
            if entity.is_alive() {
                self.entity_index.insert(IndexEntry { slot, bounds: entity.bounds() });
                self.stats.entities_indexed += 1;
            }
        }

        self.obstacle_index.clear();
        for (slot, obstacle) in obstacles.iter().enumerate() {
            self.obstacle_index.insert(IndexEntry { slot, bounds: obstacle.bounds() });
            self.stats.obstacles_indexed += 1;
        }

        // Snapshot so releases don't disturb iteration
        let mut pending = std::mem::take(&mut self.pending);
        pending.clear();
        pending.extend_from_slice(pool.active_handles());

        for &handle in &pending {
            let Some(projectile) = pool.get(handle) else {
                continue;
            };
            if !projectile.is_player_shot() {
                continue;
            }

            let rect = projectile.bounds();
            let damage = projectile.damage;
            self.stats.projectiles_tested += 1;

            // Phases 2 and 3, entities first
            let target = match self.first_overlap(Index::Entities, &rect) {
                Some(slot) => Some(TargetRef::Entity(slot)),
                None => self.first_overlap(Index::Obstacles, &rect).map(|slot| {
                    TargetRef::Obstacle {
                        slot,
                        destructible: obstacles[slot].is_destructible(),
                    }
                }),
            };

            // Phase 4
            if let Some(target) = target {
                self.resolve(pool, handle, target, damage);
            }
        }

        self.pending = pending;

        debug!(
            entities = self.stats.entities_indexed,
            obstacles = self.stats.obstacles_indexed,
            tested = self.stats.projectiles_tested,
            candidates = self.stats.candidates_examined,
            hits = self.stats.hits,
            "collision frame"
        );

        &self.events
    }

    /// Test enemy shots against the player.
    ///
    /// Appends to this frame's events (call after [`run_frame`](Self::run_frame))
    /// and returns only the hits from this pass. A dead player takes no hits.
    pub fn run_hostile_pass<P: Damageable>(
        &mut self,
        player: &P,
        pool: &mut ProjectilePool,
    ) -> &[CollisionEvent] {
        let first_new = self.events.len();
        if !player.is_alive() {
            return &self.events[first_new..];
        }

        let player_box = player.bounds();
        let mut pending = std::mem::take(&mut self.pending);
        pending.clear();
        pending.extend_from_slice(pool.active_handles());

        for &handle in &pending {
            let Some(projectile) = pool.get(handle) else {
                continue;
            };
            if !projectile.is_enemy_shot() {
                continue;
            }

            self.stats.projectiles_tested += 1;
            if projectile.bounds().intersects(&player_box) {
                let damage = projectile.damage;
                self.resolve(pool, handle, TargetRef::Player, damage);
            }
        }

        self.pending = pending;
        &self.events[first_new..]
    }

    fn first_overlap(&mut self, which: Index, rect: &BoundingBox) -> Option<usize> {
        let index = match which {
            Index::Entities => &self.entity_index,
            Index::Obstacles => &self.obstacle_index,
        };

        self.candidates.clear();
        index.retrieve_into(rect, &mut self.candidates);
        self.stats.candidates_examined += self.candidates.len();

        self.candidates
            .iter()
            .find(|candidate| candidate.bounds.intersects(rect))
            .map(|candidate| candidate.slot)
    }

    fn resolve(
        &mut self,
        pool: &mut ProjectilePool,
        handle: ProjectileHandle,
        target: TargetRef,
        damage: u32,
    ) {
        #[cfg(feature = "debug-tracing")]
        tracing::trace!(projectile = %handle, ?target, damage, "projectile hit");

        pool.release(handle);
        self.events.push(CollisionEvent { projectile: handle, target, damage });
        self.stats.hits += 1;
    }

    /// Events from the most recent frame, in emission order.
    #[inline]
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    /// Counters from the most recent frame.
    #[inline]
    pub fn last_frame(&self) -> FrameStats {
        self.stats
    }

    /// The entity index as of the last rebuild.
    #[inline]
    pub fn index(&self) -> &SpatialIndex<IndexEntry> {
        &self.entity_index
    }

    /// The obstacle index as of the last rebuild.
    #[inline]
    pub fn obstacle_index(&self) -> &SpatialIndex<IndexEntry> {
        &self.obstacle_index
    }

    /// Debug overlay snapshot, or `None` unless the overlay is enabled.
    pub fn overlay(&self, pool: &ProjectilePool) -> Option<DebugOverlay> {
        self.debug_overlay
            .then(|| DebugOverlay::capture(&self.entity_index, pool))
    }
}

impl Default for CollisionCoordinator {
    fn default() -> Self {
        Self::new(&CollisionConfig::default())
    }
}

#[derive(Clone, Copy)]
enum Index {
    Entities,
    Obstacles,
}

// =============================================================================
// TESTS
// =============================================================================
