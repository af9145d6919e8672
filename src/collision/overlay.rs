//! Debug Overlay
//!
//! A serializable snapshot of what the debug draw shows: every quadtree
//! node rectangle and the projectile pool counters.

use serde::{Serialize, Deserialize};

use crate::core::rect::{BoundingBox, Collidable};
use crate::pool::object_pool::{PoolStats, ProjectilePool};
use crate::spatial::SpatialIndex;

/// Overlay data for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DebugOverlay {
    /// Region of every index node, pre-order from the root
    pub node_bounds: Vec<BoundingBox>,
    /// Deepest node level
    pub depth: u32,
    /// Objects currently indexed
    pub indexed: usize,
    /// Projectile pool counters
    pub pool: PoolStats,
}

impl DebugOverlay {
    /// Snapshot an index and the projectile pool.
    pub fn capture<T: Collidable>(index: &SpatialIndex<T>, pool: &ProjectilePool) -> Self {
        Self {
            node_bounds: index.node_bounds(),
            depth: index.depth(),
            indexed: index.len(),
            pool: pool.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::projectile::SpawnParams;

    #[test]
    fn test_capture_after_split() {
        let mut index = SpatialIndex::new(BoundingBox::new(0, 0, 100, 100), 1, 3);
        index.insert(BoundingBox::new(5, 5, 10, 10));
        index.insert(BoundingBox::new(60, 60, 10, 10));

        let mut pool = ProjectilePool::with_capacity(4);
        pool.acquire(SpawnParams::default());

        let overlay = DebugOverlay::capture(&index, &pool);
        assert_eq!(overlay.node_bounds.len(), 5);
        assert_eq!(overlay.node_bounds[1], BoundingBox::new(50, 0, 50, 50));
        assert_eq!(overlay.depth, 1);
        assert_eq!(overlay.indexed, 2);
        assert_eq!(overlay.pool.active_count, 1);
        assert_eq!(overlay.pool.utilization_percent, 25.0);
    }

    #[test]
    fn test_serializes_to_json() {
        let index: SpatialIndex<BoundingBox> = SpatialIndex::new(BoundingBox::new(0, 0, 10, 10), 4, 2);
        let overlay = DebugOverlay::capture(&index, &ProjectilePool::new());

        let json = serde_json::to_string(&overlay).unwrap();
        assert!(json.contains("\"node_bounds\":[{\"x\":0,\"y\":0,\"width\":10,\"height\":10}]"));
        assert!(json.contains("\"utilization_percent\":0.0"));
    }
}
