//! Spatial Index
//!
//! Broad-phase structure for the collision pass: a quadtree over
//! bounding boxes, rebuilt every frame.

pub mod quadtree;

pub use quadtree::{QuadTree, Quadrant, DEFAULT_MAX_OBJECTS, DEFAULT_MAX_LEVELS};

/// The spatial index used by the collision pass.
pub type SpatialIndex<T> = QuadTree<T>;
