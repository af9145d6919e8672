//! Quadtree Spatial Index
//!
//! Recursive 4-way partition over axis-aligned bounding boxes. The tree is
//! rebuilt every frame (`clear` then `insert`s) and queried once per
//! projectile during the broad phase.
//!
//! ```text
//!  bounds.x        mid_x            right
//!     ┌──────────────┬──────────────┐ bounds.y
//!     │      NW      │      NE      │
//!     │     (1)      │     (0)      │
//!     ├──────────────┼──────────────┤ mid_y
//!     │      SW      │      SE      │
//!     │     (2)      │     (3)      │
//!     └──────────────┴──────────────┘ bottom
//! ```
//!
//! An object descends into a child only if its box fits entirely inside that
//! child. Objects straddling a midline stay at the node that contains them,
//! so each object is stored exactly once and retrieval has no false
//! negatives.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::rect::{BoundingBox, Collidable};

/// Default maximum objects per node before a split.
pub const DEFAULT_MAX_OBJECTS: usize = 10;

/// Default maximum tree depth (root is level 0).
pub const DEFAULT_MAX_LEVELS: u32 = 5;

/// One of the four child regions of a split node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Quadrant {
    /// Top-right
    NorthEast = 0,
    /// Top-left
    NorthWest = 1,
    /// Bottom-left
    SouthWest = 2,
    /// Bottom-right
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Index into the children array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The region this quadrant covers inside `parent`.
    ///
    /// The west/north halves get `size / 2`, the east/south halves the
    /// remainder, so the four regions tile the parent exactly even for odd
    /// sizes.
    pub const fn region(self, parent: &BoundingBox) -> BoundingBox {
        let west_w = parent.width / 2;
        let north_h = parent.height / 2;
        let east_w = parent.width - west_w;
        let south_h = parent.height - north_h;
        let mid_x = parent.x.saturating_add(west_w);
        let mid_y = parent.y.saturating_add(north_h);

        match self {
            Quadrant::NorthEast => BoundingBox::new(mid_x, parent.y, east_w, north_h),
            Quadrant::NorthWest => BoundingBox::new(parent.x, parent.y, west_w, north_h),
            Quadrant::SouthWest => BoundingBox::new(parent.x, mid_y, west_w, south_h),
            Quadrant::SouthEast => BoundingBox::new(mid_x, mid_y, east_w, south_h),
        }
    }
}

/// Which child of `bounds` fully contains `rect`, if any.
#[inline]
fn quadrant_in(bounds: &BoundingBox, rect: &BoundingBox) -> Option<Quadrant> {
    if rect.is_degenerate() {
        return None;
    }
    Quadrant::ALL
        .into_iter()
        .find(|q| q.region(bounds).contains(rect))
}

/// A quadtree node. The root is just a node at level 0.
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    bounds: BoundingBox,
    level: u32,
    max_objects: usize,
    max_levels: u32,
    objects: Vec<T>,
    children: Option<Box<[QuadTree<T>; 4]>>,
}

impl<T: Collidable> QuadTree<T> {
    /// Create an empty root node.
    pub fn new(bounds: BoundingBox, max_objects: usize, max_levels: u32) -> Self {
        Self::with_level(bounds, max_objects, max_levels, 0)
    }

    fn with_level(bounds: BoundingBox, max_objects: usize, max_levels: u32, level: u32) -> Self {
        Self {
            bounds,
            level,
            max_objects,
            max_levels,
            objects: Vec::new(),
            children: None,
        }
    }

    /// Region covered by this node.
    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Depth of this node (root = 0).
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Objects stored directly at this node, in insertion order.
    #[inline]
    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    /// The four children (NE, NW, SW, SE) if this node has split.
    #[inline]
    pub fn children(&self) -> Option<&[QuadTree<T>; 4]> {
        self.children.as_deref()
    }

    /// True if this node has split.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Remove every object and drop all children. Idempotent.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.children = None;
    }

    /// Which child quadrant `object` fits in entirely, or `None` if it
    /// straddles a midline, pokes outside this node, or has no area.
    #[inline]
    pub fn quadrant_of<C: Collidable + ?Sized>(&self, object: &C) -> Option<Quadrant> {
        quadrant_in(&self.bounds, &object.bounds())
    }

    /// Insert an object.
    pub fn insert(&mut self, object: T) {
        if let Some(children) = self.children.as_mut() {
            if let Some(q) = quadrant_in(&self.bounds, &object.bounds()) {
                children[q.index()].insert(object);
                return;
            }
        }

        self.objects.push(object);

        if self.objects.len() > self.max_objects
            && self.level < self.max_levels
            && self.children.is_none()
        {
            self.split();
            self.redistribute();
        }
    }

    /// Create the four children. Only ever called on a leaf.
    fn split(&mut self) {
        let bounds = self.bounds;
        let level = self.level + 1;
        let (max_objects, max_levels) = (self.max_objects, self.max_levels);

        debug!(
            depth = level,
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "splitting quadtree node"
        );

        self.children = Some(Box::new(Quadrant::ALL.map(|q| {
            QuadTree::with_level(q.region(&bounds), max_objects, max_levels, level)
        })));
    }

    /// Push every object that fits a single child down into it.
    /// The rest stay here, in their original order.
    fn redistribute(&mut self) {
        let Some(children) = self.children.as_mut() else {
            return;
        };

        let pending = std::mem::take(&mut self.objects);
        for object in pending {
            match quadrant_in(&self.bounds, &object.bounds()) {
                Some(q) => children[q.index()].insert(object),
                None => self.objects.push(object),
            }
        }
    }

    /// Total number of objects in this subtree.
    pub fn len(&self) -> usize {
        let below: usize = self
            .children
            .iter()
            .flat_map(|c| c.iter())
            .map(QuadTree::len)
            .sum();
        self.objects.len() + below
    }

    /// True if no object is stored anywhere in this subtree.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deepest node level in this subtree.
    pub fn depth(&self) -> u32 {
        match &self.children {
            Some(children) => children.iter().map(QuadTree::depth).max().unwrap_or(self.level),
            None => self.level,
        }
    }

    /// Region of every node in this subtree, pre-order (for debug drawing).
    pub fn node_bounds(&self) -> Vec<BoundingBox> {
        let mut out = Vec::new();
        self.collect_node_bounds(&mut out);
        out
    }

    fn collect_node_bounds(&self, out: &mut Vec<BoundingBox>) {
        out.push(self.bounds);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_node_bounds(out);
            }
        }
    }
}

impl<T: Collidable + Clone> QuadTree<T> {
    /// Every object that might overlap `probe`.
    ///
    /// May contain objects that do not actually overlap; never misses one
    /// that does.
    pub fn retrieve<C: Collidable + ?Sized>(&self, probe: &C) -> Vec<T> {
        let mut out = Vec::new();
        self.retrieve_into(probe, &mut out);
        out
    }

    /// Like [`retrieve`](Self::retrieve) but appends into a caller-owned
    /// buffer. The buffer is not cleared first.
    ///
    /// Order: the matching child's candidates, then this node's own objects,
    /// then (when `probe` straddles a midline) all four children in NE, NW,
    /// SW, SE order.
    pub fn retrieve_into<C: Collidable + ?Sized>(&self, probe: &C, out: &mut Vec<T>) {
        let rect = probe.bounds();
        self.collect_candidates(&rect, out);
    }

    fn collect_candidates(&self, rect: &BoundingBox, out: &mut Vec<T>) {
        let quadrant = quadrant_in(&self.bounds, rect);

        if let (Some(children), Some(q)) = (&self.children, quadrant) {
            children[q.index()].collect_candidates(rect, out);
        }

        out.extend(self.objects.iter().cloned());

        if let (Some(children), None) = (&self.children, quadrant) {
            for child in children.iter() {
                child.collect_candidates(rect, out);
            }
        }
    }

    /// Flatten the whole subtree (diagnostics).
    pub fn all_objects(&self) -> Vec<T> {
        let mut out = self.objects.clone();
        if let Some(children) = &self.children {
            for child in children.iter() {
                out.extend(child.all_objects());
            }
        }
        out
    }
}

// =============================================================================
// TESTS
// =============================================================================
