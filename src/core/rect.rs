//! Axis-Aligned Bounding Boxes
//!
//! Integer pixel rectangles used as the collision proxy for every object the
//! core touches, and the [`Collidable`] capability that exposes one.
//!
//! A box covers `[x, x + width) × [y, y + height)`. Boxes with a non-positive
//! width or height are degenerate: they never overlap anything and never fit
//! inside another box.

use serde::{Serialize, Deserialize};

use super::vec2::FixedVec2;

/// Axis-aligned rectangle in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl BoundingBox {
    /// Create a box from its top-left corner and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a box of the given size centered on a pixel coordinate.
    ///
    /// For odd sizes the extra pixel goes to the right/bottom half.
    #[inline]
    pub const fn centered(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Self {
            x: cx - width / 2,
            y: cy - height / 2,
            width,
            height,
        }
    }

    /// Create a box centered on a fixed-point position.
    #[inline]
    pub fn centered_on(center: FixedVec2, width: i32, height: i32) -> Self {
        let (cx, cy) = center.to_ints();
        Self::centered(cx, cy, width, height)
    }

    /// Right edge (exclusive). Saturates at `i32::MAX`.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive). Saturates at `i32::MAX`.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Center point (rounded toward the top-left).
    #[inline]
    pub const fn center(&self) -> (i32, i32) {
        (self.x.saturating_add(self.width / 2), self.y.saturating_add(self.height / 2))
    }

    /// True if the box has no area.
    #[inline]
    pub const fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Exact overlap test. Touching edges do not overlap.
    #[inline]
    pub const fn intersects(&self, other: &BoundingBox) -> bool {
        !self.is_degenerate()
            && !other.is_degenerate()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True if `other` lies entirely inside this box.
    ///
    /// A degenerate `other` is never contained.
    #[inline]
    pub const fn contains(&self, other: &BoundingBox) -> bool {
        !other.is_degenerate()
            && other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Grow the box by `margin` pixels on every side, saturating at the
    /// `i32` range.
    #[inline]
    pub const fn expanded(&self, margin: i32) -> Self {
        let grow = margin.saturating_mul(2);
        Self {
            x: self.x.saturating_sub(margin),
            y: self.y.saturating_sub(margin),
            width: self.width.saturating_add(grow),
            height: self.height.saturating_add(grow),
        }
    }
}

/// Anything that can be placed in the spatial index or tested for overlap.
pub trait Collidable {
    /// Current bounding box, derived from the object's position this frame.
    fn bounds(&self) -> BoundingBox;
}

impl Collidable for BoundingBox {
    #[inline]
    fn bounds(&self) -> BoundingBox {
        *self
    }
}

impl<T: Collidable + ?Sized> Collidable for &T {
    #[inline]
    fn bounds(&self) -> BoundingBox {
        (**self).bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = BoundingBox::new(0, 0, 20, 20);
        assert!(a.intersects(&BoundingBox::new(10, 10, 20, 20)));
        assert!(a.intersects(&BoundingBox::new(5, 5, 2, 2)));

        // Shared edge is not an overlap
        assert!(!a.intersects(&BoundingBox::new(20, 0, 20, 20)));
        assert!(!a.intersects(&BoundingBox::new(0, 20, 20, 20)));
    }

    #[test]
    fn test_degenerate_never_overlaps() {
        let a = BoundingBox::new(0, 0, 20, 20);
        assert!(!a.intersects(&BoundingBox::new(5, 5, 0, 10)));
        assert!(!a.intersects(&BoundingBox::new(5, 5, 10, -3)));
        assert!(!a.contains(&BoundingBox::new(5, 5, 0, 0)));
    }

    #[test]
    fn test_contains() {
        let outer = BoundingBox::new(0, 0, 100, 100);
        assert!(outer.contains(&BoundingBox::new(0, 0, 100, 100)));
        assert!(outer.contains(&BoundingBox::new(10, 10, 20, 20)));
        assert!(!outer.contains(&BoundingBox::new(90, 90, 20, 20)));
        assert!(!outer.contains(&BoundingBox::new(-1, 10, 5, 5)));
    }

    #[test]
    fn test_centered() {
        let b = BoundingBox::centered(100, 50, 32, 32);
        assert_eq!(b, BoundingBox::new(84, 34, 32, 32));
        assert_eq!(b.center(), (100, 50));

        let from_fixed = BoundingBox::centered_on(FixedVec2::from_ints(100, 50), 32, 32);
        assert_eq!(from_fixed, b);
    }

    #[test]
    fn test_expanded() {
        let field = BoundingBox::new(0, 0, 1280, 720).expanded(200);
        assert_eq!(field, BoundingBox::new(-200, -200, 1680, 1120));
    }

    #[test]
    fn test_edges_saturate_near_i32_max() {
        let far = BoundingBox::new(i32::MAX - 10, i32::MAX - 5, 20, 20);
        assert_eq!(far.right(), i32::MAX);
        assert_eq!(far.bottom(), i32::MAX);
        assert!(far.intersects(&BoundingBox::new(i32::MAX - 3, i32::MAX - 3, 2, 2)));
        assert!(!BoundingBox::new(0, 0, 800, 600).contains(&far));
        assert!(!BoundingBox::new(0, 0, 800, 600).intersects(&far));

        let huge = BoundingBox::new(i32::MIN + 1, 0, i32::MAX, 10).expanded(i32::MAX);
        assert_eq!(huge.x, i32::MIN);
        assert_eq!(huge.width, i32::MAX);
    }
}
