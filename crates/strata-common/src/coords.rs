//! Coordinate types for world space, the chunk grid, and the screen.
//!
//! World space is continuous and unbounded. The chunk grid partitions it into
//! unit squares: chunk `(x, y)` covers `[x, x + 1) × [y, y + 1)`. Screen space
//! is measured in pixels from the top-left corner of the viewport.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Continuous position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct WorldPos {
    /// X coordinate in world units
    pub x: f64,
    /// Y coordinate in world units
    pub y: f64,
}

impl WorldPos {
    /// Creates a new world position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the chunk containing this position.
    #[must_use]
    pub fn to_chunk_coord(self) -> ChunkCoord {
        ChunkCoord::containing(self)
    }
}

/// Chunk coordinate (identifies one unit cell of the terrain grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct ChunkCoord {
    /// X coordinate in chunk space
    pub x: i64,
    /// Y coordinate in chunk space
    pub y: i64,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the chunk covering a world position.
    ///
    /// Uses floor, not truncation, so `-0.5` lands in chunk `-1`.
    #[must_use]
    pub fn containing(pos: WorldPos) -> Self {
        Self {
            x: pos.x.floor() as i64,
            y: pos.y.floor() as i64,
        }
    }

    /// Converts to the world position of the chunk's top-left corner.
    #[must_use]
    pub fn to_world_pos(self) -> WorldPos {
        WorldPos::new(self.x as f64, self.y as f64)
    }

    /// Returns the world-space bounds of this chunk.
    #[must_use]
    pub fn bounds(self) -> WorldRect {
        let min = self.to_world_pos();
        WorldRect::new(min, WorldPos::new(min.x + 1.0, min.y + 1.0))
    }
}

/// Axis-aligned rectangle in world space, `min` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct WorldRect {
    /// Top-left corner
    pub min: WorldPos,
    /// Bottom-right corner
    pub max: WorldPos,
}

impl WorldRect {
    /// Creates a new rectangle from its corners.
    #[must_use]
    pub const fn new(min: WorldPos, max: WorldPos) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from its four edge coordinates.
    #[must_use]
    pub const fn from_edges(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(WorldPos::new(x1, y1), WorldPos::new(x2, y2))
    }

    /// Width in world units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height in world units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether the two rectangles share any point, edges included.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(other.max.x < self.min.x
            || other.max.y < self.min.y
            || other.min.x > self.max.x
            || other.min.y > self.max.y)
    }

    /// Returns the chunk columns and rows touching this rectangle, grown by
    /// `margin` whole chunks on every side.
    ///
    /// Columns are `floor(min.x) - margin .. ceil(max.x) + margin`. Edges
    /// beyond the `i64` range saturate, so the span stays within it.
    #[must_use]
    pub fn chunk_span(&self, margin: i64) -> (Range<i64>, Range<i64>) {
        let x0 = (self.min.x.floor() as i64).saturating_sub(margin);
        let y0 = (self.min.y.floor() as i64).saturating_sub(margin);
        let x1 = (self.max.x.ceil() as i64).saturating_add(margin);
        let y1 = (self.max.y.ceil() as i64).saturating_add(margin);
        (x0..x1, y0..y1)
    }
}

/// Rectangle in screen space (pixels, Y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct ScreenRect {
    /// Left edge in pixels
    pub x: f64,
    /// Top edge in pixels
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl ScreenRect {
    /// Creates a new screen rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_containing_uses_floor() {
        assert_eq!(
            ChunkCoord::containing(WorldPos::new(-0.5, 0.5)),
            ChunkCoord::new(-1, 0)
        );
        assert_eq!(
            ChunkCoord::containing(WorldPos::new(-1.0, -1.0)),
            ChunkCoord::new(-1, -1)
        );
        assert_eq!(
            ChunkCoord::containing(WorldPos::new(3.999, -2.001)),
            ChunkCoord::new(3, -3)
        );
    }

    #[test]
    fn test_chunk_bounds_unit_square() {
        let bounds = ChunkCoord::new(-4, 7).bounds();
        assert_eq!(bounds, WorldRect::from_edges(-4.0, 7.0, -3.0, 8.0));
        assert_eq!(bounds.width(), 1.0);
        assert_eq!(bounds.height(), 1.0);
    }

    #[test]
    fn test_overlaps() {
        let view = WorldRect::from_edges(-10.0, -10.0, 10.0, 10.0);

        assert!(view.overlaps(&ChunkCoord::new(0, 0).bounds()));
        // Touching an edge counts as overlap
        assert!(view.overlaps(&ChunkCoord::new(10, 0).bounds()));
        assert!(view.overlaps(&ChunkCoord::new(-11, -11).bounds()));

        assert!(!view.overlaps(&ChunkCoord::new(11, 0).bounds()));
        assert!(!view.overlaps(&ChunkCoord::new(0, -12).bounds()));
    }

    #[test]
    fn test_chunk_span_margin() {
        let view = WorldRect::from_edges(-400.0, -300.0, 400.0, 300.0);
        let (xs, ys) = view.chunk_span(1);
        assert_eq!(xs, -401..401);
        assert_eq!(ys, -301..301);

        let fractional = WorldRect::from_edges(-0.5, 0.25, 1.5, 2.0);
        let (xs, ys) = fractional.chunk_span(0);
        assert_eq!(xs, -1..2);
        assert_eq!(ys, 0..2);
    }

    #[test]
    fn test_chunk_span_saturates_far_out() {
        let far = WorldRect::from_edges(1.0e19, -4.0, 1.0e19 + 8.0, 4.0);
        let (xs, ys) = far.chunk_span(1);
        assert_eq!(xs, i64::MAX - 1..i64::MAX);
        assert_eq!(ys, -5..5);

        let (xs, _) = WorldRect::from_edges(-1.0e30, 0.0, -1.0e30, 1.0).chunk_span(1);
        assert_eq!(xs, i64::MIN..i64::MIN + 1);
    }

    proptest! {
        #[test]
        fn prop_containing_chunk_contains_point(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
            let pos = WorldPos::new(x, y);
            let bounds = pos.to_chunk_coord().bounds();
            prop_assert!(bounds.min.x <= x && x < bounds.max.x);
            prop_assert!(bounds.min.y <= y && y < bounds.max.y);
        }
    }
}
