//! Spatial Index Module
//!
//! R-tree over one frame's rectangles for point hit-testing. Rectangles can
//! overlap inside a lane once short items are widened to the minimum width,
//! so every entry remembers its position in the frame and queries resolve to
//! the earliest one. That keeps the answer identical to a front-to-back scan.

use crate::types::{ItemId, Point, Rectangle};
use rstar::{RTree, RTreeObject, AABB};

/// A spatial entry representing one rectangle of the frame.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    /// Position of the rectangle in frame order
    pub order: usize,
    pub item_id: ItemId,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(order: usize, rect: &Rectangle) -> Self {
        Self {
            order,
            item_id: rect.item_id,
            min_x: rect.x,
            min_y: rect.y,
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

/// Point index over the rectangles of a single frame.
/// Rebuilt wholesale with every layout pass.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    len: usize,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            len: 0,
        }
    }

    /// Build an index from rectangles in frame order.
    pub fn from_rectangles(rects: &[Rectangle]) -> Self {
        let entries: Vec<SpatialEntry> = rects
            .iter()
            .enumerate()
            .filter(|(_, rect)| rect.x.is_finite() && rect.width.is_finite())
            .map(|(order, rect)| SpatialEntry::new(order, rect))
            .collect();
        let len = entries.len();

        Self {
            tree: RTree::bulk_load(entries),
            len,
        }
    }

    /// Frame position of the first rectangle containing the point.
    pub fn first_at(&self, point: Point) -> Option<usize> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .map(|entry| entry.order)
            .min()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex").field("len", &self.len).finish()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
