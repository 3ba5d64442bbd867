//! Core types for the lane layout engine.
//!
//! Items are immutable value records: an edit produces a replacement item,
//! it never changes a shared one in place. Lanes, domains and rectangles are
//! derived per layout pass and never outlive it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Items
// ============================================================================

/// Unique identifier of a timeline item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A named, time-bounded item.
///
/// `start <= end` is guaranteed by the ingestion boundary
/// ([`crate::items::parse_items`]); the layout core does not re-check it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// First day of the item (inclusive)
    pub start: NaiveDate,
    /// Last day of the item
    pub end: NaiveDate,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
        }
    }

    /// Replacement record with new dates and the same id and name
    pub fn with_dates(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            start,
            end,
        }
    }

    /// Replacement record with a new name and the same dates
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
            start: self.start,
            end: self.end,
        }
    }

    /// Length of the item in whole days (0 for a single-day item)
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

// ============================================================================
// Lanes
// ============================================================================

/// A horizontal track of mutually non-overlapping items, ordered by start.
///
/// For consecutive items `a`, `b`: `a.end < b.start`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lane {
    items: Vec<Item>,
}

impl Lane {
    pub(crate) fn open(first: Item) -> Self {
        Self { items: vec![first] }
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// End date of the last item, which decides whether the lane can take more
    pub fn last_end(&self) -> Option<NaiveDate> {
        self.items.last().map(|item| item.end)
    }

    /// First start and last end of the lane
    pub fn span(&self) -> Option<LaneSpan> {
        let first = self.items.first()?;
        let last = self.items.last()?;
        Some(LaneSpan {
            start: first.start,
            end: last.end,
        })
    }
}

/// Occupied extent of a lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LaneSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

// ============================================================================
// Coordinates
// ============================================================================

/// The visible date span represented by the pixel coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl Domain {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// Width of the domain in days; zero or negative for a degenerate domain
    pub fn span_days(&self) -> i64 {
        (self.max - self.min).num_days()
    }

    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }
}

/// A pointer position in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal placement of an item inside the content region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub x: f64,
    pub width: f64,
}

/// Per-frame geometry of one item, shared by drawing and hit-testing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rectangle {
    pub item_id: ItemId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub lane_index: usize,
}

impl Rectangle {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive on every edge
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}
