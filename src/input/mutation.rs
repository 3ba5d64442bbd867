//! Item replacements emitted by the interaction engine.

use crate::input::gesture::GestureKind;
use crate::types::{Item, ItemId};
use chrono::NaiveDate;
use serde::Serialize;

/// A requested change to one item. Applying it replaces the whole record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mutation {
    Dates {
        id: ItemId,
        start: NaiveDate,
        end: NaiveDate,
        gesture: GestureKind,
    },
    Rename {
        id: ItemId,
        name: String,
    },
}

impl Mutation {
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::Dates { id, .. } | Self::Rename { id, .. } => *id,
        }
    }

    /// User-facing confirmation text
    pub fn message(&self) -> &'static str {
        match self {
            Self::Dates { gesture: GestureKind::ResizeStart, .. } => "Start date updated successfully",
            Self::Dates { gesture: GestureKind::ResizeEnd, .. } => "End date updated successfully",
            Self::Dates { gesture: GestureKind::Move, .. } => "Item moved successfully",
            Self::Rename { .. } => "Item name updated successfully",
        }
    }

    /// The replacement record for `item`.
    pub fn replacement(&self, item: &Item) -> Item {
        match self {
            Self::Dates { start, end, .. } => item.with_dates(*start, *end),
            Self::Rename { name, .. } => item.with_name(name.clone()),
        }
    }

    /// Swap the target record in `items` for its replacement.
    ///
    /// Returns `false` when the item is missing or the replacement equals the
    /// current record.
    pub fn apply(&self, items: &mut [Item]) -> bool {
        let id = self.item_id();
        let Some(slot) = items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        let replacement = self.replacement(slot);
        if replacement == *slot {
            return false;
        }
        *slot = replacement;
        true
    }
}
