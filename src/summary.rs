//! Read-only views for hover tooltips and drag feedback.

use crate::dates::{duration_days, format_duration, format_for_display, format_for_storage};
use crate::input::GestureKind;
use crate::types::{Item, ItemId};
use chrono::NaiveDate;
use serde::Serialize;

/// What the host shows while the pointer rests on an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration_days: i64,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            start: item.start,
            end: item.end,
            duration_days: duration_days(item.start, item.end),
        }
    }
}

impl ItemSummary {
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_days)
    }

    /// e.g. "2021-01-10 - 2021-01-20 (10 days)"
    pub fn range_label(&self) -> String {
        format!(
            "{} - {} ({})",
            format_for_storage(self.start),
            format_for_storage(self.end),
            self.duration_label()
        )
    }
}

/// Dates an in-progress drag would commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DragPreview {
    pub item_id: ItemId,
    pub gesture: GestureKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DragPreview {
    pub fn duration_days(&self) -> i64 {
        duration_days(self.start, self.end)
    }

    /// e.g. "Sun, Jan 10 - Wed, Jan 20"
    pub fn label(&self) -> String {
        format!("{} - {}", format_for_display(self.start), format_for_display(self.end))
    }
}
