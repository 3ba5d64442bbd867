//! Item ingestion.
//!
//! This is the boundary where `start <= end` and id uniqueness are enforced.
//! Everything downstream trusts the item list it is handed.

use crate::error::{TimelineError, TimelineResult};
use crate::types::Item;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Parse a JSON array of `{ id, name, start, end }` records.
pub fn parse_items(json: &str) -> TimelineResult<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    validate_items(&items)?;
    Ok(items)
}

/// Load items from a JSON file.
pub fn load_items(path: &Path) -> TimelineResult<Vec<Item>> {
    let content = fs::read_to_string(path)?;
    parse_items(&content)
}

/// Check every item for an inverted range and the list for duplicate ids.
pub fn validate_items(items: &[Item]) -> TimelineResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.start > item.end {
            warn!(id = %item.id, start = %item.start, end = %item.end, "Rejecting inverted item");
            return Err(TimelineError::InvertedRange {
                id: item.id,
                start: item.start,
                end: item.end,
            });
        }
        if !seen.insert(item.id) {
            warn!(id = %item.id, "Rejecting duplicate item id");
            return Err(TimelineError::DuplicateId(item.id));
        }
    }
    Ok(())
}
