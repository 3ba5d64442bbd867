//! Greedy interval partitioning of items into lanes.
//!
//! Items are visited in ascending start order and placed into the first lane
//! whose last item ends strictly before the candidate starts. Touching items
//! (`end == start`) never share a lane. The lane count this produces equals
//! the largest number of items that overlap at a single day.

use crate::profile_scope;
use crate::types::{Item, Lane, LaneSpan};
use tracing::trace;

/// Partition `items` into the minimum number of non-overlapping lanes.
///
/// The sort is stable, so items with equal starts keep their input order.
pub fn pack(items: &[Item]) -> Vec<Lane> {
    profile_scope!("pack_lanes");

    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by_key(|item| item.start);

    let mut lanes: Vec<Lane> = Vec::new();
    for item in sorted {
        let open = lanes
            .iter_mut()
            .find(|lane| lane.last_end().is_some_and(|end| end < item.start));

        match open {
            Some(lane) => lane.push(item.clone()),
            None => lanes.push(Lane::open(item.clone())),
        }
    }

    trace!(items = items.len(), lanes = lanes.len(), "Packed lanes");
    lanes
}

/// Occupied extent of every lane, in lane order.
pub fn lane_spans(items: &[Item]) -> Vec<LaneSpan> {
    pack(items).iter().filter_map(Lane::span).collect()
}
