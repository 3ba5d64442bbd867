//! Lane packing tests, including property checks against a sweep oracle.

use crate::helpers::{date, item};
use lanewise::lanes::{lane_spans, pack};
use lanewise::{Item, ItemId};
use proptest::prelude::*;

fn lane_ids(items: &[Item]) -> Vec<Vec<u64>> {
    pack(items)
        .iter()
        .map(|lane| lane.items().iter().map(|item| item.id.0).collect())
        .collect()
}

/// Largest number of items covering one day, ends inclusive
fn max_overlap(items: &[Item]) -> usize {
    items
        .iter()
        .map(|candidate| {
            items
                .iter()
                .filter(|other| other.start <= candidate.start && candidate.start <= other.end)
                .count()
        })
        .max()
        .unwrap_or(0)
}

#[test]
fn test_empty_and_single() {
    assert!(pack(&[]).is_empty());
    assert_eq!(lane_ids(&[item(1, 0, 3)]), vec![vec![1]]);
}

#[test]
fn test_reuses_first_free_lane() {
    let items = vec![item(1, 0, 10), item(2, 2, 8), item(3, 11, 15), item(4, 9, 12)];
    // 1 ends day 10, so 3 fits lane 0; 2 ends day 8, so 4 fits lane 1
    assert_eq!(lane_ids(&items), vec![vec![1, 3], vec![2, 4]]);
}

#[test]
fn test_touching_items_need_separate_lanes() {
    let items = vec![item(1, 0, 5), item(2, 5, 9)];
    assert_eq!(lane_ids(&items), vec![vec![1], vec![2]]);

    let gap = vec![item(1, 0, 5), item(2, 6, 9)];
    assert_eq!(lane_ids(&gap), vec![vec![1, 2]]);
}

#[test]
fn test_identical_ranges_stack() {
    let items: Vec<Item> = (1..=4).map(|id| item(id, 3, 7)).collect();
    assert_eq!(lane_ids(&items), vec![vec![1], vec![2], vec![3], vec![4]]);
}

#[test]
fn test_equal_starts_keep_input_order() {
    let items = vec![item(7, 0, 2), item(3, 0, 4), item(5, 0, 1)];
    assert_eq!(lane_ids(&items), vec![vec![7], vec![3], vec![5]]);
}

#[test]
fn test_lane_spans() {
    let items = vec![item(1, 0, 10), item(2, 2, 8), item(3, 11, 15)];
    let spans = lane_spans(&items);
    assert_eq!(spans.len(), 2);
    assert_eq!((spans[0].start, spans[0].end), (date(0), date(15)));
    assert_eq!((spans[1].start, spans[1].end), (date(2), date(8)));
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0i64..120, 0i64..30), 0..40).prop_map(|ranges| {
        ranges
            .into_iter()
            .enumerate()
            .map(|(i, (start, len))| item(i as u64, start, start + len))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_lane_count_matches_max_overlap(items in arb_items()) {
        prop_assert_eq!(pack(&items).len(), max_overlap(&items));
    }

    #[test]
    fn prop_lanes_are_disjoint_and_complete(items in arb_items()) {
        let lanes = pack(&items);

        for lane in &lanes {
            prop_assert!(!lane.is_empty());
            for pair in lane.items().windows(2) {
                prop_assert!(pair[0].end < pair[1].start);
            }
        }

        let mut ids: Vec<ItemId> = lanes
            .iter()
            .flat_map(|lane| lane.items().iter().map(|item| item.id))
            .collect();
        ids.sort();
        let mut expected: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        expected.sort();
        prop_assert_eq!(ids, expected);
    }
}
