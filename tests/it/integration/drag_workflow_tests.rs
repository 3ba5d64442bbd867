//! Drag Workflow Integration Tests

use crate::helpers::{TestTimelineBuilder, assert_lane_count, centre, date, end_handle, find, rect_of, start_handle};
use lanewise::coords::CoordinateMapper;
use lanewise::{CursorHint, GestureKind, ItemId, Mutation, Point, Timeline};

/// Pointer x that maps to `day` in the current frame, shifted by the grab offset
fn x_at(timeline: &Timeline, day: i64, offset: f64) -> f64 {
    let ctx = timeline.frame().mapping().unwrap();
    CoordinateMapper::to_pixel(date(day), &ctx) + offset
}

fn two_items() -> Timeline {
    TestTimelineBuilder::new()
        .with_item(1, 0, 30)
        .with_item(2, 40, 50)
        .build()
}

#[test]
fn test_move_drag_preserves_duration() {
    let mut timeline = two_items();
    let rect = rect_of(&timeline, 1);
    let press = centre(&rect);
    let offset = press.x - rect.x;

    assert!(timeline.pointer_down(press));
    assert!(timeline.engine().state().is_dragging());
    assert_eq!(timeline.cursor(), CursorHint::Move);

    let target = Point::new(x_at(&timeline, 10, offset), press.y);
    let mutation = timeline.pointer_move(target);
    assert_eq!(
        mutation,
        Some(Mutation::Dates {
            id: ItemId(1),
            start: date(10),
            end: date(40),
            gesture: GestureKind::Move,
        })
    );
    assert_eq!(find(&timeline, 1).start, date(10));
    assert_eq!(timeline.drag_preview().map(|p| p.duration_days()), Some(30));
    assert_eq!(timeline.last_message(), Some("Item moved successfully"));

    timeline.pointer_up(target);
    assert!(timeline.engine().state().is_idle());
    assert_eq!(find(&timeline, 1).duration_days(), 30);
    assert!(timeline.drag_preview().is_none());
}

#[test]
fn test_mutation_reenters_lane_packing() {
    let mut timeline = TestTimelineBuilder::new()
        .with_item(1, 0, 10)
        .with_item(2, 5, 15)
        .build();
    assert_lane_count(&timeline, 2);

    let rect = rect_of(&timeline, 2);
    let press = centre(&rect);
    let offset = press.x - rect.x;
    assert!(timeline.pointer_down(press));

    let release = Point::new(x_at(&timeline, 20, offset), press.y);
    assert!(timeline.pointer_up(release).is_some());
    assert_eq!((find(&timeline, 2).start, find(&timeline, 2).end), (date(20), date(30)));
    assert_lane_count(&timeline, 1);
    assert_eq!(timeline.lane_summary(), "2 items in 1 lane");
}

#[test]
fn test_resize_end_extends_item() {
    let mut timeline = two_items();
    let rect = rect_of(&timeline, 1);
    let press = end_handle(&rect);
    let ctx = timeline.frame().mapping().unwrap();
    let offset = press.x - CoordinateMapper::to_pixel(date(30), &ctx);

    assert!(timeline.pointer_down(press));
    assert_eq!(timeline.cursor(), CursorHint::ResizeEast);

    let release = Point::new(x_at(&timeline, 35, offset), press.y);
    let mutation = timeline.pointer_up(release);
    assert_eq!(
        mutation,
        Some(Mutation::Dates {
            id: ItemId(1),
            start: date(0),
            end: date(35),
            gesture: GestureKind::ResizeEnd,
        })
    );
    assert_eq!(timeline.take_message(), Some("End date updated successfully"));
    assert!(timeline.engine().state().is_idle());
}

#[test]
fn test_press_without_movement_changes_nothing() {
    let mut timeline = two_items();
    for press in [start_handle(&rect_of(&timeline, 1)), end_handle(&rect_of(&timeline, 1))] {
        assert!(timeline.pointer_down(press));
        assert!(timeline.pointer_up(press).is_none());
        assert_eq!((find(&timeline, 1).start, find(&timeline, 1).end), (date(0), date(30)));
    }
    assert!(timeline.last_message().is_none());
}

#[test]
fn test_invalid_resize_is_withheld() {
    let mut timeline = two_items();
    let rect = rect_of(&timeline, 1);
    let press = start_handle(&rect);
    // Start handle sits 5px inside the start edge
    let offset = 5.0;

    assert!(timeline.pointer_down(press));
    assert_eq!(timeline.cursor(), CursorHint::ResizeWest);

    // Past the end: withheld
    let past_end = Point::new(x_at(&timeline, 31, offset), press.y);
    assert!(timeline.pointer_move(past_end).is_none());
    assert_eq!(find(&timeline, 1).start, date(0));
    assert!(timeline.drag_preview().is_none());

    let valid = Point::new(x_at(&timeline, 20, offset), press.y);
    assert!(timeline.pointer_move(valid).is_some());
    assert_eq!((find(&timeline, 1).start, find(&timeline, 1).end), (date(20), date(30)));
    assert_eq!(timeline.last_message(), Some("Start date updated successfully"));

    // Last valid dates stay when the pointer crosses the end again
    let past_end = Point::new(x_at(&timeline, 45, offset), press.y);
    assert!(timeline.pointer_move(past_end).is_none());
    assert!(timeline.pointer_up(past_end).is_none());
    assert_eq!((find(&timeline, 1).start, find(&timeline, 1).end), (date(20), date(30)));
    assert!(timeline.engine().state().is_idle());
}

#[test]
fn test_pointer_leave_closes_session() {
    let mut timeline = two_items();
    let rect = rect_of(&timeline, 2);
    let press = centre(&rect);
    let offset = press.x - rect.x;
    assert!(timeline.pointer_down(press));

    let outside = Point::new(x_at(&timeline, 45, offset), press.y);
    let mutation = timeline.pointer_leave(outside);
    assert!(matches!(mutation, Some(Mutation::Dates { id: ItemId(2), .. })));
    assert_eq!((find(&timeline, 2).start, find(&timeline, 2).end), (date(45), date(55)));
    assert!(timeline.engine().state().is_idle());

    // The session is gone: moving again only hovers
    assert!(timeline.pointer_move(press).is_none());
    assert_eq!(find(&timeline, 2).start, date(45));
}

#[test]
fn test_pointer_leave_on_invalid_resize_discards() {
    let mut timeline = two_items();
    let rect = rect_of(&timeline, 2);
    let press = end_handle(&rect);
    assert!(timeline.pointer_down(press));

    let before_start = Point::new(x_at(&timeline, 38, -5.0), press.y);
    assert!(timeline.pointer_leave(before_start).is_none());
    assert_eq!((find(&timeline, 2).start, find(&timeline, 2).end), (date(40), date(50)));
    assert!(timeline.engine().state().is_idle());
}

#[test]
fn test_second_pointer_down_is_ignored() {
    let mut timeline = two_items();
    let first = centre(&rect_of(&timeline, 1));
    let second = centre(&rect_of(&timeline, 2));

    assert!(timeline.pointer_down(first));
    assert!(!timeline.pointer_down(second));
    assert_eq!(timeline.engine().state().dragged_item_id(), Some(ItemId(1)));
}

#[test]
fn test_pointer_down_on_empty_space() {
    let mut timeline = two_items();
    let rect = rect_of(&timeline, 1);
    // Header band above the first lane
    assert!(!timeline.pointer_down(Point::new(centre(&rect).x, 40.0)));
    assert!(timeline.engine().state().is_idle());
    assert!(timeline.pointer_up(Point::new(centre(&rect).x, 40.0)).is_none());
}

#[test]
fn test_hover_feedback() {
    let mut timeline = two_items();
    let rect = rect_of(&timeline, 1);

    timeline.pointer_move(centre(&rect));
    assert!(timeline.engine().state().is_hovering());
    assert_eq!(timeline.cursor(), CursorHint::Move);
    let summary = timeline.hover_summary().unwrap();
    assert_eq!(summary.name, "Item 1");
    assert_eq!(summary.duration_label(), "30 days");

    timeline.pointer_move(start_handle(&rect));
    assert_eq!(timeline.cursor().css_name(), "w-resize");

    timeline.pointer_move(Point::new(centre(&rect).x, 40.0));
    assert!(timeline.engine().state().is_idle());
    assert_eq!(timeline.cursor(), CursorHint::Default);

    timeline.pointer_move(centre(&rect));
    timeline.pointer_leave(centre(&rect));
    assert!(timeline.hover_summary().is_none());
}
