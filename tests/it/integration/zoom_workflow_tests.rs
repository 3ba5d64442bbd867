//! Zoom and Viewport Integration Tests

use crate::helpers::{TestTimelineBuilder, date};
use lanewise::Timeline;

fn quarter() -> Timeline {
    TestTimelineBuilder::new()
        .with_item(1, 0, 40)
        .with_item(2, 30, 90)
        .build()
}

#[test]
fn test_wheel_steps_are_asymmetric() {
    let mut timeline = quarter();
    timeline.wheel(-1.0);
    assert!((timeline.zoom().get() - 1.1).abs() < 1e-9);
    timeline.wheel(3.0);
    assert!((timeline.zoom().get() - 1.05).abs() < 1e-9);
}

#[test]
fn test_zoom_out_extends_domain_not_canvas() {
    let mut timeline = quarter();
    let domain = timeline.frame().domain().unwrap();
    assert_eq!((domain.min, domain.max), (date(-9), date(99)));

    for _ in 0..10 {
        timeline.zoom_out();
    }
    assert!((timeline.zoom().get() - 0.2).abs() < 1e-9);

    let frame = timeline.frame();
    let domain = frame.domain().unwrap();
    assert_eq!(domain.min, date(-9));
    // 90 * (1 / 0.2 - 1 + 0.1) = 369 extra days
    assert_eq!(domain.max, date(90 + 369));
    assert_eq!(frame.content_width(), 1000.0);
    assert_eq!(frame.canvas_width(), 1040.0);
}

#[test]
fn test_zoom_in_widens_canvas_and_clamps() {
    let mut timeline = quarter();
    for _ in 0..30 {
        timeline.zoom_in();
    }
    assert_eq!(timeline.zoom().get(), 5.0);
    assert_eq!(timeline.frame().content_width(), 5000.0);
    assert_eq!(timeline.frame().canvas_width(), 5040.0);

    timeline.reset_zoom();
    assert_eq!(timeline.zoom().get(), 1.0);
    assert_eq!(timeline.frame().canvas_width(), 1040.0);
}

#[test]
fn test_container_resize_relayouts() {
    let mut timeline = quarter();
    let before = timeline.frame().rectangles()[0].width;

    timeline.set_container_width(2040.0);
    assert_eq!(timeline.frame().content_width(), 2000.0);
    let after = timeline.frame().rectangles()[0].width;
    assert!((after - before * 2.0).abs() < 1e-6);
}

#[test]
fn test_header_follows_zoom() {
    let mut timeline = quarter();
    timeline.set_zoom(1.5);

    let summary = timeline.header_summary().unwrap();
    assert_eq!(summary.zoom_percent, 150);
    assert_eq!(summary.range_days, 108);

    let labels: Vec<String> = timeline.month_markers().into_iter().map(|m| m.label).collect();
    assert_eq!(labels, vec!["Dec 2020", "Jan 2021", "Feb 2021", "Mar 2021", "Apr 2021"]);
}

#[test]
fn test_empty_timeline() {
    let mut timeline = TestTimelineBuilder::new().build();
    assert!(timeline.frame().is_empty());
    assert!(timeline.header_summary().is_none());
    assert!(timeline.month_markers().is_empty());
    assert_eq!(timeline.lane_summary(), "0 items in 0 lanes");

    timeline.zoom_in();
    assert!(timeline.frame().domain().is_none());
}
