//! Tests for the pinned-view header strategy.

mod common;

use common::*;
use sticky_lattice::prelude::*;

#[test]
fn test_pins_header_reaching_top() {
    init_tracing();
    let (mut controller, host) = pinned();

    let placement = controller
        .update(&ListFrame::new(VIEWPORT, &rows(10, 0.0, 8)))
        .unwrap();

    assert_eq!(placement.header_id, HeaderId::new(101));
    assert_eq!(placement.anchor_position, 10);
    assert_eq!(placement.top, 0.0);
    assert_eq!(
        host.take_calls(),
        vec![
            HostCall::Create(10),
            HostCall::Attach(10),
            HostCall::Offset(10, 0.0)
        ]
    );
}

#[test]
fn test_scrolling_within_group_keeps_view() {
    let (mut controller, host) = pinned();
    controller.update(&ListFrame::new(VIEWPORT, &rows(10, 0.0, 8)));
    host.take_calls();

    controller.update(&ListFrame::new(VIEWPORT, &rows(12, -20.0, 8)));
    controller.update(&ListFrame::new(VIEWPORT, &rows(18, -5.0, 8)));

    assert!(host.take_calls().is_empty());
    assert_eq!(controller.pinned_header_id(), Some(HeaderId::new(101)));
}

#[test]
fn test_next_header_pushes_then_replaces() {
    let (mut controller, host) = pinned();
    controller.update(&ListFrame::new(VIEWPORT, &rows(28, -10.0, 8)));
    assert_eq!(controller.pinned_header_id(), Some(HeaderId::new(101)));
    host.take_calls();

    // Header 102 is inline at y = 23, overlapping the 40px pinned view.
    let placement = controller
        .update(&ListFrame::new(VIEWPORT, &rows(29, -25.0, 6)))
        .unwrap();
    assert_eq!(placement.top, -17.0);
    assert_eq!(host.take_calls(), vec![HostCall::Offset(10, -17.0)]);

    assert_eq!(controller.find_header_at(Point::new(10.0, 23.0)), Some(HeaderId::new(101)));
    assert_eq!(controller.find_header_at(Point::new(10.0, 23.5)), None);

    // Header 102 reaches the top edge and takes over.
    let placement = controller
        .update(&ListFrame::new(VIEWPORT, &rows(30, -2.0, 6)))
        .unwrap();
    assert_eq!(placement.header_id, HeaderId::new(102));
    assert_eq!(placement.top, 0.0);
    assert_eq!(
        host.take_calls(),
        vec![
            HostCall::Detach(10, "params-10".to_string()),
            HostCall::Recycle(10),
            HostCall::Create(30),
            HostCall::Attach(30),
            HostCall::Offset(30, 0.0),
        ]
    );
}

#[test]
fn test_middle_of_group_pins_its_header() {
    let (mut controller, host) = pinned();

    let placement = controller
        .update(&ListFrame::new(VIEWPORT, &rows(32, -5.0, 6)))
        .unwrap();

    assert_eq!(placement.header_id, HeaderId::new(102));
    assert_eq!(placement.anchor_position, 30);
    assert_eq!(host.take_calls()[0], HostCall::Create(30));
}

#[test]
fn test_first_group_unpins() {
    let (mut controller, host) = pinned();
    controller.update(&ListFrame::new(VIEWPORT, &rows(10, 0.0, 8)));
    host.take_calls();

    assert_eq!(controller.update(&ListFrame::new(VIEWPORT, &rows(0, 0.0, 8))), None);
    assert_eq!(
        host.take_calls(),
        vec![HostCall::Detach(10, "params-10".to_string()), HostCall::Recycle(10)]
    );
    assert!(controller.pinned().is_none());
    assert_eq!(controller.find_header_at(Point::new(10.0, 10.0)), None);
}

#[test]
fn test_unbound_and_stale_items() {
    let (mut controller, host) = pinned();

    assert_eq!(controller.update(&ListFrame::new(VIEWPORT, &rows(150, 0.0, 4))), None);
    assert!(host.take_calls().is_empty());

    let mut items = vec![VisibleItem::unbound(Rect::new(0.0, -48.0, 320.0, 48.0))];
    items.extend(rows(10, 0.0, 4));
    let placement = controller.update(&ListFrame::new(VIEWPORT, &items)).unwrap();
    assert_eq!(placement.header_id, HeaderId::new(101));
}

#[test]
fn test_invalidate_and_drop_release_view() {
    let (mut controller, host) = pinned();
    controller.update(&ListFrame::new(VIEWPORT, &rows(10, 0.0, 8)));
    host.take_calls();

    HeaderPositioning::invalidate(&mut controller);
    assert_eq!(
        host.take_calls(),
        vec![HostCall::Detach(10, "params-10".to_string()), HostCall::Recycle(10)]
    );

    controller.update(&ListFrame::new(VIEWPORT, &rows(56, 0.0, 8)));
    host.take_calls();
    drop(controller);
    assert_eq!(
        host.take_calls(),
        vec![HostCall::Detach(55, "params-55".to_string()), HostCall::Recycle(55)]
    );
}

#[test]
fn test_reserve_offset_is_zero() {
    let (mut controller, _host) = pinned();
    for position in [0, 10, 11, 30] {
        assert_eq!(HeaderPositioning::reserve_offset(&mut controller, position, 320.0), 0.0);
    }
}

fn active_after(strategy: &mut dyn HeaderPositioning, items: &[VisibleItem]) -> Option<HeaderId> {
    strategy.update(&ListFrame::new(VIEWPORT, items));
    strategy.active_header()
}

#[test]
fn test_both_strategies_agree_on_active_header() {
    let (mut controller, _host) = pinned();
    let (mut overlay, _) = overlay(StickyConfig::new().render_mode(RenderMode::Overlay));

    for (first, top, expected) in [
        (32, -5.0, Some(102)),
        (12, -20.0, Some(101)),
        (0, 0.0, None),
        (81, -30.0, Some(104)),
    ] {
        let items = rows(first, top, 8);
        let expected = expected.map(HeaderId::new);
        assert_eq!(active_after(&mut controller, &items), expected, "pinned at {first}");
        assert_eq!(active_after(&mut overlay, &items), expected, "overlay at {first}");
    }
}
