//! Provider traffic per pass: after the anchor row is resolved, every other
//! lookup in a frame costs a constant number of provider calls per visible row.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::*;
use sticky_lattice::prelude::*;

const ITEMS: usize = 100_000;
const FIRST: usize = 50_000;
const VISIBLE: usize = 10;

/// One group header far above the viewport, the next one on screen.
#[derive(Debug, Default)]
struct CountingProvider {
    calls: AtomicUsize,
}

impl CountingProvider {
    fn take_calls(&self) -> usize {
        self.calls.swap(0, Ordering::SeqCst)
    }
}

impl ItemProvider for CountingProvider {
    fn item_count(&self) -> usize {
        ITEMS
    }

    fn descriptor(&self, position: usize) -> Option<ItemDescriptor> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match position {
            1 => Some(ItemDescriptor::header(1, LayoutKey::default())),
            p if p == FIRST + 5 => Some(ItemDescriptor::header(2, LayoutKey::default())),
            p if p < ITEMS => Some(ItemDescriptor::item(1_000 + p as u64)),
            _ => None,
        }
    }
}

/// Provider calls needed to resolve the anchor row on its own.
fn anchor_walk(provider: &Arc<CountingProvider>) -> usize {
    let resolver = HeaderResolver::new(provider.clone());
    provider.take_calls();
    assert_eq!(resolver.header_id(FIRST).unwrap(), HeaderId::new(1));
    provider.take_calls()
}

#[test]
fn test_overlay_frame_cost_bounded_by_visible_rows() {
    init_tracing();
    let provider = Arc::new(CountingProvider::default());
    let baseline = anchor_walk(&provider);

    let mut overlay = StickyOverlay::builder()
        .provider(provider.clone())
        .factory(MockFactory::new())
        .config(StickyConfig::new().draw_following_headers(true))
        .build()
        .unwrap();
    let items = rows(FIRST, 0.0, VISIBLE);

    let placement = overlay.update(&ListFrame::new(VIEWPORT, &items)).unwrap();
    assert_eq!(placement.header_id, HeaderId::new(1));
    assert_eq!(overlay.placements().len(), 2);

    let calls = provider.take_calls();
    assert!(
        calls <= baseline + 3 * VISIBLE,
        "{calls} provider calls for one frame, anchor walk alone is {baseline}"
    );
}

#[test]
fn test_reserve_offset_is_constant_cost() {
    let provider = Arc::new(CountingProvider::default());
    let mut overlay = StickyOverlay::builder()
        .provider(provider.clone())
        .factory(MockFactory::new())
        .build()
        .unwrap();
    provider.take_calls();

    assert_eq!(overlay.reserve_offset(FIRST + 3, 320.0), 0.0);
    assert!(provider.take_calls() <= 1);

    assert_eq!(overlay.reserve_offset(FIRST + 5, 320.0), HEADER);
    assert!(provider.take_calls() <= 2);
}

#[test]
fn test_pinned_frame_cost_bounded_by_visible_rows() {
    let provider = Arc::new(CountingProvider::default());
    let baseline = anchor_walk(&provider);

    let mut controller = PinnedHeaderController::new(provider.clone(), MockHost::default());
    let items = rows(FIRST, 0.0, VISIBLE);

    let placement = controller.update(&ListFrame::new(VIEWPORT, &items)).unwrap();
    assert_eq!(placement.header_id, HeaderId::new(1));

    let calls = provider.take_calls();
    assert!(
        calls <= baseline + 3 * VISIBLE,
        "{calls} provider calls for one frame, anchor walk alone is {baseline}"
    );
}
