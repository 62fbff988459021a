//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use sticky_lattice::prelude::*;

/// Row height used by every fixture list.
pub const ROW: f32 = 48.0;

/// Default header height.
pub const HEADER: f32 = 40.0;

/// Viewport used by every fixture frame.
pub const VIEWPORT: Size = Size::new(320.0, 480.0);

/// Install a test subscriber so `RUST_LOG=sticky_lattice=trace` shows the
/// component logs. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 100 items with sticky items at 0, 10, 30, 55 and 80 (ids 100 to 104).
pub fn grouped_items() -> Arc<ItemList> {
    Arc::new(ItemList::with_headers(
        100,
        &[(0, 100), (10, 101), (30, 102), (55, 103), (80, 104)],
    ))
}

/// Consecutive rows of height [`ROW`] starting at `first`.
pub fn rows(first: usize, first_top: f32, count: usize) -> Vec<VisibleItem> {
    (0..count)
        .map(|i| {
            let top = first_top + i as f32 * ROW;
            VisibleItem::new(first + i, Rect::new(0.0, top, VIEWPORT.width, ROW))
        })
        .collect()
}

/// Visible item with an explicit frame.
pub fn item(position: usize, top: f32, height: f32) -> VisibleItem {
    VisibleItem::new(position, Rect::new(0.0, top, VIEWPORT.width, height))
}

/// Call counters shared between a [`MockFactory`] and the test.
#[derive(Debug, Clone, Default)]
pub struct Counters {
    pub inflated: Arc<AtomicUsize>,
    pub measured: Arc<AtomicUsize>,
    pub released: Arc<AtomicUsize>,
}

impl Counters {
    pub fn inflated(&self) -> usize {
        self.inflated.load(Ordering::SeqCst)
    }

    pub fn measured(&self) -> usize {
        self.measured.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

/// A header view produced by [`MockFactory`].
#[derive(Debug, Clone, PartialEq)]
pub struct MockView {
    pub header_id: HeaderId,
    /// Inflation order, distinguishes re-inflated views of the same header.
    pub serial: usize,
    pub bounds: Rect,
}

/// View factory that records calls and draws onto a [`RecordingCanvas`].
#[derive(Debug, Default)]
pub struct MockFactory {
    pub counters: Counters,
    heights: HashMap<HeaderId, f32>,
}

impl MockFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give one header a height other than [`HEADER`].
    pub fn with_height(mut self, id: u64, height: f32) -> Self {
        self.heights.insert(HeaderId::new(id), height);
        self
    }
}

impl HeaderViewFactory for MockFactory {
    type View = MockView;
    type Canvas = RecordingCanvas;

    fn inflate(&self, header: &HeaderDescriptor) -> MockView {
        let serial = self.counters.inflated.fetch_add(1, Ordering::SeqCst);
        MockView {
            header_id: header.header_id,
            serial,
            bounds: Rect::ZERO,
        }
    }

    fn measure(&self, view: &mut MockView, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.counters.measured.fetch_add(1, Ordering::SeqCst);
        let desired = self.heights.get(&view.header_id).copied().unwrap_or(HEADER);
        Size::new(width.resolve(0.0), height.resolve(desired))
    }

    fn layout(&self, view: &mut MockView, bounds: Rect) {
        view.bounds = bounds;
    }

    fn draw(&self, view: &MockView, canvas: &mut RecordingCanvas, _translation: Point) {
        canvas.draw_view(view.header_id.raw());
    }

    fn release(&self, _view: MockView) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Build an overlay over [`grouped_items`].
pub fn overlay(config: StickyConfig) -> (StickyOverlay<MockFactory>, Counters) {
    let factory = MockFactory::new();
    let counters = factory.counters.clone();
    let overlay = StickyOverlay::builder()
        .provider(grouped_items())
        .factory(factory)
        .config(config)
        .build()
        .expect("fixture overlay builds");
    (overlay, counters)
}

/// A call made on [`MockHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Create(usize),
    Attach(usize),
    Offset(usize, f32),
    Detach(usize, String),
    Recycle(usize),
}

/// A pinned-strategy host that logs every call.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    pub calls: Arc<Mutex<Vec<HostCall>>>,
}

impl MockHost {
    pub fn take_calls(&self) -> Vec<HostCall> {
        std::mem::take(&mut *self.calls.lock())
    }
}

/// View handed out by [`MockHost`]: the position it was bound to.
#[derive(Debug, PartialEq)]
pub struct HostView(pub usize);

impl PinnedHost for MockHost {
    type View = HostView;
    type Params = String;

    fn view_for_position(&mut self, position: usize) -> HostView {
        self.calls.lock().push(HostCall::Create(position));
        HostView(position)
    }

    fn recycle_view(&mut self, view: HostView) {
        self.calls.lock().push(HostCall::Recycle(view.0));
    }

    fn attach_pinned(&mut self, view: &mut HostView) -> String {
        self.calls.lock().push(HostCall::Attach(view.0));
        format!("params-{}", view.0)
    }

    fn detach_pinned(&mut self, view: &mut HostView, params: String) {
        self.calls.lock().push(HostCall::Detach(view.0, params));
    }

    fn set_pinned_offset(&mut self, view: &mut HostView, top: f32) {
        self.calls.lock().push(HostCall::Offset(view.0, top));
    }

    fn pinned_bounds(&self, _view: &HostView) -> Rect {
        Rect::new(0.0, 0.0, VIEWPORT.width, HEADER)
    }
}

/// Build a pinned controller over [`grouped_items`].
pub fn pinned() -> (PinnedHeaderController<MockHost>, MockHost) {
    let host = MockHost::default();
    (PinnedHeaderController::new(grouped_items(), host.clone()), host)
}
