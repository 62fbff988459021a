//! Sticky Lattice - sticky section headers for virtualized scrolling lists.
//!
//! As the user scrolls, the header of the topmost visible group is pinned to
//! the top of the viewport and pushed off by the next group's header when the
//! two meet. Taps on the pinned header are reported as header clicks.
//!
//! The list engine, the item data and the actual view system stay with the
//! host; this crate talks to them through three traits:
//!
//! - [`ItemProvider`](model::ItemProvider): per-position item data
//! - [`HeaderViewFactory`](sticky::HeaderViewFactory): header view inflation,
//!   measurement and drawing
//! - [`PinnedHost`](sticky::PinnedHost): the list-side services used by the
//!   pinned strategy
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use sticky_lattice::prelude::*;
//!
//! struct Headers;
//!
//! impl HeaderViewFactory for Headers {
//!     type View = HeaderId;
//!     type Canvas = RecordingCanvas;
//!
//!     fn inflate(&self, header: &HeaderDescriptor) -> HeaderId {
//!         header.header_id
//!     }
//!     fn measure(&self, _: &mut HeaderId, width: MeasureSpec, height: MeasureSpec) -> Size {
//!         Size::new(width.resolve(0.0), height.resolve(40.0))
//!     }
//!     fn layout(&self, _: &mut HeaderId, _: Rect) {}
//!     fn draw(&self, view: &HeaderId, canvas: &mut RecordingCanvas, _: Point) {
//!         canvas.draw_view(view.raw());
//!     }
//! }
//!
//! fn main() -> sticky_lattice::Result<()> {
//!     let items = ItemList::with_headers(100, &[(10, 1), (30, 2)]);
//!     let mut overlay = StickyOverlay::builder()
//!         .provider(Arc::new(items))
//!         .factory(Headers)
//!         .build()?;
//!
//!     let visible: Vec<VisibleItem> = (12..20)
//!         .map(|p| VisibleItem::new(p, Rect::new(0.0, (p - 12) as f32 * 48.0, 320.0, 48.0)))
//!         .collect();
//!     let mut canvas = RecordingCanvas::new();
//!     overlay.draw(&ListFrame::new(Size::new(320.0, 480.0), &visible), &mut canvas);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod gesture;
pub mod model;
pub mod prelude;
pub mod sticky;

pub use sticky_lattice_core::{Result, Signal, StickyError};

/// Geometry, measure specs and canvases.
pub mod render {
    pub use sticky_lattice_render::*;
}
