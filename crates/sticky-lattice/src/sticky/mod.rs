//! Sticky header positioning.
//!
//! Two strategies share the [`HeaderPositioning`] trait:
//!
//! - [`StickyOverlay`] caches one rendered view per header and draws the
//!   active one over the list content.
//! - [`PinnedHeaderController`] pins the header item's own view as a floating
//!   sibling of the list.
//!
//! Both compute the push-off transition with [`sticky_top`].

mod cache;
mod overlay;
mod pinned;
mod positioning;
mod view;

pub use cache::{HeaderCache, RenderedHeader};
pub use overlay::{StickyOverlay, StickyOverlayBuilder};
pub use pinned::{PinnedHeader, PinnedHeaderController, PinnedHost};
pub use positioning::{
    sticky_top, HeaderHitTest, HeaderPlacement, HeaderPositioning, ListFrame, NextGroup,
    VisibleItem,
};
pub use view::HeaderViewFactory;
