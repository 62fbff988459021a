//! The positioning contract shared by both header strategies, and the
//! push-off computation they both use.

use sticky_lattice_render::{Point, Rect, Size};

use crate::model::{GroupScan, HeaderDescriptor, HeaderId, HeaderResolver};

/// One on-screen item in the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleItem {
    /// Adapter position, or `None` while the list has not bound it yet.
    pub position: Option<usize>,
    /// Bounds in viewport coordinates (y = 0 is the viewport's top edge).
    pub frame: Rect,
}

impl VisibleItem {
    /// A bound item.
    pub fn new(position: usize, frame: Rect) -> Self {
        Self {
            position: Some(position),
            frame,
        }
    }

    /// An item whose adapter position is unknown.
    pub fn unbound(frame: Rect) -> Self {
        Self {
            position: None,
            frame,
        }
    }
}

/// Snapshot of the list for one draw or layout pass.
///
/// `items` are ordered top to bottom as they appear on screen.
#[derive(Debug, Clone, Copy)]
pub struct ListFrame<'a> {
    /// Size of the list viewport.
    pub viewport: Size,
    /// The visible items.
    pub items: &'a [VisibleItem],
}

impl<'a> ListFrame<'a> {
    /// Create a frame snapshot.
    pub fn new(viewport: Size, items: &'a [VisibleItem]) -> Self {
        Self { viewport, items }
    }
}

/// Where a header ended up for the current pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderPlacement {
    /// The header drawn or pinned.
    pub header_id: HeaderId,
    /// Adapter position of the visible item the header is anchored to.
    pub anchor_position: usize,
    /// Horizontal translation applied to the header.
    pub left: f32,
    /// Vertical translation applied to the header. Negative while pushed off.
    pub top: f32,
}

impl HeaderPlacement {
    /// The translation as a point.
    pub fn translation(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Answers "which header is under this point?".
///
/// This is all gesture routing needs from a positioning strategy.
pub trait HeaderHitTest {
    /// The header whose current bounds contain `point`, if any.
    fn find_header_at(&self, point: Point) -> Option<HeaderId>;
}

/// A strategy that decides where the sticky header goes each pass.
///
/// Implemented by [`StickyOverlay`](super::StickyOverlay), which draws cached
/// header views over the list, and by
/// [`PinnedHeaderController`](super::PinnedHeaderController), which pins a real
/// view as a sibling of the list.
pub trait HeaderPositioning: HeaderHitTest {
    /// Space to reserve above the item at `position` during item layout.
    fn reserve_offset(&mut self, position: usize, viewport_width: f32) -> f32;

    /// Recompute the active header for a frame.
    fn update(&mut self, frame: &ListFrame<'_>) -> Option<HeaderPlacement>;

    /// Header chosen by the most recent [`update`](Self::update).
    fn active_header(&self) -> Option<HeaderId>;

    /// Forget every cached or pinned header view.
    fn invalidate(&mut self);
}

/// The first item of the next group below the active one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NextGroup {
    /// Top edge of the next group's first visible item.
    pub top: f32,
    /// Height the next group's header occupies above that edge.
    pub header_height: f32,
}

/// Compute the active header's top edge.
///
/// - `natural_top`: where the header sits relative to its anchor item.
/// - `header_height`: height the active header claims in the list.
/// - `first_row`: whether the anchor item is the topmost on-screen row.
/// - `next`: the next visible group, if any.
///
/// Only a header anchored to the first row sticks. It is clamped to the top
/// edge unless the next group's header would overlap it, in which case it is
/// pushed up to `next.top - (header_height + next.header_height)`.
pub fn sticky_top(
    natural_top: f32,
    header_height: f32,
    first_row: bool,
    next: Option<NextGroup>,
) -> f32 {
    if !first_row {
        return natural_top;
    }
    if let Some(next) = next {
        let pushed = next.top - (header_height + next.header_height);
        if pushed < 0.0 {
            return pushed;
        }
    }
    natural_top.max(0.0)
}

/// The active anchor of a frame: the first bound item that has a header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Anchor {
    pub index: usize,
    pub position: usize,
    pub header: HeaderDescriptor,
}

pub(crate) fn find_anchor(resolver: &HeaderResolver, items: &[VisibleItem]) -> Option<Anchor> {
    let mut scan = GroupScan::new(resolver);
    items.iter().enumerate().find_map(|(index, item)| {
        let position = item.position?;
        let header = scan.header_descriptor_or_none(position)?;
        Some(Anchor {
            index,
            position,
            header,
        })
    })
}

/// First item after `anchor` belonging to a different group, with its header.
///
/// Unbound and stale items are skipped. Returns `None` when the next group
/// has no header, since nothing can push the active one.
pub(crate) fn find_next_group(
    resolver: &HeaderResolver,
    items: &[VisibleItem],
    anchor: &Anchor,
) -> Option<(VisibleItem, HeaderDescriptor)> {
    let mut scan = GroupScan::resume(resolver, anchor.position, Some(anchor.header));
    for item in items.iter().skip(anchor.index + 1) {
        let Some(position) = item.position else {
            continue;
        };
        let Ok(header) = scan.header_descriptor(position) else {
            continue;
        };
        let header_id = header.map_or(HeaderId::NONE, |header| header.header_id);
        if header_id != anchor.header.header_id {
            return header.map(|header| (*item, header));
        }
    }
    None
}
