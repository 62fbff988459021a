//! Sticky header as a real view pinned beside the list.
//!
//! Instead of drawing a cached copy, [`PinnedHeaderController`] borrows the
//! header item's own view from the list host, floats it above the list and
//! hands it back when the group changes.

use std::sync::Arc;

use sticky_lattice_core::logging::targets;
use sticky_lattice_core::ThreadAffinity;
use sticky_lattice_render::{Point, Rect};

use super::positioning::{
    sticky_top, HeaderHitTest, HeaderPlacement, HeaderPositioning, ListFrame, NextGroup,
    VisibleItem,
};
use crate::model::{HeaderDescriptor, HeaderId, HeaderResolver, ItemProvider};

/// The list-side services the pinned strategy needs.
pub trait PinnedHost {
    /// Handle to an item view.
    type View;
    /// Layout parameters a view had before it was pinned.
    type Params;

    /// Obtain a fresh view bound to the item at `position`.
    fn view_for_position(&mut self, position: usize) -> Self::View;

    /// Return a view to the list's recycling pool.
    fn recycle_view(&mut self, view: Self::View);

    /// Attach `view` as a floating sibling of the list.
    ///
    /// Returns the view's original layout parameters so they can be restored
    /// by [`detach_pinned`](Self::detach_pinned).
    fn attach_pinned(&mut self, view: &mut Self::View) -> Self::Params;

    /// Detach a pinned view and restore its original layout parameters.
    fn detach_pinned(&mut self, view: &mut Self::View, params: Self::Params);

    /// Move a pinned view vertically. `top` is relative to the viewport's top edge.
    fn set_pinned_offset(&mut self, view: &mut Self::View, top: f32);

    /// Bounds of a pinned view before its vertical offset is applied.
    fn pinned_bounds(&self, view: &Self::View) -> Rect;
}

/// The header view currently pinned.
#[derive(Debug)]
pub struct PinnedHeader<V, P> {
    view: V,
    descriptor: HeaderDescriptor,
    original_params: P,
    top: f32,
}

impl<V, P> PinnedHeader<V, P> {
    /// Id of the pinned header.
    pub fn header_id(&self) -> HeaderId {
        self.descriptor.header_id
    }

    /// The header's descriptor at the time it was pinned.
    pub fn descriptor(&self) -> &HeaderDescriptor {
        &self.descriptor
    }

    /// The pinned view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Current vertical offset.
    pub fn top(&self) -> f32 {
        self.top
    }
}

/// Pins the active group's header view to the top of the list.
pub struct PinnedHeaderController<H: PinnedHost> {
    resolver: HeaderResolver,
    host: H,
    pinned: Option<PinnedHeader<H::View, H::Params>>,
    affinity: ThreadAffinity,
}

impl<H: PinnedHost> std::fmt::Debug for PinnedHeaderController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinnedHeaderController")
            .field("pinned", &self.pinned_header_id())
            .field("top", &self.pinned.as_ref().map(PinnedHeader::top))
            .finish_non_exhaustive()
    }
}

impl<H: PinnedHost> PinnedHeaderController<H> {
    /// Create a controller.
    pub fn new(provider: Arc<dyn ItemProvider>, host: H) -> Self {
        Self {
            resolver: HeaderResolver::new(provider),
            host,
            pinned: None,
            affinity: ThreadAffinity::current(),
        }
    }

    /// The list host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the list host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The pinned header, if any.
    pub fn pinned(&self) -> Option<&PinnedHeader<H::View, H::Params>> {
        self.pinned.as_ref()
    }

    /// Id of the pinned header, if any.
    pub fn pinned_header_id(&self) -> Option<HeaderId> {
        self.pinned.as_ref().map(PinnedHeader::header_id)
    }

    fn is_sticky(&self, position: usize) -> bool {
        match self.resolver.descriptor(position) {
            Ok(item) => item.sticky,
            Err(err) => {
                tracing::trace!(target: targets::PINNED, position, %err, "skipping stale item");
                false
            }
        }
    }

    /// The header that should be pinned for `items`.
    ///
    /// The first sticky item that has reached the top edge wins. Failing
    /// that, the group of the topmost bound item decides.
    fn target(&self, items: &[VisibleItem]) -> Option<HeaderDescriptor> {
        let reached_top = items.iter().find_map(|item| {
            let position = item.position?;
            (item.frame.top() <= 0.0 && self.is_sticky(position)).then_some(position)
        });
        let position = reached_top.or_else(|| items.iter().find_map(|item| item.position))?;
        self.resolver.header_descriptor_or_none(position)
    }

    /// Top edge of the next header below the pinned one, if on screen.
    fn next_header_top(&self, items: &[VisibleItem], pinned_position: usize) -> Option<f32> {
        items.iter().find_map(|item| {
            let position = item.position?;
            (position > pinned_position && self.is_sticky(position)).then(|| item.frame.top())
        })
    }

    /// Recompute which header is pinned and where.
    ///
    /// Call on every layout or scroll step. Swaps the pinned view when the
    /// topmost group changes and pushes it up as the next header arrives.
    pub fn update(&mut self, frame: &ListFrame<'_>) -> Option<HeaderPlacement> {
        self.affinity.debug_assert_same_thread();
        let target = self.target(frame.items);

        let keep = match (&self.pinned, &target) {
            (Some(pinned), Some(target)) => pinned.header_id() == target.header_id,
            _ => false,
        };
        if !keep {
            self.unpin();
            if let Some(target) = target {
                self.pin(target);
            }
        }

        let next_top = self
            .pinned
            .as_ref()
            .and_then(|pinned| self.next_header_top(frame.items, pinned.descriptor.position));
        let pinned = self.pinned.as_mut()?;
        let height = self.host.pinned_bounds(&pinned.view).height();
        let next = next_top.map(|top| NextGroup {
            top,
            header_height: 0.0,
        });
        let top = sticky_top(0.0, height, true, next);
        if top != pinned.top {
            self.host.set_pinned_offset(&mut pinned.view, top);
            pinned.top = top;
        }

        Some(HeaderPlacement {
            header_id: pinned.header_id(),
            anchor_position: pinned.descriptor.position,
            left: 0.0,
            top,
        })
    }

    fn pin(&mut self, descriptor: HeaderDescriptor) {
        let mut view = self.host.view_for_position(descriptor.position);
        let original_params = self.host.attach_pinned(&mut view);
        self.host.set_pinned_offset(&mut view, 0.0);
        tracing::debug!(
            target: targets::PINNED,
            header_id = %descriptor.header_id,
            position = descriptor.position,
            "pinned header"
        );
        self.pinned = Some(PinnedHeader {
            view,
            descriptor,
            original_params,
            top: 0.0,
        });
    }

    /// Detach and recycle the pinned view, if any.
    pub fn unpin(&mut self) {
        let Some(PinnedHeader {
            mut view,
            descriptor,
            original_params,
            ..
        }) = self.pinned.take()
        else {
            return;
        };
        self.host.detach_pinned(&mut view, original_params);
        self.host.recycle_view(view);
        tracing::debug!(
            target: targets::PINNED,
            header_id = %descriptor.header_id,
            "unpinned header"
        );
    }

    /// Whether `point` lies on the pinned view at its current offset.
    pub fn find_header_at(&self, point: Point) -> Option<HeaderId> {
        let pinned = self.pinned.as_ref()?;
        self.host
            .pinned_bounds(&pinned.view)
            .translated(Point::new(0.0, pinned.top))
            .contains_inclusive(point)
            .then(|| pinned.header_id())
    }
}

impl<H: PinnedHost> HeaderHitTest for PinnedHeaderController<H> {
    fn find_header_at(&self, point: Point) -> Option<HeaderId> {
        Self::find_header_at(self, point)
    }
}

impl<H: PinnedHost> HeaderPositioning for PinnedHeaderController<H> {
    /// The pinned view floats, so no item ever reserves space.
    fn reserve_offset(&mut self, _position: usize, _viewport_width: f32) -> f32 {
        0.0
    }

    fn update(&mut self, frame: &ListFrame<'_>) -> Option<HeaderPlacement> {
        Self::update(self, frame)
    }

    fn active_header(&self) -> Option<HeaderId> {
        self.pinned_header_id()
    }

    fn invalidate(&mut self) {
        self.affinity.debug_assert_same_thread();
        self.unpin();
    }
}

impl<H: PinnedHost> Drop for PinnedHeaderController<H> {
    fn drop(&mut self) {
        self.unpin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sticky_lattice_render::Size;

    use crate::model::ItemList;

    #[derive(Debug, PartialEq)]
    enum Call {
        Create(usize),
        Attach(usize),
        Offset(usize, f32),
        Detach(usize, u32),
        Recycle(usize),
    }

    #[derive(Default)]
    struct Host {
        calls: Vec<Call>,
    }

    impl PinnedHost for Host {
        type View = usize;
        type Params = u32;

        fn view_for_position(&mut self, position: usize) -> usize {
            self.calls.push(Call::Create(position));
            position
        }

        fn recycle_view(&mut self, view: usize) {
            self.calls.push(Call::Recycle(view));
        }

        fn attach_pinned(&mut self, view: &mut usize) -> u32 {
            self.calls.push(Call::Attach(*view));
            *view as u32 + 1000
        }

        fn detach_pinned(&mut self, view: &mut usize, params: u32) {
            self.calls.push(Call::Detach(*view, params));
        }

        fn set_pinned_offset(&mut self, view: &mut usize, top: f32) {
            self.calls.push(Call::Offset(*view, top));
        }

        fn pinned_bounds(&self, _: &usize) -> Rect {
            Rect::new(0.0, 0.0, 320.0, 20.0)
        }
    }

    fn controller() -> PinnedHeaderController<Host> {
        PinnedHeaderController::new(
            Arc::new(ItemList::with_headers(30, &[(0, 1), (5, 2), (10, 3)])),
            Host::default(),
        )
    }

    fn rows(first: usize, first_top: f32, count: usize) -> Vec<VisibleItem> {
        (0..count)
            .map(|i| {
                let top = first_top + i as f32 * 20.0;
                VisibleItem::new(first + i, Rect::new(0.0, top, 320.0, 20.0))
            })
            .collect()
    }

    #[test]
    fn test_pins_header_that_reached_top() {
        let mut controller = controller();
        let items = rows(5, 0.0, 4);
        let placement = controller
            .update(&ListFrame::new(Size::new(320.0, 80.0), &items))
            .unwrap();
        assert_eq!(placement.header_id, HeaderId::new(2));
        assert_eq!(placement.anchor_position, 5);
        assert_eq!(placement.top, 0.0);
        assert_eq!(
            controller.host().calls,
            vec![Call::Create(5), Call::Attach(5), Call::Offset(5, 0.0)]
        );
    }

    #[test]
    fn test_same_group_keeps_view() {
        let mut controller = controller();
        let viewport = Size::new(320.0, 80.0);
        controller.update(&ListFrame::new(viewport, &rows(5, 0.0, 4)));
        controller.update(&ListFrame::new(viewport, &rows(6, -10.0, 4)));
        assert_eq!(controller.host().calls.len(), 3);
        assert_eq!(controller.pinned_header_id(), Some(HeaderId::new(2)));
    }

    #[test]
    fn test_no_header_for_first_group() {
        let mut controller = controller();
        let items = rows(0, 0.0, 4);
        assert_eq!(
            controller.update(&ListFrame::new(Size::new(320.0, 80.0), &items)),
            None
        );
        assert!(controller.host().calls.is_empty());
    }

    #[test]
    fn test_reserve_offset_is_zero() {
        let mut controller = controller();
        assert_eq!(HeaderPositioning::reserve_offset(&mut controller, 5, 320.0), 0.0);
    }
}
