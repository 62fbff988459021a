//! Sticky headers drawn over the list content.
//!
//! [`StickyOverlay`] keeps one rendered view per header id and, on every draw
//! pass, works out which header belongs to the topmost visible group, where it
//! sits after push-off, and draws it on top of the list.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sticky_lattice::prelude::*;
//!
//! let mut overlay = StickyOverlay::builder()
//!     .provider(Arc::new(items))
//!     .factory(my_factory)
//!     .config(StickyConfig::new().render_mode(RenderMode::Overlay))
//!     .build()?;
//!
//! // During item layout:
//! let reserved = overlay.reserve_offset(position, viewport.width);
//!
//! // After the list has drawn its items:
//! overlay.draw(&ListFrame::new(viewport, &visible), &mut canvas);
//! ```

use std::sync::Arc;

use sticky_lattice_core::logging::targets;
use sticky_lattice_core::{Result, StickyError, ThreadAffinity};
use sticky_lattice_render::{Canvas, MeasureSpec, Point, Rect, Size};

use super::cache::{HeaderCache, RenderedHeader};
use super::positioning::{
    find_anchor, find_next_group, sticky_top, Anchor, HeaderHitTest, HeaderPlacement,
    HeaderPositioning, ListFrame, NextGroup,
};
use super::view::HeaderViewFactory;
use crate::config::{RenderMode, StickyConfig};
use crate::model::{HeaderDescriptor, HeaderId, HeaderResolver, ItemProvider};

/// Draws the active section header over a scrolling list.
///
/// Must be used from the thread that created it.
pub struct StickyOverlay<F: HeaderViewFactory> {
    resolver: HeaderResolver,
    factory: F,
    config: StickyConfig,
    cache: HeaderCache<F::View>,
    /// Width constraint for every header; fixed by the first materialization.
    width_spec: Option<MeasureSpec>,
    active: Option<HeaderId>,
    /// Headers placed by the latest pass, in draw order.
    placements: Vec<HeaderPlacement>,
    affinity: ThreadAffinity,
}

impl<F: HeaderViewFactory> std::fmt::Debug for StickyOverlay<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StickyOverlay")
            .field("render_mode", &self.config.render_mode)
            .field("cached_headers", &self.cache.len())
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl<F: HeaderViewFactory> StickyOverlay<F> {
    /// Start building an overlay.
    pub fn builder() -> StickyOverlayBuilder<F> {
        StickyOverlayBuilder::new()
    }

    /// Create an overlay with the default configuration.
    pub fn new(provider: Arc<dyn ItemProvider>, factory: F) -> Self {
        Self::from_parts(HeaderResolver::new(provider), factory, StickyConfig::default())
    }

    fn from_parts(resolver: HeaderResolver, factory: F, config: StickyConfig) -> Self {
        Self {
            resolver,
            factory,
            config,
            cache: HeaderCache::new(),
            width_spec: None,
            active: None,
            placements: Vec::new(),
            affinity: ThreadAffinity::current(),
        }
    }

    /// The configuration this overlay was built with.
    pub fn config(&self) -> &StickyConfig {
        &self.config
    }

    /// The resolver used for header lookups.
    pub fn resolver(&self) -> &HeaderResolver {
        &self.resolver
    }

    /// The host view factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Number of cached header views.
    pub fn header_count(&self) -> usize {
        self.cache.len()
    }

    /// A cached header view, if `id` has been materialized.
    pub fn cached_header(&self, id: HeaderId) -> Option<&RenderedHeader<F::View>> {
        self.cache.get(id)
    }

    /// Header chosen by the latest pass.
    pub fn active_header(&self) -> Option<HeaderId> {
        self.active
    }

    /// Every header placed by the latest pass, active header first.
    pub fn placements(&self) -> &[HeaderPlacement] {
        &self.placements
    }

    /// Space to reserve above the item at `position`.
    ///
    /// Non-zero only in [`RenderMode::Offset`], and only for the first item of
    /// a group that has a header. May materialize that header.
    pub fn reserve_offset(&mut self, position: usize, viewport_width: f32) -> f32 {
        self.affinity.debug_assert_same_thread();
        if self.config.render_mode != RenderMode::Offset {
            return 0.0;
        }
        match self.resolver.is_group_boundary(position) {
            Ok(true) => {}
            Ok(false) => return 0.0,
            Err(err) => {
                tracing::trace!(target: targets::OVERLAY, position, %err, "no offset for stale position");
                return 0.0;
            }
        }
        self.get_or_create_header(position, viewport_width)
            .map_or(0.0, RenderedHeader::measured_height)
    }

    /// The rendered header for `position`'s group, materializing it on a miss.
    ///
    /// Returns `None` when the position has no header or is stale. A cached
    /// header is returned as is: it is never re-inflated or re-measured.
    pub fn get_or_create_header(
        &mut self,
        position: usize,
        viewport_width: f32,
    ) -> Option<&RenderedHeader<F::View>> {
        self.affinity.debug_assert_same_thread();
        let header = self.resolver.header_descriptor_or_none(position)?;
        Some(self.materialize(&header, viewport_width))
    }

    fn materialize(
        &mut self,
        header: &HeaderDescriptor,
        viewport_width: f32,
    ) -> &mut RenderedHeader<F::View> {
        let width_spec = *self
            .width_spec
            .get_or_insert(MeasureSpec::Exactly(viewport_width));
        let factory = &self.factory;
        self.cache.get_or_insert_with(header.header_id, || {
            let mut view = factory.inflate(header);
            let measured = factory.measure(&mut view, width_spec, MeasureSpec::Unspecified);
            let bounds = Rect::new(0.0, 0.0, measured.width, measured.height);
            factory.layout(&mut view, bounds);
            tracing::trace!(
                target: targets::OVERLAY,
                header_id = %header.header_id,
                position = header.position,
                width = measured.width,
                height = measured.height,
                "materialized header view"
            );
            RenderedHeader::new(header.header_id, view, measured, bounds)
        })
    }

    /// Height a header claims inside the list.
    fn reserved_height(&self, measured: Size) -> f32 {
        match self.config.render_mode {
            RenderMode::Offset => measured.height,
            RenderMode::Overlay => 0.0,
        }
    }

    /// Place a header and remember the translation for hit-testing.
    fn place(&mut self, header_id: HeaderId, anchor_position: usize, left: f32, top: f32) {
        let placement = HeaderPlacement {
            header_id,
            anchor_position,
            left,
            top,
        };
        if let Some(header) = self.cache.get_mut(header_id) {
            header.set_translation(placement.translation());
        }
        self.placements.push(placement);
    }

    /// Recompute header placement for a frame without drawing.
    ///
    /// The active header is anchored to the first visible item with a known
    /// position and a header. If that item is the top row the header sticks
    /// to the viewport edge until the next group's header pushes it off.
    pub fn update(&mut self, frame: &ListFrame<'_>) -> Option<HeaderPlacement> {
        self.affinity.debug_assert_same_thread();
        self.placements.clear();
        self.active = None;

        let width = frame.viewport.width;
        let anchor = find_anchor(&self.resolver, frame.items)?;
        let header = anchor.header;
        let item = frame.items[anchor.index];

        let measured = self.materialize(&header, width).measured_size();
        let height = self.reserved_height(measured);
        let first_row = anchor.index == 0;

        let next = if first_row {
            find_next_group(&self.resolver, frame.items, &anchor).map(|(next_item, next_header)| {
                NextGroup {
                    top: next_item.frame.top(),
                    header_height: self.materialize(&next_header, width).measured_height(),
                }
            })
        } else {
            None
        };

        let top = sticky_top(item.frame.top() - height, height, first_row, next);
        self.place(header.header_id, anchor.position, item.frame.left(), top);
        self.active = Some(header.header_id);

        if self.config.draw_following_headers {
            self.place_following(frame, &anchor);
        }

        self.placements.first().copied()
    }

    /// Place the header of every later group that starts on screen.
    fn place_following(&mut self, frame: &ListFrame<'_>, anchor: &Anchor) {
        let width = frame.viewport.width;
        for item in frame.items.iter().skip(anchor.index + 1) {
            let Some(position) = item.position else {
                continue;
            };
            if !matches!(self.resolver.is_group_boundary(position), Ok(true)) {
                continue;
            }
            // A boundary item is sticky, so it is its own header.
            let Some(header) = self.resolver.header_descriptor_or_none(position) else {
                continue;
            };
            if header.header_id == anchor.header.header_id {
                continue;
            }
            let measured = self.materialize(&header, width).measured_size();
            let top = item.frame.top() - self.reserved_height(measured);
            self.place(header.header_id, position, item.frame.left(), top);
        }
    }

    /// Update placement for `frame` and draw the placed headers.
    ///
    /// Each header is drawn inside its own save/restore pair with the canvas
    /// translated to the header's position. Returns the active placement.
    pub fn draw(&mut self, frame: &ListFrame<'_>, canvas: &mut F::Canvas) -> Option<HeaderPlacement> {
        let active = self.update(frame);
        for placement in &self.placements {
            let Some(header) = self.cache.get(placement.header_id) else {
                continue;
            };
            let translation = placement.translation();
            canvas.save();
            canvas.translate(translation.x, translation.y);
            self.factory.draw(header.view(), canvas, translation);
            canvas.restore();
        }
        active
    }

    /// The header drawn under `point` by the latest pass.
    ///
    /// Bounds are inclusive on every edge. When headers overlap the one drawn
    /// last wins.
    pub fn find_header_at(&self, point: Point) -> Option<HeaderId> {
        self.cache.find_at(
            point,
            self.placements.iter().rev().map(|placement| placement.header_id),
        )
    }

    /// Drop every cached header view.
    ///
    /// Call this when item data changes. The next pass re-inflates whatever
    /// it needs.
    pub fn invalidate(&mut self) {
        self.affinity.debug_assert_same_thread();
        let released = self.release_all();
        self.width_spec = None;
        self.active = None;
        self.placements.clear();
        tracing::debug!(target: targets::OVERLAY, released, "header cache invalidated");
    }

    fn release_all(&mut self) -> usize {
        let factory = &self.factory;
        let mut released = 0;
        for view in self.cache.drain() {
            factory.release(view);
            released += 1;
        }
        released
    }
}

impl<F: HeaderViewFactory> HeaderHitTest for StickyOverlay<F> {
    fn find_header_at(&self, point: Point) -> Option<HeaderId> {
        Self::find_header_at(self, point)
    }
}

impl<F: HeaderViewFactory> HeaderPositioning for StickyOverlay<F> {
    fn reserve_offset(&mut self, position: usize, viewport_width: f32) -> f32 {
        Self::reserve_offset(self, position, viewport_width)
    }

    fn update(&mut self, frame: &ListFrame<'_>) -> Option<HeaderPlacement> {
        Self::update(self, frame)
    }

    fn active_header(&self) -> Option<HeaderId> {
        Self::active_header(self)
    }

    fn invalidate(&mut self) {
        Self::invalidate(self)
    }
}

impl<F: HeaderViewFactory> Drop for StickyOverlay<F> {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// Builder for [`StickyOverlay`].
pub struct StickyOverlayBuilder<F> {
    provider: Option<Arc<dyn ItemProvider>>,
    factory: Option<F>,
    config: StickyConfig,
}

impl<F: HeaderViewFactory> Default for StickyOverlayBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: HeaderViewFactory> StickyOverlayBuilder<F> {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            provider: None,
            factory: None,
            config: StickyConfig::default(),
        }
    }

    /// Set the item data provider. Required.
    pub fn provider(mut self, provider: Arc<dyn ItemProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the header view factory. Required.
    pub fn factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: StickyConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the render mode.
    pub fn render_mode(mut self, mode: RenderMode) -> Self {
        self.config.render_mode = mode;
        self
    }

    /// Build the overlay.
    ///
    /// # Errors
    ///
    /// - [`StickyError::MissingCollaborator`] if the provider or factory is unset.
    /// - [`StickyError::InvalidConfig`] if the configuration does not validate.
    pub fn build(self) -> Result<StickyOverlay<F>> {
        let provider = self
            .provider
            .ok_or(StickyError::MissingCollaborator("item provider"))?;
        let factory = self
            .factory
            .ok_or(StickyError::MissingCollaborator("header view factory"))?;
        self.config.validate()?;
        Ok(StickyOverlay::from_parts(
            HeaderResolver::new(provider),
            factory,
            self.config,
        ))
    }
}
