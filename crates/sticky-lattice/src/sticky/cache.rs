//! Cache of materialized header views, keyed by header id.

use std::collections::hash_map::{Entry, HashMap};

use sticky_lattice_render::{Point, Rect, Size};

use crate::model::HeaderId;

/// A header view that has been inflated, measured and laid out.
#[derive(Debug)]
pub struct RenderedHeader<V> {
    header_id: HeaderId,
    view: V,
    measured: Size,
    bounds: Rect,
    translation: Point,
}

impl<V> RenderedHeader<V> {
    /// Wrap a freshly laid-out view.
    pub fn new(header_id: HeaderId, view: V, measured: Size, bounds: Rect) -> Self {
        Self {
            header_id,
            view,
            measured,
            bounds,
            translation: Point::ZERO,
        }
    }

    /// The header this view renders.
    pub fn header_id(&self) -> HeaderId {
        self.header_id
    }

    /// The host view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Size reported by the measure pass.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Height reported by the measure pass.
    pub fn measured_height(&self) -> f32 {
        self.measured.height
    }

    /// Layout bounds, before translation.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Translation applied by the most recent draw.
    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Bounds as last drawn on screen.
    pub fn hit_rect(&self) -> Rect {
        self.bounds.translated(self.translation)
    }

    pub(crate) fn set_translation(&mut self, translation: Point) {
        self.translation = translation;
    }

    pub(crate) fn into_view(self) -> V {
        self.view
    }
}

/// Mapping from header id to its single rendered view.
///
/// Entries are only ever added on a miss and only removed by [`drain`]
/// (cache invalidation). Lookups never re-measure.
///
/// [`drain`]: HeaderCache::drain
#[derive(Debug)]
pub struct HeaderCache<V> {
    entries: HashMap<HeaderId, RenderedHeader<V>>,
}

impl<V> Default for HeaderCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HeaderCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of cached headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a header is cached.
    pub fn contains(&self, id: HeaderId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Look up a cached header.
    pub fn get(&self, id: HeaderId) -> Option<&RenderedHeader<V>> {
        self.entries.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: HeaderId) -> Option<&mut RenderedHeader<V>> {
        self.entries.get_mut(&id)
    }

    /// Return the cached header for `id`, materializing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, id: HeaderId, materialize: F) -> &mut RenderedHeader<V>
    where
        F: FnOnce() -> RenderedHeader<V>,
    {
        match self.entries.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let header = materialize();
                debug_assert_eq!(header.header_id, id);
                entry.insert(header)
            }
        }
    }

    /// Iterate over cached headers in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RenderedHeader<V>> {
        self.entries.values()
    }

    /// First of `candidates` whose on-screen bounds contain `point`.
    ///
    /// Edges are inclusive. Candidates that are not cached are skipped.
    pub fn find_at<I>(&self, point: Point, candidates: I) -> Option<HeaderId>
    where
        I: IntoIterator<Item = HeaderId>,
    {
        candidates.into_iter().find(|id| {
            self.entries
                .get(id)
                .is_some_and(|header| header.hit_rect().contains_inclusive(point))
        })
    }

    /// Remove every entry, yielding the views so the caller can release them.
    pub fn drain(&mut self) -> impl Iterator<Item = V> + '_ {
        self.entries.drain().map(|(_, header)| header.into_view())
    }
}
