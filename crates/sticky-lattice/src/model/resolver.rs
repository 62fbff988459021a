//! Maps list positions to the header of their group.
//!
//! A group is a contiguous run of positions sharing one [`HeaderId`]. The
//! header of a position is defined by the nearest sticky item at or before it,
//! never counting position 0: a group boundary needs a preceding item to
//! compare against, so position 0 never has a header.

use std::sync::Arc;

use sticky_lattice_core::logging::targets;
use sticky_lattice_core::{Result, StickyError};

use super::header_id::HeaderId;
use super::provider::{HeaderDescriptor, ItemDescriptor, ItemProvider};

/// Resolves header identity for list positions.
///
/// Every query goes straight to the [`ItemProvider`]; nothing is cached, so
/// the resolver is always consistent with the provider's current data.
#[derive(Clone)]
pub struct HeaderResolver {
    provider: Arc<dyn ItemProvider>,
}

impl std::fmt::Debug for HeaderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderResolver")
            .field("item_count", &self.provider.item_count())
            .finish()
    }
}

impl HeaderResolver {
    /// Create a resolver over an item provider.
    pub fn new(provider: Arc<dyn ItemProvider>) -> Self {
        Self { provider }
    }

    /// The provider queried by this resolver.
    pub fn provider(&self) -> &Arc<dyn ItemProvider> {
        &self.provider
    }

    /// Item data for one position.
    ///
    /// # Errors
    ///
    /// [`StickyError::NotFound`] if the provider has no data for `position`.
    pub fn descriptor(&self, position: usize) -> Result<ItemDescriptor> {
        self.provider
            .descriptor(position)
            .ok_or(StickyError::NotFound { position })
    }

    /// Resolve the header that owns `position`.
    ///
    /// Walks backward from `position` toward (not including) 0 and returns
    /// the first sticky item found, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// [`StickyError::NotFound`] if any position visited by the walk is stale.
    pub fn header_descriptor(&self, position: usize) -> Result<Option<HeaderDescriptor>> {
        self.nearest_sticky(1, position)
    }

    /// Resolve `position` from an earlier position whose header is known.
    ///
    /// Only `(earlier, position]` is walked: with no sticky item in that
    /// range, `position` shares `earlier_header`. Falls back to a full walk
    /// when `position` is not after `earlier`.
    pub fn header_descriptor_since(
        &self,
        position: usize,
        earlier: usize,
        earlier_header: Option<HeaderDescriptor>,
    ) -> Result<Option<HeaderDescriptor>> {
        if position <= earlier {
            return self.header_descriptor(position);
        }
        Ok(self.nearest_sticky(earlier + 1, position)?.or(earlier_header))
    }

    /// Last sticky item in `lowest..=position`, walking backward.
    fn nearest_sticky(&self, lowest: usize, position: usize) -> Result<Option<HeaderDescriptor>> {
        for candidate in (lowest.max(1)..=position).rev() {
            let item = self.descriptor(candidate)?;
            if item.sticky {
                return Ok(Some(HeaderDescriptor {
                    header_id: item.id,
                    layout_key: item.layout_key,
                    is_sticky: true,
                    position: candidate,
                }));
            }
        }
        Ok(None)
    }

    /// Header id for `position`, or [`HeaderId::NONE`].
    pub fn header_id(&self, position: usize) -> Result<HeaderId> {
        Ok(self
            .header_descriptor(position)?
            .map_or(HeaderId::NONE, |header| header.header_id))
    }

    /// True iff `position` starts a new group.
    ///
    /// Groups only start at sticky items, so past position 0 this is a single
    /// provider lookup.
    pub fn is_group_boundary(&self, position: usize) -> Result<bool> {
        if position == 0 {
            return Ok(true);
        }
        Ok(self.descriptor(position)?.sticky)
    }

    /// Lenient header lookup for draw and layout passes.
    ///
    /// A stale position yields [`HeaderId::NONE`] and a trace event.
    pub fn header_id_or_none(&self, position: usize) -> HeaderId {
        match self.header_id(position) {
            Ok(id) => id,
            Err(err) => {
                tracing::trace!(target: targets::RESOLVER, position, %err, "treating stale position as headerless");
                HeaderId::NONE
            }
        }
    }

    /// Lenient descriptor lookup, see [`header_id_or_none`](Self::header_id_or_none).
    pub fn header_descriptor_or_none(&self, position: usize) -> Option<HeaderDescriptor> {
        match self.header_descriptor(position) {
            Ok(header) => header,
            Err(err) => {
                tracing::trace!(target: targets::RESOLVER, position, %err, "treating stale position as headerless");
                None
            }
        }
    }

    /// Whether `position` has a header. Stale positions have none.
    pub fn has_header(&self, position: usize) -> bool {
        self.header_id_or_none(position).is_some()
    }
}

/// Resolves headers for the visible rows of one pass, front to back.
///
/// Each lookup resumes from the previous answer, so a run of ascending
/// positions costs one full walk for the first row and then one provider
/// call per position covered.
#[derive(Debug)]
pub struct GroupScan<'a> {
    resolver: &'a HeaderResolver,
    last: Option<(usize, Option<HeaderDescriptor>)>,
}

impl<'a> GroupScan<'a> {
    pub fn new(resolver: &'a HeaderResolver) -> Self {
        Self {
            resolver,
            last: None,
        }
    }

    /// Start from a position whose header is already resolved.
    pub fn resume(
        resolver: &'a HeaderResolver,
        position: usize,
        header: Option<HeaderDescriptor>,
    ) -> Self {
        Self {
            resolver,
            last: Some((position, header)),
        }
    }

    /// Header of `position`. A stale lookup leaves the scan where it was.
    pub fn header_descriptor(&mut self, position: usize) -> Result<Option<HeaderDescriptor>> {
        let header = match self.last {
            Some((earlier, earlier_header)) => {
                self.resolver
                    .header_descriptor_since(position, earlier, earlier_header)?
            }
            None => self.resolver.header_descriptor(position)?,
        };
        self.last = Some((position, header));
        Ok(header)
    }

    /// Lenient form of [`header_descriptor`](Self::header_descriptor).
    pub fn header_descriptor_or_none(&mut self, position: usize) -> Option<HeaderDescriptor> {
        match self.header_descriptor(position) {
            Ok(header) => header,
            Err(err) => {
                tracing::trace!(target: targets::RESOLVER, position, %err, "treating stale position as headerless");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::provider::ItemList;

    fn grouped() -> HeaderResolver {
        let list = ItemList::with_headers(
            100,
            &[(0, 100), (10, 101), (30, 102), (55, 103), (80, 104)],
        );
        HeaderResolver::new(Arc::new(list))
    }

    #[test]
    fn test_position_zero_has_no_header() {
        let resolver = grouped();
        assert_eq!(resolver.header_id(0).unwrap(), HeaderId::NONE);
        assert!(!resolver.has_header(0));
    }

    #[test]
    fn test_positions_before_first_counted_header() {
        let resolver = grouped();
        // Position 0 is sticky but never counted, so 1..10 have no header.
        for position in 1..10 {
            assert_eq!(resolver.header_id(position).unwrap(), HeaderId::NONE);
        }
    }

    #[test]
    fn test_group_membership() {
        let resolver = grouped();
        assert_eq!(resolver.header_id(10).unwrap(), HeaderId::new(101));
        assert_eq!(resolver.header_id(29).unwrap(), HeaderId::new(101));
        assert_eq!(resolver.header_id(30).unwrap(), HeaderId::new(102));
        assert_eq!(resolver.header_id(32).unwrap(), HeaderId::new(102));
        assert_eq!(resolver.header_id(99).unwrap(), HeaderId::new(104));
    }

    #[test]
    fn test_header_descriptor_points_at_sticky_item() {
        let resolver = grouped();
        let header = resolver.header_descriptor(42).unwrap().unwrap();
        assert_eq!(header.position, 30);
        assert_eq!(header.header_id, HeaderId::new(102));
        assert!(header.is_sticky);
    }

    #[test]
    fn test_group_boundary_matches_header_change() {
        let resolver = grouped();
        assert!(resolver.is_group_boundary(0).unwrap());
        for position in 1..100 {
            let expected =
                resolver.header_id(position - 1).unwrap() != resolver.header_id(position).unwrap();
            assert_eq!(resolver.is_group_boundary(position).unwrap(), expected);
        }
        assert!(resolver.is_group_boundary(10).unwrap());
        assert!(!resolver.is_group_boundary(11).unwrap());
        assert!(resolver.is_group_boundary(55).unwrap());
    }

    #[test]
    fn test_scan_matches_full_resolution() {
        let resolver = grouped();
        let mut scan = GroupScan::new(&resolver);
        for position in [3, 9, 10, 11, 29, 31, 56, 99, 42] {
            assert_eq!(
                scan.header_descriptor(position).unwrap(),
                resolver.header_descriptor(position).unwrap(),
                "position {position}"
            );
        }
    }

    #[test]
    fn test_resume_only_walks_new_range() {
        let resolver = grouped();
        let known = resolver.header_descriptor(40).unwrap();
        // A stale lookup leaves the scan at 40.
        assert_eq!(resolver.header_descriptor_since(45, 40, known).unwrap(), known);

        let mut scan = GroupScan::resume(&resolver, 40, known);
        assert_eq!(scan.header_descriptor_or_none(150), None);
        assert_eq!(
            scan.header_descriptor(60).unwrap().map(|header| header.header_id),
            Some(HeaderId::new(103))
        );
    }

    #[test]
    fn test_stale_position() {
        let resolver = grouped();
        assert_eq!(
            resolver.header_id(150),
            Err(StickyError::NotFound { position: 150 })
        );
        assert_eq!(resolver.header_id_or_none(150), HeaderId::NONE);
        assert_eq!(resolver.header_descriptor_or_none(150), None);
        assert!(!resolver.has_header(150));
    }
}
