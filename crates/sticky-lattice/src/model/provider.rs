//! Item data provider contract.
//!
//! The adapter layer that owns the list's data is an external collaborator.
//! It answers one question per position: what is this item, and is it a
//! sticky header? [`ItemList`] is a ready-made in-memory provider.

use super::header_id::{HeaderId, LayoutKey};

/// What the provider knows about one list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDescriptor {
    /// Identity of the item. For sticky items this is the header id of the
    /// group they start.
    pub id: HeaderId,
    /// How to render this item when it is used as a header.
    pub layout_key: LayoutKey,
    /// Whether this item defines a sticky header.
    pub sticky: bool,
}

impl ItemDescriptor {
    /// A regular (non-header) item.
    pub fn item(id: u64) -> Self {
        Self {
            id: HeaderId::new(id),
            layout_key: LayoutKey::default(),
            sticky: false,
        }
    }

    /// An item that starts a group and renders as its header.
    pub fn header(id: u64, layout_key: LayoutKey) -> Self {
        Self {
            id: HeaderId::new(id),
            layout_key,
            sticky: true,
        }
    }
}

/// A header resolved for some position. Built per query, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDescriptor {
    /// The header's identity.
    pub header_id: HeaderId,
    /// How to render the header.
    pub layout_key: LayoutKey,
    /// Always true for descriptors produced by the resolver.
    pub is_sticky: bool,
    /// Adapter position of the sticky item that defines this header.
    pub position: usize,
}

/// Supplies per-position item data.
///
/// Must be stable for the duration of one draw or layout pass. Returning
/// `None` for a position that the list still shows is allowed (the data set
/// changed underneath); it is reported as a stale reference and the pass
/// simply draws no header.
pub trait ItemProvider {
    /// Number of items in the data set.
    fn item_count(&self) -> usize;

    /// Data for `position`, or `None` if it does not resolve.
    fn descriptor(&self, position: usize) -> Option<ItemDescriptor>;
}

/// A simple in-memory item provider backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<ItemDescriptor>,
}

impl ItemList {
    /// Create a provider from descriptors.
    pub fn new(items: Vec<ItemDescriptor>) -> Self {
        Self { items }
    }

    /// Build a list of `count` items where each `(position, header_id)` pair
    /// marks a sticky item. Non-sticky items get their position as id.
    pub fn with_headers(count: usize, headers: &[(usize, u64)]) -> Self {
        let items = (0..count)
            .map(|position| {
                match headers.iter().find(|(p, _)| *p == position) {
                    Some(&(_, id)) => ItemDescriptor::header(id, LayoutKey::default()),
                    None => ItemDescriptor::item(position as u64),
                }
            })
            .collect();
        Self { items }
    }

    /// Append an item.
    pub fn push(&mut self, item: ItemDescriptor) {
        self.items.push(item);
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemProvider for ItemList {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn descriptor(&self, position: usize) -> Option<ItemDescriptor> {
        self.items.get(position).copied()
    }
}
