//! Header and layout identifiers.

use std::fmt;

/// Identity of a section header.
///
/// A `HeaderId` is stable for one logical group across scroll and layout
/// passes, but not across data-set changes; call `invalidate()` on the owning
/// component whenever positions stop being trustworthy.
///
/// [`HeaderId::NONE`] is the sentinel for "this position has no header". The
/// raw value `u64::MAX` is reserved for it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeaderId(u64);

impl HeaderId {
    /// The "no header" sentinel.
    pub const NONE: Self = Self(u64::MAX);

    /// Wrap a raw identifier.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns true for the sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u64::MAX
    }

    /// Returns true for any real header.
    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Convert to an `Option`, mapping the sentinel to `None`.
    #[inline]
    pub fn to_option(self) -> Option<HeaderId> {
        self.is_some().then_some(self)
    }
}

impl Default for HeaderId {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<u64> for HeaderId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for HeaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("HeaderId(NONE)")
        } else {
            write!(f, "HeaderId({})", self.0)
        }
    }
}

impl fmt::Display for HeaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Tells a view factory which kind of view to inflate for a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutKey(pub u32);

static_assertions::assert_impl_all!(HeaderId: Send, Sync, Copy);
