//! Measure specifications passed from a parent to a child view.
//!
//! A [`MeasureSpec`] tells a view how much room its parent offers along one
//! axis. Header views are measured with an exact width (the list's width) and
//! an unconstrained height, so the header decides how tall it is.

/// Constraint for one axis of a measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MeasureSpec {
    /// The view must be exactly this size.
    Exactly(f32),
    /// The view may be any size up to this bound.
    AtMost(f32),
    /// The parent imposes no constraint.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Resolve a view's desired size against this constraint.
    #[inline]
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(max) => desired.min(max),
            Self::Unspecified => desired,
        }
    }

    /// The bound carried by this spec, if any.
    #[inline]
    pub fn bound(self) -> Option<f32> {
        match self {
            Self::Exactly(size) | Self::AtMost(size) => Some(size),
            Self::Unspecified => None,
        }
    }
}
