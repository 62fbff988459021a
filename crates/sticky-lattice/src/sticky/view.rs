//! Header view materialization contract.

use sticky_lattice_render::{Canvas, MeasureSpec, Point, Rect, Size};

use crate::model::HeaderDescriptor;

/// Inflates, measures, lays out and draws header views for the overlay.
///
/// The host owns the real view system; this trait is the overlay's only way
/// into it. Views are created once per header id and kept in the overlay's
/// cache until it is invalidated, at which point each one is handed back
/// through [`release`](Self::release).
pub trait HeaderViewFactory {
    /// Handle to a host view.
    type View;
    /// The draw target the host renders into.
    type Canvas: Canvas + ?Sized;

    /// Create a view for `header` and bind the header's data to it.
    fn inflate(&self, header: &HeaderDescriptor) -> Self::View;

    /// Measure the view against the given constraints and return its size.
    fn measure(&self, view: &mut Self::View, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Position the view within its own coordinate space.
    fn layout(&self, view: &mut Self::View, bounds: Rect);

    /// Draw the view.
    ///
    /// The canvas is already translated by `translation`; it is passed along
    /// for hosts that position views themselves.
    fn draw(&self, view: &Self::View, canvas: &mut Self::Canvas, translation: Point);

    /// Dispose of a view evicted from the cache.
    fn release(&self, view: Self::View) {
        drop(view);
    }
}
