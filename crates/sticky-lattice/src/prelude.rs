//! Prelude module for Sticky Lattice.
//!
//! ```ignore
//! use sticky_lattice::prelude::*;
//! ```

// ============================================================================
// Errors and Notifications
// ============================================================================

pub use sticky_lattice_core::{ConnectionId, Result, Signal, StickyError};

// ============================================================================
// Geometry and Drawing
// ============================================================================

pub use sticky_lattice_render::{Canvas, MeasureSpec, Point, RecordingCanvas, Rect, Size};

// ============================================================================
// Item Model
// ============================================================================

pub use crate::model::{
    GroupScan, HeaderDescriptor, HeaderId, HeaderResolver, ItemDescriptor, ItemList, ItemProvider,
    LayoutKey,
};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{GestureSettings, RenderMode, StickyConfig};

// ============================================================================
// Header Positioning
// ============================================================================

pub use crate::sticky::{
    HeaderHitTest, HeaderPlacement, HeaderPositioning, HeaderViewFactory, ListFrame,
    PinnedHeaderController, PinnedHost, StickyOverlay, VisibleItem,
};

// ============================================================================
// Gestures
// ============================================================================

pub use crate::gesture::{
    GestureResult, HeaderGestureRouter, TapEvent, TouchEvent, TouchPhase, TouchPoint,
};
