//! Geometry and draw-target abstractions for Sticky Lattice.
//!
//! This crate holds the rendering-side vocabulary shared by the sticky-header
//! components: geometry ([`Point`], [`Size`], [`Rect`]), measure constraints
//! ([`MeasureSpec`]) and the [`Canvas`] transform stack hosts draw through.

pub mod canvas;
pub mod measure;
pub mod types;

pub use canvas::{Canvas, CanvasCommand, RecordingCanvas};
pub use measure::MeasureSpec;
pub use types::{Point, Rect, Size};
