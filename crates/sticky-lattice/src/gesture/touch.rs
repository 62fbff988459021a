//! Raw touch input as delivered by the host.

use sticky_lattice_render::Point;

/// Lifecycle phase of one touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The finger touched down.
    Started,
    /// The finger moved.
    Moved,
    /// The finger lifted.
    Ended,
    /// The system took the touch away (for example, the list started scrolling).
    Cancelled,
}

/// One touch point, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Identifier stable for the lifetime of the touch.
    pub id: u64,
    /// Position relative to the list viewport.
    pub position: Point,
    /// Phase of this point in the current event.
    pub phase: TouchPhase,
}

impl TouchPoint {
    /// Create a touch point.
    pub fn new(id: u64, position: Point, phase: TouchPhase) -> Self {
        Self {
            id,
            position,
            phase,
        }
    }
}

/// A touch event carrying every point that changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchEvent {
    /// The changed points.
    pub points: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Event with a single point.
    pub fn single(id: u64, position: Point, phase: TouchPhase) -> Self {
        Self {
            points: vec![TouchPoint::new(id, position, phase)],
        }
    }

    /// Event with several points.
    pub fn with_points(points: Vec<TouchPoint>) -> Self {
        Self { points }
    }
}
