//! Touch handling for sticky headers.
//!
//! - [`TapDetector`] recognizes taps from raw touch input.
//! - [`HeaderGestureRouter`] hit-tests taps against the drawn header and
//!   emits a click notification for confirmed taps.

pub mod tap;
mod router;
mod touch;

pub use router::{GestureResult, HeaderGestureRouter};
pub use tap::{TapConfig, TapDetector, TapEvent};
pub use touch::{TouchEvent, TouchPhase, TouchPoint};
