//! Single-pointer tap recognition.
//!
//! [`TapDetector`] turns raw [`TouchEvent`]s into tap-level events. A tap is
//! only *confirmed* once the double-tap window has passed without a second
//! tap, so callers that react to [`TapEvent::SingleTapConfirmed`] never fire
//! for half of a double-tap.
//!
//! The detector never reads the clock. Every call takes `now`, and the host
//! is expected to call [`TapDetector::poll`] once [`TapDetector::next_deadline`]
//! has passed.

use std::time::{Duration, Instant};

use sticky_lattice_render::Point;

use super::touch::{TouchEvent, TouchPhase, TouchPoint};

/// Default tap timeout in milliseconds.
///
/// A press held longer than this is not a tap.
pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 300;

/// Default double-tap timeout in milliseconds.
///
/// A second tap within this duration of the first makes a double-tap.
pub const DEFAULT_DOUBLE_TAP_TIMEOUT_MS: u64 = 300;

/// Default maximum movement for a tap in pixels.
///
/// Movement beyond this threshold turns the touch into a scroll.
pub const DEFAULT_TAP_SLOP: f32 = 10.0;

/// Default maximum distance between the two taps of a double-tap in pixels.
pub const DEFAULT_DOUBLE_TAP_SLOP: f32 = 100.0;

/// Configuration for the tap detector.
#[derive(Debug, Clone, PartialEq)]
pub struct TapConfig {
    /// Maximum duration for a tap.
    pub tap_timeout: Duration,
    /// Maximum duration between taps for a double-tap.
    pub double_tap_timeout: Duration,
    /// Maximum movement allowed for a tap.
    pub tap_slop: f32,
    /// Maximum distance between the taps of a double-tap.
    pub double_tap_slop: f32,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            tap_timeout: Duration::from_millis(DEFAULT_TAP_TIMEOUT_MS),
            double_tap_timeout: Duration::from_millis(DEFAULT_DOUBLE_TAP_TIMEOUT_MS),
            tap_slop: DEFAULT_TAP_SLOP,
            double_tap_slop: DEFAULT_DOUBLE_TAP_SLOP,
        }
    }
}

/// A tap-level event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapEvent {
    /// A finger touched down.
    Down(Point),
    /// A finger lifted quickly without moving: a tap, possibly the first of two.
    SingleTapUp(Point),
    /// A tap that was not followed by a second one.
    SingleTapConfirmed(Point),
    /// The second tap of a double-tap.
    DoubleTap(Point),
    /// The touch stopped being a tap (moved, second finger, or system cancel).
    Cancelled,
}

#[derive(Debug, Clone)]
struct ActiveTouch {
    id: u64,
    start_time: Instant,
    start_pos: Point,
    moved_beyond_slop: bool,
}

#[derive(Debug, Clone)]
struct PendingTap {
    position: Point,
    time: Instant,
}

/// Recognizes single taps and double-taps from one pointer.
#[derive(Debug, Default)]
pub struct TapDetector {
    config: TapConfig,
    active: Option<ActiveTouch>,
    pending: Option<PendingTap>,
}

impl TapDetector {
    /// Creates a detector with default configuration.
    pub fn new() -> Self {
        Self::with_config(TapConfig::default())
    }

    /// Creates a detector with the given configuration.
    pub fn with_config(config: TapConfig) -> Self {
        Self {
            config,
            active: None,
            pending: None,
        }
    }

    /// The detector's configuration.
    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    /// Whether a finger is currently down.
    pub fn is_touching(&self) -> bool {
        self.active.is_some()
    }

    /// Whether a tap is waiting for confirmation.
    pub fn has_pending_tap(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending tap becomes confirmable, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|pending| pending.time + self.config.double_tap_timeout)
    }

    /// Processes a touch event and returns the tap events it produced.
    pub fn process(&mut self, event: &TouchEvent, now: Instant) -> Vec<TapEvent> {
        let mut events = Vec::new();

        for point in &event.points {
            match point.phase {
                TouchPhase::Started => self.handle_start(point, now, &mut events),
                TouchPhase::Moved => self.handle_move(point, &mut events),
                TouchPhase::Ended => self.handle_end(point, now, &mut events),
                TouchPhase::Cancelled => self.handle_cancel(point, &mut events),
            }
        }

        events
    }

    /// Confirms the pending tap once the double-tap window has passed.
    ///
    /// Nothing is confirmed while a finger is down, since that finger may
    /// still complete a double-tap.
    pub fn poll(&mut self, now: Instant) -> Option<TapEvent> {
        if self.active.is_some() {
            return None;
        }
        let deadline = self.next_deadline()?;
        if now < deadline {
            return None;
        }
        self.pending
            .take()
            .map(|pending| TapEvent::SingleTapConfirmed(pending.position))
    }

    /// Forget all touch and tap state.
    pub fn reset(&mut self) {
        self.active = None;
        self.pending = None;
    }

    fn handle_start(&mut self, point: &TouchPoint, now: Instant, events: &mut Vec<TapEvent>) {
        if self.active.is_some() {
            // A second finger ends tap recognition for this gesture.
            self.reset();
            events.push(TapEvent::Cancelled);
            return;
        }

        if let Some(pending) = &self.pending {
            let expired = now.duration_since(pending.time) >= self.config.double_tap_timeout;
            let far = pending.position.distance_to(point.position) >= self.config.double_tap_slop;
            if expired || far {
                events.push(TapEvent::SingleTapConfirmed(pending.position));
                self.pending = None;
            }
        }

        self.active = Some(ActiveTouch {
            id: point.id,
            start_time: now,
            start_pos: point.position,
            moved_beyond_slop: false,
        });
        events.push(TapEvent::Down(point.position));
    }

    fn handle_move(&mut self, point: &TouchPoint, events: &mut Vec<TapEvent>) {
        let Some(touch) = self.active.as_mut().filter(|touch| touch.id == point.id) else {
            return;
        };
        if touch.moved_beyond_slop {
            return;
        }
        if touch.start_pos.distance_to(point.position) > self.config.tap_slop {
            touch.moved_beyond_slop = true;
            self.pending = None;
            events.push(TapEvent::Cancelled);
        }
    }

    fn handle_end(&mut self, point: &TouchPoint, now: Instant, events: &mut Vec<TapEvent>) {
        if !self.active.as_ref().is_some_and(|touch| touch.id == point.id) {
            return;
        }
        let Some(touch) = self.active.take() else {
            return;
        };

        let duration = now.duration_since(touch.start_time);
        if touch.moved_beyond_slop || duration >= self.config.tap_timeout {
            self.pending = None;
            return;
        }

        if let Some(pending) = self.pending.take() {
            let within_time = now.duration_since(pending.time) < self.config.double_tap_timeout;
            let within_slop =
                pending.position.distance_to(point.position) < self.config.double_tap_slop;
            if within_time && within_slop {
                events.push(TapEvent::DoubleTap(point.position));
                return;
            }
            events.push(TapEvent::SingleTapConfirmed(pending.position));
        }

        self.pending = Some(PendingTap {
            position: point.position,
            time: now,
        });
        events.push(TapEvent::SingleTapUp(point.position));
    }

    fn handle_cancel(&mut self, point: &TouchPoint, events: &mut Vec<TapEvent>) {
        if !self.active.as_ref().is_some_and(|touch| touch.id == point.id) {
            return;
        }
        self.reset();
        events.push(TapEvent::Cancelled);
    }
}
