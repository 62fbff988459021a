//! Routes taps on the sticky header to a click notification.

use std::time::Instant;

use sticky_lattice_core::logging::targets;
use sticky_lattice_core::{Signal, ThreadAffinity};

use super::tap::{TapConfig, TapDetector, TapEvent};
use super::touch::{TouchEvent, TouchPhase};
use crate::model::HeaderId;
use crate::sticky::HeaderHitTest;

/// What the host should do with the touch stream after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResult {
    /// Not ours; let the list handle it.
    Ignore,
    /// The touch is on a header; keep it away from the list.
    Claim,
    /// A header click was delivered.
    ConsumeAndNotify(HeaderId),
}

impl GestureResult {
    /// Whether the host should stop the event from reaching the list.
    pub fn is_intercepted(self) -> bool {
        !matches!(self, Self::Ignore)
    }

    /// Combine results from one touch event; the stronger one wins.
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (notify @ Self::ConsumeAndNotify(_), _) | (_, notify @ Self::ConsumeAndNotify(_)) => {
                notify
            }
            (Self::Claim, _) | (_, Self::Claim) => Self::Claim,
            _ => Self::Ignore,
        }
    }
}

/// Turns taps on the drawn header into [`header_clicked`] notifications.
///
/// The router does nothing, and claims nothing, until a slot is connected to
/// [`header_clicked`]. A click is only delivered once the tap is confirmed as a
/// single tap, and only if the confirmed point still hits a header.
///
/// [`header_clicked`]: HeaderGestureRouter::header_clicked
///
/// # Example
///
/// ```ignore
/// let mut router = HeaderGestureRouter::new();
/// router.header_clicked.connect(|id| println!("header {id} clicked"));
///
/// // From the list's touch handler:
/// let result = router.handle_touch(&event, Instant::now(), &overlay);
/// if result.is_intercepted() {
///     return; // the list must not scroll or select
/// }
/// ```
pub struct HeaderGestureRouter {
    /// Emitted with the header's id when a header is clicked.
    pub header_clicked: Signal<HeaderId>,
    detector: TapDetector,
    claimed: Option<HeaderId>,
    affinity: ThreadAffinity,
}

impl Default for HeaderGestureRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HeaderGestureRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderGestureRouter")
            .field("listeners", &self.header_clicked.connection_count())
            .field("claimed", &self.claimed)
            .field("detector", &self.detector)
            .finish()
    }
}

impl HeaderGestureRouter {
    /// Create a router with the default tap thresholds.
    pub fn new() -> Self {
        Self::with_config(TapConfig::default())
    }

    /// Create a router with custom tap thresholds.
    pub fn with_config(config: TapConfig) -> Self {
        Self {
            header_clicked: Signal::new(),
            detector: TapDetector::with_config(config),
            claimed: None,
            affinity: ThreadAffinity::current(),
        }
    }

    /// Header under the current touch, if it was claimed.
    pub fn claimed_header(&self) -> Option<HeaderId> {
        self.claimed
    }

    /// The underlying tap detector.
    pub fn detector(&self) -> &TapDetector {
        &self.detector
    }

    /// When [`poll`](Self::poll) should next be called, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.detector.next_deadline()
    }

    /// Route one recognized tap event.
    pub fn on_tap_event<H>(&mut self, event: TapEvent, hit_test: &H) -> GestureResult
    where
        H: HeaderHitTest + ?Sized,
    {
        self.affinity.debug_assert_same_thread();
        if !self.header_clicked.is_connected() {
            self.claimed = None;
            return GestureResult::Ignore;
        }

        match event {
            TapEvent::Down(point) | TapEvent::SingleTapUp(point) => {
                self.claimed = hit_test.find_header_at(point);
                match self.claimed {
                    Some(header_id) => {
                        tracing::trace!(target: targets::GESTURE, %header_id, "claimed touch on header");
                        GestureResult::Claim
                    }
                    None => GestureResult::Ignore,
                }
            }
            TapEvent::SingleTapConfirmed(point) => {
                self.claimed = None;
                match hit_test.find_header_at(point) {
                    Some(header_id) => {
                        tracing::debug!(target: targets::GESTURE, %header_id, "header clicked");
                        self.header_clicked.emit(header_id);
                        GestureResult::ConsumeAndNotify(header_id)
                    }
                    None => GestureResult::Ignore,
                }
            }
            TapEvent::DoubleTap(_) | TapEvent::Cancelled => {
                self.claimed = None;
                GestureResult::Ignore
            }
        }
    }

    /// Feed a raw touch event through the tap detector and route the result.
    ///
    /// A touch that lifts without producing a tap (a long press, say)
    /// releases its claim.
    pub fn handle_touch<H>(&mut self, event: &TouchEvent, now: Instant, hit_test: &H) -> GestureResult
    where
        H: HeaderHitTest + ?Sized,
    {
        let taps = self.detector.process(event, now);
        let lifted = event
            .points
            .iter()
            .any(|point| matches!(point.phase, TouchPhase::Ended | TouchPhase::Cancelled));
        if taps.is_empty() && lifted {
            if let Some(header_id) = self.claimed.take() {
                tracing::trace!(target: targets::GESTURE, %header_id, "touch ended without a tap");
            }
            return GestureResult::Ignore;
        }

        taps.into_iter().fold(GestureResult::Ignore, |result, tap| {
            result.merge(self.on_tap_event(tap, hit_test))
        })
    }

    /// Deliver a pending tap whose double-tap window has passed.
    pub fn poll<H>(&mut self, now: Instant, hit_test: &H) -> GestureResult
    where
        H: HeaderHitTest + ?Sized,
    {
        match self.detector.poll(now) {
            Some(tap) => self.on_tap_event(tap, hit_test),
            None => GestureResult::Ignore,
        }
    }

    /// Drop any in-flight touch and pending tap.
    pub fn reset(&mut self) {
        self.detector.reset();
        self.claimed = None;
    }
}
