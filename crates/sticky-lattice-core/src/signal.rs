//! Outbound notifications.
//!
//! A [`Signal`] is how a sticky-header component tells the host that
//! something happened, most importantly that a header was clicked. Listeners
//! are closures run synchronously on whichever thread calls [`Signal::emit`].
//!
//! ```
//! use sticky_lattice_core::Signal;
//!
//! let header_clicked = Signal::<u64>::new();
//! let id = header_clicked.connect(|header| println!("header {header} clicked"));
//!
//! assert_eq!(header_clicked.emit(101), 1);
//! header_clicked.disconnect(id);
//! assert!(!header_clicked.is_connected());
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// Handle to one listener, returned by [`Signal::connect`].
    pub struct ConnectionId;
}

type Listener<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct ListenerTable<Args> {
    /// Each listener with its connection sequence number.
    listeners: SlotMap<ConnectionId, (u64, Listener<Args>)>,
    next_seq: u64,
    blocked: bool,
    emitted: u64,
}

/// A list of listeners for one kind of notification.
///
/// `Args` is the payload handed to every listener by reference. Listeners run
/// in the order they were connected, even after earlier ones disconnect.
pub struct Signal<Args> {
    table: Mutex<ListenerTable<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.table.lock();
        f.debug_struct("Signal")
            .field("listeners", &table.listeners.len())
            .field("blocked", &table.blocked)
            .field("emitted", &table.emitted)
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(ListenerTable {
                listeners: SlotMap::with_key(),
                next_seq: 0,
                blocked: false,
                emitted: 0,
            }),
        }
    }

    /// Add a listener.
    pub fn connect<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut table = self.table.lock();
        let seq = table.next_seq;
        table.next_seq += 1;
        table.listeners.insert((seq, Arc::new(listener)))
    }

    /// Add a listener that stays connected while the returned guard lives.
    ///
    /// ```
    /// use std::sync::atomic::{AtomicU64, Ordering};
    /// use std::sync::Arc;
    /// use sticky_lattice_core::Signal;
    ///
    /// let clicked = Signal::<u64>::new();
    /// let last = Arc::new(AtomicU64::new(0));
    /// {
    ///     let last = Arc::clone(&last);
    ///     let _guard = clicked.connect_scoped(move |&id| last.store(id, Ordering::SeqCst));
    ///     clicked.emit(7);
    /// }
    /// clicked.emit(8);
    /// assert_eq!(last.load(Ordering::SeqCst), 7);
    /// ```
    pub fn connect_scoped<F>(&self, listener: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            id: self.connect(listener),
            signal: self,
        }
    }

    /// Remove one listener. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.table.lock().listeners.remove(id).is_some()
    }

    pub fn disconnect_all(&self) {
        self.table.lock().listeners.clear();
    }

    pub fn connection_count(&self) -> usize {
        self.table.lock().listeners.len()
    }

    /// Whether anyone is listening.
    ///
    /// Components check this before doing work whose only purpose is to
    /// produce a notification.
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connection_count() > 0
    }

    /// Suppress or resume delivery. Suppressed emits are dropped, not queued.
    pub fn set_blocked(&self, blocked: bool) {
        self.table.lock().blocked = blocked;
    }

    pub fn is_blocked(&self) -> bool {
        self.table.lock().blocked
    }

    /// Number of emits that reached at least one listener.
    pub fn emit_count(&self) -> u64 {
        self.table.lock().emitted
    }

    /// Deliver `args` to every listener and return how many ran.
    ///
    /// The listener list is copied out before any listener runs, so a
    /// listener may connect or disconnect on the same signal.
    pub fn emit(&self, args: Args) -> usize {
        let listeners: Vec<Listener<Args>> = {
            let mut table = self.table.lock();
            if table.blocked {
                tracing::trace!(target: targets::SIGNAL, "emit suppressed");
                return 0;
            }
            if !table.listeners.is_empty() {
                table.emitted += 1;
            }
            // Freed slots are reused, so slot order is not connection order.
            let mut ordered: Vec<_> = table.listeners.values().cloned().collect();
            ordered.sort_unstable_by_key(|(seq, _)| *seq);
            ordered.into_iter().map(|(_, listener)| listener).collect()
        };
        tracing::trace!(target: targets::SIGNAL, listeners = listeners.len(), "emit");

        listeners.iter().for_each(|listener| listener(&args));
        listeners.len()
    }
}

/// Disconnects its listener on drop. See [`Signal::connect_scoped`].
#[must_use = "the listener is disconnected as soon as the guard is dropped"]
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<u64>: Send, Sync);
