//! Owner-thread checks for components driven from the UI thread.
//!
//! The overlay, the pinned controller and the gesture router mutate plain
//! (non-atomic) state from the host's draw, layout and touch callbacks. Each
//! one captures a [`ThreadAffinity`] when it is created and checks it at the
//! top of every mutating call. The check compiles away in release builds.

use std::thread::{self, ThreadId};

/// The thread a component was created on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    owner: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Bind to the calling thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            owner: thread::current().id(),
        }
    }

    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.owner
    }

    #[inline]
    pub fn is_same_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Panic unless called on the owner thread, in every build profile.
    #[inline]
    pub fn assert_same_thread(&self) {
        if !self.is_same_thread() {
            wrong_thread(self.owner);
        }
    }

    /// [`assert_same_thread`](Self::assert_same_thread) in debug builds only.
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        if cfg!(debug_assertions) {
            self.assert_same_thread();
        }
    }
}

#[cold]
#[inline(never)]
fn wrong_thread(owner: ThreadId) -> ! {
    let caller = thread::current();
    panic!(
        "sticky-header component owned by {owner:?} used from {:?} ({})",
        caller.id(),
        caller.name().unwrap_or("unnamed")
    );
}
