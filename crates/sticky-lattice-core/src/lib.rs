//! Core systems for Sticky Lattice.
//!
//! This crate provides the foundational pieces shared by the sticky-header
//! components:
//!
//! - **Errors**: [`StickyError`] and the crate-wide [`Result`] alias
//! - **Signal/Slot System**: Type-safe outbound notifications
//! - **Thread Affinity**: Single-writer checks for UI-thread-only state
//! - **Logging**: `tracing` target names for each subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use sticky_lattice_core::Signal;
//!
//! let clicked = Signal::<u64>::new();
//! let conn_id = clicked.connect(|id| println!("header {id} clicked"));
//! clicked.emit(101);
//! clicked.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use error::{Result, StickyError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
