//! Logging facilities for Sticky Lattice.
//!
//! Sticky Lattice uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("sticky_lattice::overlay=trace")
//!         .init();
//! }
//! ```
//!
//! Per-frame events (header materialization, stale positions) are logged at
//! `trace`; cache invalidation and pin/unpin transitions at `debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "sticky_lattice_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "sticky_lattice_core::signal";
    /// Header resolution target.
    pub const RESOLVER: &str = "sticky_lattice::resolver";
    /// Overlay drawing and header cache target.
    pub const OVERLAY: &str = "sticky_lattice::overlay";
    /// Pinned sibling-view strategy target.
    pub const PINNED: &str = "sticky_lattice::pinned";
    /// Touch and gesture routing target.
    pub const GESTURE: &str = "sticky_lattice::gesture";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::RESOLVER,
            targets::OVERLAY,
            targets::PINNED,
            targets::GESTURE,
        ] {
            assert!(target.starts_with("sticky_lattice::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
