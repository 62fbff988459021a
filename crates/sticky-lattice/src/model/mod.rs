//! Item data and header resolution.
//!
//! - [`ItemProvider`] is the adapter-side contract: per-position item data.
//! - [`HeaderResolver`] turns positions into header identities.
//! - [`HeaderId`] and [`LayoutKey`] are the identifiers flowing between them.

mod header_id;
mod provider;
mod resolver;

pub use header_id::{HeaderId, LayoutKey};
pub use provider::{HeaderDescriptor, ItemDescriptor, ItemList, ItemProvider};
pub use resolver::{GroupScan, HeaderResolver};
