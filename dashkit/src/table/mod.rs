//! Table interaction engine: sorting, filtering and row enumeration.
//!
//! The logic is split in two layers:
//!
//! - Pure functions over a [`TableSnapshot`] ([`sort_order`],
//!   [`row_visibility`]) that compute a new row order or visibility set.
//! - An adapter ([`adapter`]) that reads snapshots out of a live
//!   [`pagedom::Document`] and applies those results back to it.
//!
//! Nothing is cached between interactions; every pass re-reads the table.

pub mod adapter;
mod item;
mod search;
mod sort;
mod state;

pub use item::{Row, Section, SectionKind, TableSnapshot};
pub use search::{row_matches, row_visibility};
pub use sort::sort_order;
pub use state::SortDirection;
