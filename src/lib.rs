//! # cardlist
//!
//! A compact, card-style record list for Leptos — the mobile-friendly
//! alternative to a tabular data grid. The list binds to an externally
//! provided snapshot of the current record page (`RwSignal<ListSnapshot>`
//! in context), renders one row per id in snapshot order, and resolves per
//! row whether and where a click navigates.
//!
//! The crate deliberately owns only that much: data loading, pagination,
//! routing, and theming belong to the host application. Clickable rows are
//! plain anchors with relative paths; the host router handles the actual
//! navigation.

pub mod components;
pub mod state;

pub use components::card_list::{CardList, RowClass, provide_list_snapshot, use_list_snapshot};
pub use components::content::{ContentProducer, field_text};
pub use state::link::{LinkBuilder, LinkType, LinkTypeError};
pub use state::list::{Identifier, ListSnapshot, Record, RowPlan, SnapshotError, plan_rows};
