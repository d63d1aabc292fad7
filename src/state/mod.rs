//! Plain data and pure logic behind the card list.
//!
//! DESIGN
//! ======
//! Everything here is framework-free: snapshots, link configuration, and the
//! ordered id-to-record join are plain types and functions so they can be
//! tested without a reactive runtime. The `components` module binds them to
//! Leptos.

pub mod link;
pub mod list;
