//! Leptos components binding the pure list logic to markup.

pub mod card_list;
pub mod content;
