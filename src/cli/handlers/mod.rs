//! Reusable command handler patterns

pub mod list;

pub use list::{render_any_listing, render_listing};
