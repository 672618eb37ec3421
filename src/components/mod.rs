//! UI Components
//!
//! Leptos components for the confession app.

mod confession_feed;
mod confession_form;
mod header;

pub use confession_feed::ConfessionFeed;
pub use confession_form::ConfessionForm;
pub use header::Header;
