//! Display model implementations for table and JSON output
//!
//! Display models transform fetched content into CLI-friendly formats
//! with appropriate column names and serialization.

mod actor;
mod cache;
mod common;
mod post;
mod tag;
mod view;

pub use actor::ActorDisplay;
pub use cache::CacheStatDisplay;
pub use post::{PostDetailDisplay, PostDisplay};
pub use tag::TagDisplay;
pub use view::{ControlsPolicy, EMPTY_MESSAGE, ListView, ViewState, controls_line};
