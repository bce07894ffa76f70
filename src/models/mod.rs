//! Display models for CLI output
//!
//! Converts fetched content into CLI-friendly display formats.

pub mod display;

pub use display::{
    ActorDisplay, CacheStatDisplay, ControlsPolicy, ListView, PostDetailDisplay, PostDisplay,
    TagDisplay, ViewState,
};
