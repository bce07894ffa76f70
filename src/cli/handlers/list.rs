//! Generic list rendering
//!
//! Every list command ends the same way:
//! 1. Take the fetch result for one resource class
//! 2. Convert the page to its display type
//! 3. Print it, or an inline error view in its place
//!
//! Fetch failures never escape as errors from here. They are rendered and
//! reported through the exit code.

use std::process::ExitCode;

use log::{debug, warn};
use serde::Serialize;
use tabled::Tabled;

use crate::browse::{AnyListing, Listing};
use crate::cli::OutputFormat;
use crate::client::pagination::ResourceClass;
use crate::client::{ActorSummary, PostSummary, TagSummary};
use crate::error::Result;
use crate::models::{ActorDisplay, ControlsPolicy, ListView, PostDisplay, TagDisplay};
use crate::output::Formattable;

/// Print the outcome of one list fetch.
///
/// `error_heading` titles the inline error view when the fetch failed.
pub fn render_listing<T, D>(
    result: Result<Option<Listing<T>>>,
    class: ResourceClass,
    error_heading: &str,
    format: OutputFormat,
) -> Result<ExitCode>
where
    D: for<'a> From<&'a T> + Tabled + Serialize,
{
    match result {
        Ok(Some(listing)) => {
            debug!(
                "Rendering {} {} on page {} ({})",
                listing.page.items.len(),
                class,
                listing.controls.current_page,
                if listing.from_cache { "cached" } else { "fetched" }
            );
            ListView::<D>::from_listing(&listing, ControlsPolicy::for_class(class)).print(format)?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            debug!("Dropped {} request, a fetch is already in flight", class);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!("Failed to load {}: {}", error_heading, err);
            ListView::<D>::error(error_heading, &err).print(format)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// [`render_listing`] for a listing of any class
pub fn render_any_listing(
    result: Result<Option<AnyListing>>,
    class: ResourceClass,
    error_heading: &str,
    format: OutputFormat,
) -> Result<ExitCode> {
    match result {
        Ok(Some(AnyListing::Posts(listing))) => {
            render_listing::<PostSummary, PostDisplay>(Ok(Some(listing)), class, error_heading, format)
        }
        Ok(Some(AnyListing::Tags(listing))) => {
            render_listing::<TagSummary, TagDisplay>(Ok(Some(listing)), class, error_heading, format)
        }
        Ok(Some(AnyListing::Actors(listing))) => {
            render_listing::<ActorSummary, ActorDisplay>(Ok(Some(listing)), class, error_heading, format)
        }
        Ok(None) => {
            debug!("Dropped {} request, a fetch is already in flight", class);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match class {
            ResourceClass::Posts => {
                render_listing::<PostSummary, PostDisplay>(Err(err), class, error_heading, format)
            }
            ResourceClass::Tags => {
                render_listing::<TagSummary, TagDisplay>(Err(err), class, error_heading, format)
            }
            ResourceClass::Actors => {
                render_listing::<ActorSummary, ActorDisplay>(Err(err), class, error_heading, format)
            }
        },
    }
}
