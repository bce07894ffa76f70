//! Tag and actor list commands

use std::process::ExitCode;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::render_listing;
use crate::cli::{CommandContext, PageArgs};
use crate::client::{ActorSummary, ResourceClass, TagSummary};
use crate::error::Result;
use crate::models::{ActorDisplay, TagDisplay};

/// Run the tags command
pub async fn tags(opts: &GlobalOptions, pagination: &PageArgs) -> Result<ExitCode> {
    let ctx = CommandContext::new(opts)?;
    let result = ctx.browser.load_tags(pagination.page).await;

    render_listing::<TagSummary, TagDisplay>(result, ResourceClass::Tags, "Tags", ctx.format)
}

/// Run the actors command
pub async fn actors(opts: &GlobalOptions, pagination: &PageArgs) -> Result<ExitCode> {
    let ctx = CommandContext::new(opts)?;
    let result = ctx.browser.load_actors(pagination.page).await;

    render_listing::<ActorSummary, ActorDisplay>(
        result,
        ResourceClass::Actors,
        "Actors",
        ctx.format,
    )
}
