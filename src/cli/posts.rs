//! Post list commands

use std::process::ExitCode;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::render_listing;
use crate::cli::{CommandContext, PageArgs, PostFilterArgs};
use crate::client::{ListQuery, PostSummary, ResourceClass};
use crate::error::Result;
use crate::models::PostDisplay;

/// Run the posts list command
pub async fn list(
    opts: &GlobalOptions,
    filters: &PostFilterArgs,
    pagination: &PageArgs,
) -> Result<ExitCode> {
    show_page(opts, filters.to_query(), pagination.page).await
}

/// Run the search command
pub async fn search(opts: &GlobalOptions, term: &str, pagination: &PageArgs) -> Result<ExitCode> {
    let filters = PostFilterArgs {
        search: Some(term.to_string()),
        ..Default::default()
    };
    show_page(opts, filters.to_query(), pagination.page).await
}

async fn show_page(opts: &GlobalOptions, query: ListQuery, page: u32) -> Result<ExitCode> {
    let ctx = CommandContext::new(opts)?;
    let heading = query.heading();
    let result = ctx.browser.load_posts(query, page).await;

    render_listing::<PostSummary, PostDisplay>(result, ResourceClass::Posts, &heading, ctx.format)
}
