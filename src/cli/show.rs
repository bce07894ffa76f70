//! Post detail command

use std::process::ExitCode;

use log::warn;

use crate::browse::video::{HttpMediaProbe, play_with_fallback};
use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::{ListView, PostDetailDisplay, PostDisplay};
use crate::output::Formattable;

/// Run the show command
pub async fn run(opts: &GlobalOptions, id: u64, probe: bool) -> Result<ExitCode> {
    let ctx = CommandContext::new(opts)?;

    let view = match ctx.browser.load_post(id).await {
        Ok(view) => view,
        Err(err) => {
            warn!("Failed to load post {}: {}", id, err);
            print_error(id, &err, ctx.format)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let playback = if probe {
        let prober = HttpMediaProbe::new(ctx.config.request_timeout())?;
        Some(play_with_fallback(&prober, view.video.clone()).await)
    } else {
        None
    };

    PostDetailDisplay::new(view, playback).print(ctx.format)?;
    Ok(ExitCode::SUCCESS)
}

/// Inline error in place of the post body
pub fn print_error(id: u64, err: &crate::error::Error, format: OutputFormat) -> Result<()> {
    ListView::<PostDisplay>::error(format!("Post {}", id), err).print(format)
}
