//! Interactive browse session
//!
//! Reads one command per line from stdin. Searches are debounced, so typing
//! `search` lines in quick succession fires a single request for the last
//! term. Expired cache pages are swept in the background while the session
//! runs.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::browse::command::HELP;
use crate::browse::{BrowseCommand, Browser, Listing, search_query};
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{render_any_listing, render_listing};
use crate::cli::show::print_error;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::{ActorSummary, ContentApi, ListQuery, PostSummary, ResourceClass, TagSummary};
use crate::error::Result;
use crate::models::{ActorDisplay, CacheStatDisplay, PostDetailDisplay, PostDisplay, TagDisplay};
use crate::output::Formattable;
use crate::session::{Debouncer, spawn_sweeper};

/// Timing for one browse session
#[derive(Debug, Clone, Copy)]
pub struct SessionTiming {
    pub search_debounce: Duration,
    pub sweep_interval: Duration,
}

/// Run the browse command against stdin
pub async fn run(opts: &GlobalOptions) -> Result<ExitCode> {
    let ctx = CommandContext::new(opts)?;
    let timing = SessionTiming {
        search_debounce: ctx.config.search_debounce(),
        sweep_interval: ctx.config.cache.sweep_interval(),
    };

    run_session(
        ctx.browser.clone(),
        BufReader::new(tokio::io::stdin()),
        timing,
        ctx.format,
    )
    .await
}

/// Drive a browse session from `input` until end of input or `quit`.
///
/// Shows the latest posts first. At end of input a pending search still
/// fires before returning; `quit` drops it.
pub async fn run_session<C, R>(
    browser: Arc<Browser<C>>,
    input: R,
    timing: SessionTiming,
    format: OutputFormat,
) -> Result<ExitCode>
where
    C: ContentApi + ?Sized + 'static,
    R: AsyncBufRead + Unpin,
{
    let sweeper = spawn_sweeper(browser.session(), timing.sweep_interval);
    let mut session = BrowseLoop {
        browser,
        debouncer: Debouncer::new(timing.search_debounce),
        format,
        active: ResourceClass::Posts,
    };

    let latest = ListQuery::new();
    let result = session.browser.load_posts(latest.clone(), 1).await;
    session.show_posts(&latest.heading(), result)?;

    let mut lines = input.lines();
    let mut quit = false;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<BrowseCommand>() {
            Ok(BrowseCommand::Quit) => {
                quit = true;
                break;
            }
            Ok(command) => session.handle(command).await?,
            Err(err) => eprintln!("{} {}", "✗".red(), err),
        }
    }

    if quit {
        session.debouncer.cancel();
    } else if session.debouncer.is_pending() {
        debug!("End of input, waiting for pending search");
        session.debouncer.flush().await;
    }
    sweeper.abort();
    debug!("Browse session finished");

    Ok(ExitCode::SUCCESS)
}

struct BrowseLoop<C: ?Sized> {
    browser: Arc<Browser<C>>,
    debouncer: Debouncer,
    format: OutputFormat,
    /// List that next/prev/page act on
    active: ResourceClass,
}

impl<C> BrowseLoop<C>
where
    C: ContentApi + ?Sized + 'static,
{
    async fn handle(&mut self, command: BrowseCommand) -> Result<()> {
        match command {
            BrowseCommand::Search(term) => self.schedule_search(term),
            BrowseCommand::Next => match self.browser.next_page(self.active) {
                Some(page) => self.goto(page).await?,
                None => println!("{}", "Already on the last page.".dimmed()),
            },
            BrowseCommand::Prev => match self.browser.prev_page(self.active) {
                Some(page) => self.goto(page).await?,
                None => println!("{}", "Already on the first page.".dimmed()),
            },
            BrowseCommand::Page(page) => self.goto(page).await?,
            BrowseCommand::Tags(page) => {
                self.active = ResourceClass::Tags;
                let result = self.browser.load_tags(page).await;
                render_listing::<TagSummary, TagDisplay>(
                    result,
                    ResourceClass::Tags,
                    "Tags",
                    self.format,
                )?;
            }
            BrowseCommand::Actors(page) => {
                self.active = ResourceClass::Actors;
                let result = self.browser.load_actors(page).await;
                render_listing::<ActorSummary, ActorDisplay>(
                    result,
                    ResourceClass::Actors,
                    "Actors",
                    self.format,
                )?;
            }
            BrowseCommand::Tag(id) => {
                let result = self.browser.filter_by_tag(id).await;
                self.show_posts(&ListQuery::new().tag(id).heading(), result)?;
            }
            BrowseCommand::Actor(id) => {
                let result = self.browser.filter_by_actor(id).await;
                self.show_posts(&ListQuery::new().actor(id).heading(), result)?;
            }
            BrowseCommand::Show(id) => match self.browser.load_post(id).await {
                Ok(view) => PostDetailDisplay::new(view, None).print(self.format)?,
                Err(err) => {
                    warn!("Failed to load post {}: {}", id, err);
                    print_error(id, &err, self.format)?;
                }
            },
            BrowseCommand::Sweep => {
                let session = self.browser.session();
                let removed = session.sweep();
                println!("Removed {} expired pages", removed);
                let stats: Vec<CacheStatDisplay> = session
                    .cache_stats()
                    .into_iter()
                    .map(CacheStatDisplay::from)
                    .collect();
                stats.print(self.format)?;
            }
            BrowseCommand::Help => println!("{}", HELP),
            BrowseCommand::Quit => {}
        }
        Ok(())
    }

    fn show_posts(
        &mut self,
        heading: &str,
        result: Result<Option<Listing<PostSummary>>>,
    ) -> Result<()> {
        self.active = ResourceClass::Posts;
        render_listing::<PostSummary, PostDisplay>(
            result,
            ResourceClass::Posts,
            heading,
            self.format,
        )?;
        Ok(())
    }

    fn schedule_search(&mut self, term: String) {
        self.active = ResourceClass::Posts;
        let browser = self.browser.clone();
        let format = self.format;

        debug!("Search scheduled: {:?}", term);
        self.debouncer.schedule(move || async move {
            let heading = search_query(&term).heading();
            let result = browser.search(&term).await;
            if let Err(err) =
                render_listing::<PostSummary, PostDisplay>(result, ResourceClass::Posts, &heading, format)
            {
                warn!("Failed to print search results: {}", err);
            }
        });
    }

    async fn goto(&mut self, page: u32) -> Result<()> {
        let class = self.active;
        let heading = match class {
            ResourceClass::Posts => self.browser.session().pagination(class).query.heading(),
            ResourceClass::Tags => "Tags".to_string(),
            ResourceClass::Actors => "Actors".to_string(),
        };
        let result = self.browser.goto(class, page).await;
        render_any_listing(result, class, &heading, self.format)?;
        Ok(())
    }
}
