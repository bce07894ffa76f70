//! Fetch orchestration for browsing views
//!
//! [`Browser`] is what user actions call into: it resolves the page size for
//! each resource class, routes list requests through the session's cache and
//! gate, enriches actor pages with images and builds media URLs for detail
//! views. It returns plain data; turning it into output is the display
//! layer's job.

pub mod command;
pub mod video;

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::client::pagination::ResourceClass;
use crate::client::{
    ActorSummary, ContentApi, ListQuery, PageResult, PostDetail, PostSummary, TagSummary,
    enrich_actor_images,
};
use crate::config::{Config, PageSizes};
use crate::error::{Error, Result};
use crate::session::{FetchOutcome, PageControls, PaginationState, Session};

pub use command::BrowseCommand;
pub use video::{VideoSources, plain_text};

/// One page of a resource class ready for presentation
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub heading: String,
    pub page: Arc<PageResult<T>>,
    pub controls: PageControls,
    /// Served without a network round-trip
    pub from_cache: bool,
}

/// A listing of any resource class
#[derive(Debug, Clone)]
pub enum AnyListing {
    Posts(Listing<PostSummary>),
    Tags(Listing<TagSummary>),
    Actors(Listing<ActorSummary>),
}

/// A single post with its media candidates
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub detail: PostDetail,
    /// Title with markup removed
    pub title: String,
    pub video: VideoSources,
}

/// Entry point for every browsing action.
///
/// List methods return `Ok(None)` when the call was dropped because a fetch
/// for the same resource class is still in flight.
pub struct Browser<C: ?Sized> {
    api: Arc<C>,
    session: Arc<Session>,
    page_sizes: PageSizes,
    stream_base: String,
}

impl<C> Browser<C>
where
    C: ContentApi + ?Sized,
{
    pub fn new(api: Arc<C>, session: Arc<Session>, config: &Config) -> Self {
        Self {
            api,
            session,
            page_sizes: config.page_sizes.clone(),
            stream_base: config.stream_base.clone(),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Posts matching `query`
    pub async fn load_posts(
        &self,
        query: ListQuery,
        page: u32,
    ) -> Result<Option<Listing<PostSummary>>> {
        let page = page.max(1);
        let per_page = self.page_sizes.posts;
        let outcome = self
            .session
            .posts
            .fetch(&query, page, || self.api.list_posts(&query, page, per_page))
            .await?;

        Ok(listing(query.heading(), query, page, outcome))
    }

    /// First page of a free-text search
    pub async fn search(&self, term: &str) -> Result<Option<Listing<PostSummary>>> {
        self.load_posts(search_query(term), 1).await
    }

    /// First page of posts carrying `tag_id`
    pub async fn filter_by_tag(&self, tag_id: u64) -> Result<Option<Listing<PostSummary>>> {
        self.load_posts(ListQuery::new().tag(tag_id), 1).await
    }

    /// First page of posts featuring `actor_id`
    pub async fn filter_by_actor(&self, actor_id: u64) -> Result<Option<Listing<PostSummary>>> {
        self.load_posts(ListQuery::new().actor(actor_id), 1).await
    }

    pub async fn load_tags(&self, page: u32) -> Result<Option<Listing<TagSummary>>> {
        let page = page.max(1);
        let per_page = self.page_sizes.tags;
        let query = ListQuery::new();
        let outcome = self
            .session
            .tags
            .fetch(&query, page, || self.api.list_tags(page, per_page))
            .await?;

        Ok(listing("Tags".to_string(), query, page, outcome))
    }

    /// Actors with their representative images.
    ///
    /// Enrichment happens before caching, so a cached actor page is served
    /// without repeating the per-actor lookups.
    pub async fn load_actors(&self, page: u32) -> Result<Option<Listing<ActorSummary>>> {
        let page = page.max(1);
        let per_page = self.page_sizes.actors;
        let query = ListQuery::new();
        let api = self.api.as_ref();
        let outcome = self
            .session
            .actors
            .fetch(&query, page, || async move {
                let listed = api.list_actors(page, per_page).await?;
                let total_pages = listed.total_pages;
                let actors = enrich_actor_images(api, listed.items).await;
                Ok::<_, Error>(PageResult::new(actors, total_pages))
            })
            .await?;

        Ok(listing("Actors".to_string(), query, page, outcome))
    }

    /// Load `page` of `class`, reusing the class's current query for posts
    pub async fn goto(&self, class: ResourceClass, page: u32) -> Result<Option<AnyListing>> {
        Ok(match class {
            ResourceClass::Posts => {
                let query = self.session.posts.pagination().query;
                self.load_posts(query, page).await?.map(AnyListing::Posts)
            }
            ResourceClass::Tags => self.load_tags(page).await?.map(AnyListing::Tags),
            ResourceClass::Actors => self.load_actors(page).await?.map(AnyListing::Actors),
        })
    }

    /// Page behind the "Next" control of `class`, if there is one
    pub fn next_page(&self, class: ResourceClass) -> Option<u32> {
        self.session.pagination(class).next_page()
    }

    /// Page behind the "Prev" control of `class`, if there is one
    pub fn prev_page(&self, class: ResourceClass) -> Option<u32> {
        self.session.pagination(class).prev_page()
    }

    /// A single post with media candidates. Never cached.
    pub async fn load_post(&self, id: u64) -> Result<PostView> {
        debug!("Loading post {}", id);
        let detail = self.api.get_post(id).await?;
        let title = plain_text(&detail.title_html);
        let video = VideoSources::resolve(&title, &self.stream_base);

        Ok(PostView {
            detail,
            title,
            video,
        })
    }
}

/// Query for a typed search term. A blank term lists the latest posts.
pub fn search_query(term: &str) -> ListQuery {
    let term = term.trim();
    if term.is_empty() {
        ListQuery::new()
    } else {
        ListQuery::new().search(term)
    }
}

fn listing<T>(
    heading: String,
    query: ListQuery,
    page: u32,
    outcome: FetchOutcome<T>,
) -> Option<Listing<T>> {
    let page_result = outcome.page()?.clone();

    let controls = PaginationState {
        current_page: page,
        total_pages: page_result.total_pages,
        query,
    }
    .controls();

    Some(Listing {
        heading,
        page: page_result,
        controls,
        from_cache: outcome.is_cached(),
    })
}
