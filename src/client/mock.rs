//! Mock content API client for testing
//!
//! Provides a mock implementation of [`ContentApi`] for unit testing
//! without making real API calls.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::ContentApi;
use super::models::{ActorSummary, PostDetail, PostSummary, TagSummary};
use super::pagination::{ListQuery, PageResult};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockContentClient::new().with_posts(vec![post(1), post(2)], 2);
///
/// let page = mock.list_posts(&ListQuery::new(), 1, 12).await?;
/// assert_eq!(page.total_pages, 2);
/// ```
#[derive(Default)]
pub struct MockContentClient {
    posts: Arc<Mutex<PageResult<PostSummary>>>,
    tags: Arc<Mutex<PageResult<TagSummary>>>,
    actors: Arc<Mutex<PageResult<ActorSummary>>>,
    details: Arc<Mutex<HashMap<u64, PostDetail>>>,
    /// Representative image per actor id (`None` = actor has no posts)
    actor_images: Arc<Mutex<HashMap<u64, Option<String>>>>,
    /// Actor ids whose lookup fails with HTTP 500
    failing_actors: Arc<Mutex<HashSet<u64>>>,
    /// Error to return (if any) - consumed on first list call
    error: Arc<Mutex<Option<ApiError>>>,
    /// Simulated network latency for every call
    delay: Option<Duration>,
    call_count: Arc<Mutex<CallCounts>>,
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_posts: usize,
    pub list_tags: usize,
    pub list_actors: usize,
    pub get_post: usize,
    /// Post lookups filtered by actor (image enrichment)
    pub actor_lookups: usize,
}

/// A captured list request
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub query: ListQuery,
    pub page: u32,
    pub per_page: u32,
}

impl MockContentClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(self, posts: Vec<PostSummary>, total_pages: u32) -> Self {
        *self.posts.try_lock().expect("unshared mock") = PageResult::new(posts, total_pages);
        self
    }

    pub fn with_tags(self, tags: Vec<TagSummary>, total_pages: u32) -> Self {
        *self.tags.try_lock().expect("unshared mock") = PageResult::new(tags, total_pages);
        self
    }

    pub fn with_actors(self, actors: Vec<ActorSummary>, total_pages: u32) -> Self {
        *self.actors.try_lock().expect("unshared mock") = PageResult::new(actors, total_pages);
        self
    }

    pub fn with_detail(self, detail: PostDetail) -> Self {
        self.details
            .try_lock()
            .expect("unshared mock")
            .insert(detail.id, detail);
        self
    }

    pub fn with_actor_image(self, actor_id: u64, image: Option<&str>) -> Self {
        self.actor_images
            .try_lock()
            .expect("unshared mock")
            .insert(actor_id, image.map(str::to_string));
        self
    }

    pub fn with_failing_actor(self, actor_id: u64) -> Self {
        self.failing_actors
            .try_lock()
            .expect("unshared mock")
            .insert(actor_id);
        self
    }

    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("unshared mock") = Some(error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn simulate_latency(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    async fn take_error(&self) -> Option<ApiError> {
        self.error.lock().await.take()
    }
}

#[async_trait]
impl ContentApi for MockContentClient {
    async fn list_posts(
        &self,
        query: &ListQuery,
        page: u32,
        per_page: u32,
    ) -> Result<PageResult<PostSummary>> {
        self.simulate_latency().await;

        if let Some(actor_id) = query.actor {
            self.call_count.lock().await.actor_lookups += 1;
            if self.failing_actors.lock().await.contains(&actor_id) {
                return Err(ApiError::HttpStatus(500).into());
            }
            let image = self.actor_images.lock().await.get(&actor_id).cloned();
            let items = match image {
                Some(url) => vec![PostSummary {
                    id: actor_id * 1000,
                    title_html: format!("Post for actor {}", actor_id),
                    featured_image_url: url,
                }],
                None => Vec::new(),
            };
            return Ok(PageResult::new(items, 1));
        }

        self.call_count.lock().await.list_posts += 1;
        self.captured_requests.lock().await.push(CapturedRequest {
            query: query.clone(),
            page,
            per_page,
        });
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(self.posts.lock().await.clone())
    }

    async fn list_tags(&self, _page: u32, _per_page: u32) -> Result<PageResult<TagSummary>> {
        self.simulate_latency().await;
        self.call_count.lock().await.list_tags += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(self.tags.lock().await.clone())
    }

    async fn list_actors(&self, _page: u32, _per_page: u32) -> Result<PageResult<ActorSummary>> {
        self.simulate_latency().await;
        self.call_count.lock().await.list_actors += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(self.actors.lock().await.clone())
    }

    async fn get_post(&self, id: u64) -> Result<PostDetail> {
        self.simulate_latency().await;
        self.call_count.lock().await.get_post += 1;
        self.details
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::HttpStatus(404).into())
    }
}

/// Fixture helpers shared by tests across modules
pub mod fixtures {
    use super::*;
    use crate::client::models::ACTOR_PLACEHOLDER_IMAGE;

    pub fn post(id: u64) -> PostSummary {
        PostSummary {
            id,
            title_html: format!("Post {}", id),
            featured_image_url: Some(format!("https://cdn.test/{}.jpg", id)),
        }
    }

    pub fn tag(id: u64, name: &str) -> TagSummary {
        TagSummary {
            id,
            name: name.to_string(),
            post_count: id * 3,
        }
    }

    pub fn actor(id: u64, name: &str) -> ActorSummary {
        ActorSummary {
            id,
            name: name.to_string(),
            post_count: id * 2,
            image_url: ACTOR_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}
