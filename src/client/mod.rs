//! Content API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod content;
pub mod models;
pub mod pagination;
pub mod parallel;
pub mod rate_limit;

#[cfg(test)]
pub use mock::MockContentClient;
pub use content::ContentClient;
pub use models::{ActorSummary, PostDetail, PostSummary, TagSummary};
pub use pagination::{ListQuery, PageResult, ResourceClass};
pub use parallel::enrich_actor_images;

/// Content API client trait
///
/// List operations return one page together with the total page count the
/// API reported for the query.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// List posts matching `query`, with embedded featured media
    async fn list_posts(
        &self,
        query: &ListQuery,
        page: u32,
        per_page: u32,
    ) -> Result<PageResult<PostSummary>>;

    /// List tags
    async fn list_tags(&self, page: u32, per_page: u32) -> Result<PageResult<TagSummary>>;

    /// List actors. Returned records carry the placeholder image.
    async fn list_actors(&self, page: u32, per_page: u32) -> Result<PageResult<ActorSummary>>;

    /// Fetch a single post by id
    async fn get_post(&self, id: u64) -> Result<PostDetail>;
}
