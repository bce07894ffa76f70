//! Per-page-session state: caches, in-flight gates and pagination for every
//! resource class, plus the search debouncer.

pub mod debounce;
pub mod gate;
pub mod resource;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::task::JoinHandle;

use crate::client::pagination::ResourceClass;
use crate::client::{ActorSummary, PostSummary, TagSummary};

pub use debounce::Debouncer;
pub use gate::RequestGate;
pub use resource::{FetchOutcome, ResourceSession};
pub use state::{PageControls, PaginationState};

/// All mutable state of one browsing session
pub struct Session {
    pub posts: ResourceSession<PostSummary>,
    pub tags: ResourceSession<TagSummary>,
    pub actors: ResourceSession<ActorSummary>,
}

impl Session {
    pub fn new(ttl: Duration) -> Self {
        let gate = Arc::new(RequestGate::new());
        Self {
            posts: ResourceSession::new(ResourceClass::Posts, ttl, gate.clone()),
            tags: ResourceSession::new(ResourceClass::Tags, ttl, gate.clone()),
            actors: ResourceSession::new(ResourceClass::Actors, ttl, gate.clone()),
        }
    }

    pub fn pagination(&self, class: ResourceClass) -> PaginationState {
        match class {
            ResourceClass::Posts => self.posts.pagination(),
            ResourceClass::Tags => self.tags.pagination(),
            ResourceClass::Actors => self.actors.pagination(),
        }
    }

    /// Drop expired pages in every class
    pub fn sweep(&self) -> usize {
        self.posts.sweep() + self.tags.sweep() + self.actors.sweep()
    }

    /// Cached page count per class
    pub fn cache_stats(&self) -> Vec<(ResourceClass, usize)> {
        vec![
            (ResourceClass::Posts, self.posts.cached_pages()),
            (ResourceClass::Tags, self.tags.cached_pages()),
            (ResourceClass::Actors, self.actors.cached_pages()),
        ]
    }
}

/// Sweep `session` every `interval` until it is dropped.
pub fn spawn_sweeper(session: &Arc<Session>, interval: Duration) -> JoinHandle<()> {
    let session = Arc::downgrade(session);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let Some(session) = session.upgrade() else {
                debug!("Session dropped, stopping cache sweeper");
                break;
            };
            let removed = session.sweep();
            if removed > 0 {
                info!("Cache sweep removed {} expired pages", removed);
            } else {
                debug!("Cache sweep found nothing to remove");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PageResult;
    use crate::client::mock::fixtures::{post, tag};
    use crate::client::pagination::ListQuery;
    use crate::error::Error;

    const TTL: Duration = Duration::from_secs(300);
    const SWEEP: Duration = Duration::from_secs(600);

    async fn seed(session: &Session) {
        let query = ListQuery::new();
        session
            .posts
            .fetch(&query, 1, || async { Ok::<_, Error>(PageResult::new(vec![post(1)], 1)) })
            .await
            .unwrap();
        session
            .tags
            .fetch(&query, 1, || async { Ok::<_, Error>(PageResult::new(vec![tag(1, "t")], 1)) })
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_classes_share_one_gate() {
        let session = Session::new(TTL);
        assert!(std::ptr::eq(session.posts.gate(), session.tags.gate()));
        assert!(std::ptr::eq(session.tags.gate(), session.actors.gate()));

        assert!(session.posts.gate().try_enter(ResourceClass::Tags));
        assert!(!session.tags.gate().try_enter(ResourceClass::Tags));
        assert!(session.actors.gate().try_enter(ResourceClass::Posts));
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_sweep_after_ttl() {
        let session = Session::new(TTL);
        seed(&session).await;
        assert_eq!(session.sweep(), 0);

        tokio::time::advance(TTL).await;
        assert_eq!(session.sweep(), 2);
        assert!(session.cache_stats().iter().all(|(_, n)| *n == 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_background_sweeper_evicts() {
        let session = Arc::new(Session::new(TTL));
        seed(&session).await;
        let sweeper = spawn_sweeper(&session, SWEEP);

        tokio::time::sleep(SWEEP + Duration::from_secs(1)).await;

        assert_eq!(session.posts.cached_pages(), 0);
        assert_eq!(session.tags.cached_pages(), 0);
        sweeper.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_stops_with_session() {
        let session = Arc::new(Session::new(TTL));
        let sweeper = spawn_sweeper(&session, SWEEP);
        drop(session);

        tokio::time::sleep(SWEEP + Duration::from_secs(1)).await;
        assert!(sweeper.is_finished());
    }
}
