//! Concurrent per-actor image lookups.
//!
//! Every actor on a page gets one representative post lookup. All lookups are
//! in flight at once; a failed lookup only affects its own actor.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, warn};

use super::ContentApi;
use super::models::{ACTOR_PLACEHOLDER_IMAGE, ActorSummary};
use super::pagination::ListQuery;
use crate::error::Result;

/// Boxed lookup future tagged with the actor's position on the page
type LookupFuture<'a> = Pin<Box<dyn Future<Output = (usize, Result<Option<String>>)> + Send + 'a>>;

/// Fill in `image_url` for every actor, preserving the input order.
///
/// The image is the featured media of the actor's most recent post. Actors
/// without posts, posts without media, and failed lookups all keep the
/// placeholder. This never fails as a whole.
pub async fn enrich_actor_images<C>(api: &C, actors: Vec<ActorSummary>) -> Vec<ActorSummary>
where
    C: ContentApi + ?Sized,
{
    if actors.is_empty() {
        return actors;
    }

    debug!("Resolving images for {} actors", actors.len());

    let mut lookups: FuturesUnordered<LookupFuture<'_>> = actors
        .iter()
        .enumerate()
        .map(|(index, actor)| {
            let actor_id = actor.id;
            Box::pin(async move { (index, representative_image(api, actor_id).await) })
                as LookupFuture<'_>
        })
        .collect();

    let mut images: Vec<Option<String>> = vec![None; actors.len()];

    while let Some((index, result)) = lookups.next().await {
        match result {
            Ok(Some(url)) => images[index] = Some(url),
            Ok(None) => debug!("No featured media for actor {}", actors[index].name),
            Err(e) => warn!("No video found for actor {}: {}", actors[index].name, e),
        }
    }

    actors
        .into_iter()
        .zip(images)
        .map(|(mut actor, image)| {
            actor.image_url = image.unwrap_or_else(|| ACTOR_PLACEHOLDER_IMAGE.to_string());
            actor
        })
        .collect()
}

/// Featured media of the newest post filtered by this actor
async fn representative_image<C>(api: &C, actor_id: u64) -> Result<Option<String>>
where
    C: ContentApi + ?Sized,
{
    let page = api
        .list_posts(&ListQuery::new().actor(actor_id), 1, 1)
        .await?;
    Ok(page
        .items
        .into_iter()
        .next()
        .and_then(|post| post.featured_image_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockContentClient;
    use crate::client::mock::fixtures::actor;
    use std::time::Duration;

    #[tokio::test]
    async fn test_enrich_empty() {
        let mock = MockContentClient::new();
        let result = enrich_actor_images(&mock, vec![]).await;

        assert!(result.is_empty());
        assert_eq!(mock.call_counts().await.actor_lookups, 0);
    }

    #[tokio::test]
    async fn test_one_failure_keeps_batch_and_order() {
        let mock = MockContentClient::new()
            .with_actor_image(1, Some("https://cdn.test/a1.jpg"))
            .with_failing_actor(2)
            .with_actor_image(3, Some("https://cdn.test/a3.jpg"));

        let actors = vec![actor(1, "Ann"), actor(2, "Bo"), actor(3, "Cy")];
        let result = enrich_actor_images(&mock, actors).await;

        assert_eq!(result.len(), 3);
        assert_eq!(
            result.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(result[0].image_url, "https://cdn.test/a1.jpg");
        assert_eq!(result[1].image_url, ACTOR_PLACEHOLDER_IMAGE);
        assert_eq!(result[2].image_url, "https://cdn.test/a3.jpg");
        assert_eq!(mock.call_counts().await.actor_lookups, 3);
    }

    #[tokio::test]
    async fn test_actor_without_media_gets_placeholder() {
        let mock = MockContentClient::new()
            .with_actor_image(1, Some("https://cdn.test/a1.jpg"))
            .with_actor_image(2, None);

        let result = enrich_actor_images(&mock, vec![actor(1, "Ann"), actor(2, "Bo")]).await;

        assert_eq!(result[0].image_url, "https://cdn.test/a1.jpg");
        assert!(result[1].has_placeholder_image());
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookups_overlap() {
        let mock = MockContentClient::new()
            .with_delay(Duration::from_millis(100))
            .with_actor_image(1, Some("a"))
            .with_actor_image(2, Some("b"))
            .with_actor_image(3, Some("c"))
            .with_actor_image(4, Some("d"));

        let started = tokio::time::Instant::now();
        let actors = (1..=4).map(|id| actor(id, "x")).collect();
        let result = enrich_actor_images(&mock, actors).await;

        // Sequential lookups would take 400ms of virtual time
        assert!(started.elapsed() < Duration::from_millis(200));
        assert_eq!(
            result.iter().map(|a| a.image_url.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
    }
}
