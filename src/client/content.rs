//! HTTP implementation of the content API client

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::models::{ActorSummary, PostDetail, PostSummary, RawPost, TagSummary};
use super::pagination::{ListQuery, PageResult, ResourceClass, TOTAL_PAGES_HEADER, parse_total_pages};
use super::rate_limit::RateLimiterSet;
use super::ContentApi;
use crate::error::{ApiError, Result};

/// Content API client
pub struct ContentClient {
    http: HttpClient,
    base_url: String,
    rate_limiters: RateLimiterSet,
}

impl ContentClient {
    /// Create a client rooted at `base_url`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiters: RateLimiterSet::new(),
        })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET and map non-success statuses to errors
    async fn send(
        &self,
        class: ResourceClass,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Response> {
        self.rate_limiters.wait_for(class).await;

        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            self.rate_limiters.activate(class);
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into());
        }

        debug!("GET {} failed with {}", url, status);
        Err(ApiError::HttpStatus(status.as_u16()).into())
    }

    /// Decode a JSON body, separating transport failures from bad payloads
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
            } else {
                ApiError::from(e).into()
            }
        })
    }

    /// Fetch one page of a list endpoint
    async fn get_page<T: DeserializeOwned>(
        &self,
        class: ResourceClass,
        params: Vec<(&str, String)>,
    ) -> Result<PageResult<T>> {
        let response = self.send(class, class.path(), &params).await?;

        let total_pages = parse_total_pages(
            response
                .headers()
                .get(TOTAL_PAGES_HEADER)
                .and_then(|v| v.to_str().ok()),
        );
        let items: Vec<T> = Self::decode(response).await?;

        debug!(
            "{} page returned {} items ({} pages total)",
            class,
            items.len(),
            total_pages
        );
        Ok(PageResult::new(items, total_pages))
    }
}

fn page_params(page: u32, per_page: u32) -> Vec<(&'static str, String)> {
    vec![("per_page", per_page.to_string()), ("page", page.to_string())]
}

#[async_trait]
impl ContentApi for ContentClient {
    async fn list_posts(
        &self,
        query: &ListQuery,
        page: u32,
        per_page: u32,
    ) -> Result<PageResult<PostSummary>> {
        let mut params = page_params(page, per_page);
        params.push(("_embed", "1".to_string()));
        params.extend(query.to_query_params());

        let raw: PageResult<RawPost> = self.get_page(ResourceClass::Posts, params).await?;
        Ok(raw.map(PostSummary::from))
    }

    async fn list_tags(&self, page: u32, per_page: u32) -> Result<PageResult<TagSummary>> {
        self.get_page(ResourceClass::Tags, page_params(page, per_page))
            .await
    }

    async fn list_actors(&self, page: u32, per_page: u32) -> Result<PageResult<ActorSummary>> {
        self.get_page(ResourceClass::Actors, page_params(page, per_page))
            .await
    }

    async fn get_post(&self, id: u64) -> Result<PostDetail> {
        let path = format!("posts/{}", id);
        let params = [("_embed", "1".to_string())];
        let response = self.send(ResourceClass::Posts, &path, &params).await?;
        let raw: RawPost = Self::decode(response).await?;
        Ok(PostDetail::from(raw))
    }
}
