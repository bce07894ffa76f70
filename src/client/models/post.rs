//! Post models

use serde::{Deserialize, Serialize};

/// Image shown for posts without embedded featured media
pub const POST_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x180?text=No+Image";

/// A rendered HTML field (`{ "rendered": "..." }`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// Embedded relations requested with `_embed`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    #[serde(default, rename = "wp:featuredmedia")]
    pub featured_media: Vec<FeaturedMedia>,
}

/// One featured media entry. Restricted media comes back without a source URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturedMedia {
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Post record as returned by the content API
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    pub id: u64,

    #[serde(default)]
    pub title: Rendered,

    #[serde(default)]
    pub content: Rendered,

    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

impl RawPost {
    /// URL of the first embedded featured media item, if any
    pub fn featured_image_url(&self) -> Option<&str> {
        self.embedded
            .as_ref()
            .and_then(|e| e.featured_media.first())
            .and_then(|m| m.source_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}

/// Post as shown in list views
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub id: u64,

    /// Title as rendered HTML
    pub title_html: String,

    /// Absent when the post has no embedded featured media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image_url: Option<String>,
}

impl From<RawPost> for PostSummary {
    fn from(post: RawPost) -> Self {
        let featured_image_url = post.featured_image_url().map(str::to_string);
        Self {
            id: post.id,
            title_html: post.title.rendered,
            featured_image_url,
        }
    }
}

/// Full post fetched by id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    pub id: u64,
    pub title_html: String,
    pub content_html: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image_url: Option<String>,
}

impl From<RawPost> for PostDetail {
    fn from(post: RawPost) -> Self {
        let featured_image_url = post.featured_image_url().map(str::to_string);
        Self {
            id: post.id,
            title_html: post.title.rendered,
            content_html: post.content.rendered,
            featured_image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_summary_with_featured_media() {
        let raw: RawPost = serde_json::from_str(
            r#"{
                "id": 42,
                "title": { "rendered": "Hello &amp; Welcome" },
                "_embedded": {
                    "wp:featuredmedia": [ { "source_url": "https://cdn.test/42.jpg" } ]
                }
            }"#,
        )
        .unwrap();

        let summary = PostSummary::from(raw);
        assert_eq!(summary.id, 42);
        assert_eq!(summary.title_html, "Hello &amp; Welcome");
        assert_eq!(
            summary.featured_image_url.as_deref(),
            Some("https://cdn.test/42.jpg")
        );
    }

    #[test]
    fn test_post_summary_without_embed() {
        let raw: RawPost =
            serde_json::from_str(r#"{ "id": 1, "title": { "rendered": "Plain" } }"#).unwrap();

        let summary = PostSummary::from(raw);
        assert!(summary.featured_image_url.is_none());
    }

    #[test]
    fn test_restricted_media_has_no_url() {
        let raw: RawPost = serde_json::from_str(
            r#"{
                "id": 5,
                "title": { "rendered": "Locked" },
                "_embedded": { "wp:featuredmedia": [ { "code": "rest_forbidden" } ] }
            }"#,
        )
        .unwrap();

        assert!(raw.featured_image_url().is_none());
    }

    #[test]
    fn test_post_detail_from_raw() {
        let raw: RawPost = serde_json::from_str(
            r#"{
                "id": 9,
                "title": { "rendered": "Title" },
                "content": { "rendered": "<p>Body</p>" }
            }"#,
        )
        .unwrap();

        let detail = PostDetail::from(raw);
        assert_eq!(detail.content_html, "<p>Body</p>");
        assert!(detail.featured_image_url.is_none());
    }
}
