//! Post display models

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::browse::PostView;
use crate::browse::video::{PlaybackOutcome, VideoSources};
use crate::browse::plain_text;
use crate::client::PostSummary;
use crate::client::models::POST_PLACEHOLDER_IMAGE;

const TITLE_WIDTH: usize = 60;

/// Post display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PostDisplay {
    /// Post ID
    #[tabled(rename = "ID")]
    pub id: u64,

    /// Title without markup
    #[tabled(rename = "TITLE")]
    pub title: String,

    /// Featured image, or the placeholder
    #[tabled(rename = "IMAGE")]
    pub image_url: String,
}

impl From<&PostSummary> for PostDisplay {
    fn from(post: &PostSummary) -> Self {
        Self {
            id: post.id,
            title: truncate_string(&plain_text(&post.title_html), TITLE_WIDTH),
            image_url: post
                .featured_image_url
                .clone()
                .unwrap_or_else(|| POST_PLACEHOLDER_IMAGE.to_string()),
        }
    }
}

/// Single post with its media candidates.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailDisplay {
    pub id: u64,
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub video: VideoSources,

    /// Present when the media host was probed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback: Option<PlaybackOutcome>,

    /// Body text without markup
    pub content: String,
}

impl PostDetailDisplay {
    pub fn new(view: PostView, playback: Option<PlaybackOutcome>) -> Self {
        Self {
            id: view.detail.id,
            content: plain_text(&view.detail.content_html),
            image_url: view.detail.featured_image_url,
            title: view.title,
            video: view.video,
            playback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PostDetail;

    #[test]
    fn test_post_display_uses_placeholder() {
        let post = PostSummary {
            id: 3,
            title_html: "Tom &amp; Jerry".to_string(),
            featured_image_url: None,
        };

        let display = PostDisplay::from(&post);

        assert_eq!(display.title, "Tom & Jerry");
        assert_eq!(display.image_url, POST_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_post_display_keeps_featured_image() {
        let post = PostSummary {
            id: 4,
            title_html: "<b>Bold</b>".to_string(),
            featured_image_url: Some("https://cdn.test/4.jpg".to_string()),
        };

        let display = PostDisplay::from(&post);

        assert_eq!(display.title, "Bold");
        assert_eq!(display.image_url, "https://cdn.test/4.jpg");
    }

    #[test]
    fn test_detail_display_strips_content() {
        let view = PostView {
            detail: PostDetail {
                id: 9,
                title_html: "Clip".to_string(),
                content_html: "<p>Hello <em>there</em></p>".to_string(),
                featured_image_url: None,
            },
            title: "Clip".to_string(),
            video: VideoSources::resolve("Clip", "https://stream.test"),
        };

        let display = PostDetailDisplay::new(view, None);

        assert_eq!(display.content, "Hello there");
        assert_eq!(display.video.primary, "https://stream.test/Clip.mp4");
    }
}
