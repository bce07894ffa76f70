//! Media URL construction and playback source selection
//!
//! The media host addresses files by post title. Titles reach us as rendered
//! HTML, and upstream is inconsistent about the typographic apostrophe, so two
//! candidate URLs are built and the second is tried only when the first fails.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use once_cell::sync::Lazy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::{ApiError, Result};

/// Right single quotation mark, as it appears in rendered titles
pub const SMART_APOSTROPHE: char = '\u{2019}';

/// Characters left unescaped when encoding a title as one path component.
/// Matches the browser's component encoding: alphanumerics plus `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[^>]+(>|$)").expect("valid html tag regex"));

static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").expect("valid entity regex")
});

/// Strip HTML tags and decode character references.
///
/// Unknown named entities are kept verbatim.
pub fn plain_text(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, "");
    ENTITY_RE
        .replace_all(&stripped, |caps: &Captures<'_>| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .trim()
        .to_string()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(numeric) = entity.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "hellip" => "\u{2026}",
        _ => return None,
    };
    Some(decoded.to_string())
}

/// The two candidate media URLs for one post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSources {
    /// Title with the typographic apostrophe folded to ASCII
    pub primary: String,
    /// Title with the typographic apostrophe percent-encoded as UTF-8
    pub fallback: String,
}

impl VideoSources {
    /// Build both candidates from a plain-text title.
    pub fn resolve(title: &str, stream_base: &str) -> Self {
        let base = stream_base.trim_end_matches('/');
        let folded = title.replace(SMART_APOSTROPHE, "'");

        Self {
            primary: media_url(base, &folded),
            fallback: media_url(base, title),
        }
    }
}

fn media_url(base: &str, title: &str) -> String {
    format!("{}/{}.mp4", base, utf8_percent_encode(title, COMPONENT))
}

/// Which candidate is attached to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Primary,
    Fallback,
}

/// Source selection for one rendered player.
///
/// Starts on the primary URL. The first load error moves to the fallback;
/// the fallback is terminal.
#[derive(Debug, Clone)]
pub struct Playback {
    sources: VideoSources,
    state: PlaybackState,
}

impl Playback {
    pub fn new(sources: VideoSources) -> Self {
        Self {
            sources,
            state: PlaybackState::Primary,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_url(&self) -> &str {
        match self.state {
            PlaybackState::Primary => &self.sources.primary,
            PlaybackState::Fallback => &self.sources.fallback,
        }
    }

    /// Handle a load error on the current source.
    ///
    /// Returns the URL to reload with, or `None` once the fallback is in use.
    pub fn on_error(&mut self) -> Option<&str> {
        match self.state {
            PlaybackState::Primary => {
                self.state = PlaybackState::Fallback;
                Some(&self.sources.fallback)
            }
            PlaybackState::Fallback => None,
        }
    }
}

/// Something that can try to load a media URL
#[async_trait]
pub trait MediaProbe: Send + Sync {
    async fn load(&self, url: &str) -> Result<()>;
}

/// Probes media URLs with an HTTP HEAD request
pub struct HttpMediaProbe {
    http: reqwest::Client,
}

impl HttpMediaProbe {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("postdeck/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::from)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl MediaProbe for HttpMediaProbe {
    async fn load(&self, url: &str) -> Result<()> {
        let response = self.http.head(url).send().await.map_err(ApiError::from)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::HttpStatus(status.as_u16()).into())
        }
    }
}

/// Result of trying to play one post's media
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackOutcome {
    /// URL the player ended up on
    pub url: String,
    pub state: PlaybackState,
    /// Whether the final source loaded
    pub playable: bool,
}

/// Load the primary source, switching to the fallback at most once.
///
/// A fallback failure is logged and reported as not playable, never as an
/// error.
pub async fn play_with_fallback<P>(probe: &P, sources: VideoSources) -> PlaybackOutcome
where
    P: MediaProbe + ?Sized,
{
    let mut playback = Playback::new(sources);

    let playable = match probe.load(playback.current_url()).await {
        Ok(()) => true,
        Err(e) => {
            debug!("Primary source failed ({}): {}", playback.current_url(), e);
            match playback.on_error() {
                Some(fallback) => match probe.load(fallback).await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Fallback source failed ({}): {}", fallback, e);
                        false
                    }
                },
                None => false,
            }
        }
    };

    PlaybackOutcome {
        url: playback.current_url().to_string(),
        state: playback.state(),
        playable,
    }
}
