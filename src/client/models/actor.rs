//! Actor models

use serde::{Deserialize, Serialize};

/// Image shown for actors whose representative post could not be resolved
pub const ACTOR_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x220?text=No+Image";

/// Actor resource.
///
/// `image_url` is not part of the API record; it starts as the placeholder and
/// is filled in by image enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSummary {
    /// Actor ID
    pub id: u64,

    /// Actor name
    #[serde(default)]
    pub name: String,

    /// Number of posts featuring this actor
    #[serde(default, rename = "count")]
    pub post_count: u64,

    /// Representative image
    #[serde(skip_deserializing, default = "default_actor_image")]
    pub image_url: String,
}

fn default_actor_image() -> String {
    ACTOR_PLACEHOLDER_IMAGE.to_string()
}

impl ActorSummary {
    /// Whether the image is still the placeholder
    #[cfg(test)]
    pub fn has_placeholder_image(&self) -> bool {
        self.image_url == ACTOR_PLACEHOLDER_IMAGE
    }
}
