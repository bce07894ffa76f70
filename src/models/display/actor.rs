//! Actor display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::ActorSummary;

/// Actor display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ActorDisplay {
    /// Actor ID
    #[tabled(rename = "ACTOR ID")]
    pub id: u64,

    /// Actor name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Number of videos featuring the actor
    #[tabled(rename = "VIDEOS")]
    pub post_count: u64,

    /// Representative image, or the placeholder
    #[tabled(rename = "IMAGE")]
    pub image_url: String,
}

impl From<&ActorSummary> for ActorDisplay {
    fn from(actor: &ActorSummary) -> Self {
        Self {
            id: actor.id,
            name: actor.name.clone(),
            post_count: actor.post_count,
            image_url: actor.image_url.clone(),
        }
    }
}
