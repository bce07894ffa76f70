//! Tag display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::TagSummary;

/// Tag display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TagDisplay {
    #[tabled(rename = "TAG ID")]
    pub id: u64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "POSTS")]
    pub post_count: u64,
}

impl From<&TagSummary> for TagDisplay {
    fn from(tag: &TagSummary) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
            post_count: tag.post_count,
        }
    }
}
