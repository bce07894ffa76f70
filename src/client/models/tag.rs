//! Tag models

use serde::{Deserialize, Serialize};

/// Tag resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSummary {
    /// Tag ID
    pub id: u64,

    /// Tag name
    #[serde(default)]
    pub name: String,

    /// Number of posts carrying this tag
    #[serde(default, rename = "count")]
    pub post_count: u64,
}
