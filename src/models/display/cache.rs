//! Cache statistics display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::pagination::ResourceClass;

/// Cached page count for one resource class.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CacheStatDisplay {
    #[tabled(rename = "CLASS")]
    pub class: ResourceClass,

    #[tabled(rename = "CACHED PAGES")]
    pub pages: usize,
}

impl From<(ResourceClass, usize)> for CacheStatDisplay {
    fn from((class, pages): (ResourceClass, usize)) -> Self {
        Self { class, pages }
    }
}
