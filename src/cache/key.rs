//! Cache key generation

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::client::pagination::ResourceClass;

/// Generate a deterministic cache key from resource class, query parameters
/// and page number.
///
/// Parameters are sorted so that ordering never changes the key, and values
/// are percent-encoded so a search term cannot forge another query's key.
pub fn cache_key(class: ResourceClass, params: &[(&str, String)], page: u32) -> String {
    let mut sorted_params: Vec<_> = params.iter().collect();
    sorted_params.sort_by_key(|(k, _)| *k);

    let query = sorted_params
        .iter()
        .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}|{}|page={}", class, query, page)
}
