//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub timestamp: String,

    /// postdeck version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the metadata envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActorDisplay;

    #[test]
    fn test_envelope_carries_version() {
        let output = JsonOutput::new(vec![1, 2]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_actor_rows() {
        let rows = vec![ActorDisplay {
            id: 8,
            name: "Ann".to_string(),
            post_count: 14,
            image_url: "https://cdn.test/ann.jpg".to_string(),
        }];

        let parsed: serde_json::Value = serde_json::from_str(&format_json(&rows).unwrap()).unwrap();

        assert_eq!(parsed["data"][0]["name"], "Ann");
        assert_eq!(parsed["data"][0]["post_count"], 14);
        assert!(parsed["meta"]["timestamp"].is_string());
    }

    #[test]
    fn test_format_empty_rows() {
        let rows: Vec<ActorDisplay> = vec![];
        assert!(format_json(&rows).unwrap().contains("\"data\": []"));
    }
}
