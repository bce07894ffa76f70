//! Configuration management for postdeck

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::CacheTtl;
use crate::client::pagination::ResourceClass;
use crate::error::{ConfigError, Result};

/// Content API root used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "https://example.com/wp-json/wp/v2";

/// Media host used when nothing else is configured
pub const DEFAULT_STREAM_BASE: &str = "https://stream.example.com";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of the content API (posts, tags and actors live below it)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Base URL that media files are addressed under
    #[serde(default = "default_stream_base")]
    pub stream_base: String,

    /// Items requested per page, per resource class
    #[serde(default)]
    pub page_sizes: PageSizes,

    /// Response cache timing
    #[serde(default)]
    pub cache: CacheSettings,

    /// Quiet interval before a search fires
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Optional overall request timeout. Requests never time out when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Page sizes for each resource class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSizes {
    #[serde(default = "default_posts_per_page")]
    pub posts: u32,
    #[serde(default = "default_tags_per_page")]
    pub tags: u32,
    #[serde(default = "default_actors_per_page")]
    pub actors: u32,
}

/// Cache TTL and sweep cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_stream_base() -> String {
    DEFAULT_STREAM_BASE.to_string()
}

fn default_posts_per_page() -> u32 {
    12
}

fn default_tags_per_page() -> u32 {
    100
}

fn default_actors_per_page() -> u32 {
    20
}

fn default_ttl_secs() -> u64 {
    CacheTtl::PAGE.as_secs()
}

fn default_sweep_interval_secs() -> u64 {
    CacheTtl::SWEEP_INTERVAL.as_secs()
}

fn default_search_debounce_ms() -> u64 {
    500
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            posts: default_posts_per_page(),
            tags: default_tags_per_page(),
            actors: default_actors_per_page(),
        }
    }
}

impl PageSizes {
    /// Page size for one resource class
    pub fn for_class(&self, class: ResourceClass) -> u32 {
        match class {
            ResourceClass::Posts => self.posts,
            ResourceClass::Tags => self.tags,
            ResourceClass::Actors => self.actors,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            stream_base: default_stream_base(),
            page_sizes: PageSizes::default(),
            cache: CacheSettings::default(),
            search_debounce_ms: default_search_debounce_ms(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".postdeck").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing default file is not an error: defaults are used instead.
    /// A missing explicit path is reported as `ConfigError::NotFound`.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    log::debug!("No config at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, api_base: Option<&str>, stream_base: Option<&str>) -> Self {
        if let Some(base) = api_base {
            self.api_base = base.to_string();
        }
        if let Some(base) = stream_base {
            self.stream_base = base.to_string();
        }
        self
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Reject values that would make pagination or caching meaningless
    pub fn validate(&self) -> Result<()> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base must not be empty".to_string()).into());
        }
        for class in ResourceClass::ALL {
            if self.page_sizes.for_class(class) == 0 {
                return Err(ConfigError::Invalid(format!(
                    "page size for {} must be at least 1",
                    class
                ))
                .into());
            }
        }
        if self.cache.sweep_interval_secs == 0 {
            return Err(
                ConfigError::Invalid("cache.sweep_interval_secs must be positive".to_string())
                    .into(),
            );
        }
        Ok(())
    }
}
