//! Key-value store with per-entry expiry

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

/// A cached value with the time it was stored
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub stored_at: Instant,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) >= ttl
    }
}

/// In-memory cache whose entries are valid while younger than `ttl`.
///
/// No size bound: growth is limited by the TTL and the periodic sweep.
#[derive(Debug)]
pub struct TimedCache<T> {
    entries: HashMap<String, CacheEntry<T>>,
    ttl: Duration,
}

impl<T: Clone> TimedCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Get a live value. An expired entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<T> {
        let now = Instant::now();
        match self.entries.get(key) {
            Some(entry) if entry.is_expired(self.ttl, now) => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Store a value stamped with the current time, replacing any prior entry
    pub fn put(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn sweep(&mut self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl, now));
        before - self.entries.len()
    }

    /// Number of stored entries, including expired ones not yet evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
