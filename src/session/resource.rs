//! Cached, single-flight page fetching for one resource class

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::debug;

use super::gate::RequestGate;
use super::state::PaginationState;
use crate::cache::{TimedCache, cache_key};
use crate::client::pagination::{ListQuery, PageResult, ResourceClass};
use crate::error::Result;

/// What a fetch produced
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// Loaded from the network and cached
    Fetched(Arc<PageResult<T>>),
    /// Served from the cache without touching the network
    Cached(Arc<PageResult<T>>),
    /// Dropped because a fetch for this class was already in flight
    InFlight,
}

impl<T> FetchOutcome<T> {
    pub fn page(&self) -> Option<&Arc<PageResult<T>>> {
        match self {
            FetchOutcome::Fetched(page) | FetchOutcome::Cached(page) => Some(page),
            FetchOutcome::InFlight => None,
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, FetchOutcome::Cached(_))
    }
}

/// Cache, gate and pagination state for one resource class
pub struct ResourceSession<T> {
    class: ResourceClass,
    cache: Mutex<TimedCache<Arc<PageResult<T>>>>,
    gate: Arc<RequestGate>,
    pagination: Mutex<PaginationState>,
}

impl<T> ResourceSession<T> {
    pub fn new(class: ResourceClass, ttl: Duration, gate: Arc<RequestGate>) -> Self {
        Self {
            class,
            cache: Mutex::new(TimedCache::new(ttl)),
            gate,
            pagination: Mutex::new(PaginationState::default()),
        }
    }

    /// Fetch one page, serving it from the cache when possible.
    ///
    /// A cache hit never touches the gate. On a miss the class gate must be
    /// free, otherwise the call is dropped with [`FetchOutcome::InFlight`].
    /// `load` errors are returned as-is and leave the cache untouched; the
    /// gate is released whichever way `load` ends.
    pub async fn fetch<F, Fut>(
        &self,
        query: &ListQuery,
        page: u32,
        load: F,
    ) -> Result<FetchOutcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<PageResult<T>>>,
    {
        let key = cache_key(self.class, &query.to_query_params(), page);

        let hit = self.lock_cache().get(&key);
        if let Some(cached) = hit {
            debug!("Cache hit: {}", key);
            self.record_page(query, page, cached.total_pages);
            return Ok(FetchOutcome::Cached(cached));
        }

        let Some(_pass) = self.gate.enter(self.class) else {
            debug!("{} fetch already in flight, dropping {}", self.class, key);
            return Ok(FetchOutcome::InFlight);
        };

        debug!("Cache miss: {}", key);
        let result = Arc::new(load().await?);

        self.lock_cache().put(key, result.clone());
        self.record_page(query, page, result.total_pages);
        Ok(FetchOutcome::Fetched(result))
    }

    /// Current pagination snapshot
    #[cfg(test)]
    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    pub fn pagination(&self) -> PaginationState {
        self.lock_pagination().clone()
    }

    /// Drop expired pages, returning how many were removed
    pub fn sweep(&self) -> usize {
        self.lock_cache().sweep()
    }

    /// Number of pages held, including expired ones not yet swept
    pub fn cached_pages(&self) -> usize {
        self.lock_cache().len()
    }

    fn record_page(&self, query: &ListQuery, page: u32, total_pages: u32) {
        let mut state = self.lock_pagination();
        state.query = query.clone();
        state.current_page = page;
        state.total_pages = total_pages.max(1);
    }

    fn lock_cache(&self) -> MutexGuard<'_, TimedCache<Arc<PageResult<T>>>> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_pagination(&self) -> MutexGuard<'_, PaginationState> {
        self.pagination.lock().unwrap_or_else(|e| e.into_inner())
    }
}
