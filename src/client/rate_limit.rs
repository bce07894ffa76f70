//! Per-class rate limiting for the content API
//!
//! Implements reactive rate limiting that only activates after receiving a 429.
//! Each resource class is paced independently.

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;

use super::pagination::ResourceClass;

impl ResourceClass {
    /// Requests per second allowed once a class has been throttled.
    pub fn rate_limit(&self) -> u32 {
        match self {
            // Actor listings fan out one post lookup per actor
            ResourceClass::Posts => 10,
            ResourceClass::Tags => 4,
            ResourceClass::Actors => 4,
        }
    }
}

/// Rate limiter state for a single resource class.
pub struct ClassRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    active: AtomicBool,
    class: ResourceClass,
}

impl ClassRateLimiter {
    /// Create a new, inactive rate limiter for a resource class.
    pub fn new(class: ResourceClass) -> Self {
        let quota =
            Quota::per_second(NonZeroU32::new(class.rate_limit()).unwrap_or(NonZeroU32::MIN));

        Self {
            limiter: RateLimiter::direct(quota),
            active: AtomicBool::new(false),
            class,
        }
    }

    /// Activate rate limiting for this class.
    pub fn activate(&self) {
        let was_active = self.active.swap(true, Ordering::SeqCst);
        if !was_active {
            debug!("Rate limiting activated for {}", self.class);
        }
    }

    /// Check if rate limiting is active.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Wait for permission if rate limiting is active.
    pub async fn wait_if_active(&self) {
        if self.is_active() {
            debug!("Waiting for rate limiter {}", self.class);
            self.limiter.until_ready().await;
        }
    }
}

/// Collection of rate limiters for all resource classes.
pub struct RateLimiterSet {
    limiters: HashMap<ResourceClass, ClassRateLimiter>,
}

impl Default for RateLimiterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiterSet {
    /// Create a new set of rate limiters for all resource classes.
    pub fn new() -> Self {
        let limiters = ResourceClass::ALL
            .into_iter()
            .map(|class| (class, ClassRateLimiter::new(class)))
            .collect();

        Self { limiters }
    }

    /// Wait for rate limit permission for a class (if active).
    pub async fn wait_for(&self, class: ResourceClass) {
        if let Some(limiter) = self.limiters.get(&class) {
            limiter.wait_if_active().await;
        }
    }

    /// Activate rate limiting for a class (called on 429).
    pub fn activate(&self, class: ResourceClass) {
        if let Some(limiter) = self.limiters.get(&class) {
            limiter.activate();
        }
    }

    #[cfg(test)]
    pub fn is_active(&self, class: ResourceClass) -> bool {
        self.limiters
            .get(&class)
            .map(ClassRateLimiter::is_active)
            .unwrap_or(false)
    }
}
