//! In-memory response cache
//!
//! Pages are cached per resource class under flat string keys and expire after
//! a fixed TTL. Expired entries are dropped lazily on read and by a periodic
//! sweep.

pub mod key;
pub mod timed;

use std::time::Duration;

/// Cache timing defaults
pub struct CacheTtl;

impl CacheTtl {
    /// How long a fetched page stays valid
    pub const PAGE: Duration = Duration::from_secs(5 * 60); // 5 min

    /// Interval between background sweeps
    pub const SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60); // 10 min
}

// Re-export main types
pub use key::cache_key;
pub use timed::TimedCache;
