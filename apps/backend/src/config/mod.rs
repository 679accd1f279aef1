//! Process configuration read from the environment at startup.

pub mod cookie;
pub mod db;
pub mod payments;

use std::time::Duration;

pub use cookie::RuntimeEnv;
pub use db::DbKind;
pub use payments::PaymentsConfig;

/// Role lookups are cached for this long; `0` (the default) disables the cache.
pub fn role_cache_ttl() -> Option<Duration> {
    std::env::var("ROLE_CACHE_TTL_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
