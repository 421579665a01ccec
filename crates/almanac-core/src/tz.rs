//! Timezone lookup cache.

use std::sync::OnceLock;

use chrono_tz::Tz;
use dashmap::DashMap;
use tracing::trace;

use crate::error::{AlmanacError, AlmanacResult};

/// Process-wide default cache.
static GLOBAL_TIMEZONES: OnceLock<TimezoneCache> = OnceLock::new();

/// Returns true if `name` is an IANA identifier known to `chrono-tz`.
///
/// Parses without touching any cache.
pub fn is_known(name: &str) -> bool {
    name.parse::<Tz>().is_ok()
}

/// Cache of parsed IANA timezones keyed by name.
///
/// Entries are inserted on first lookup and never invalidated. Concurrent
/// first lookups of the same name race benignly: both parse the same value.
///
/// # Example
///
/// ```rust
/// use almanac_core::tz::TimezoneCache;
///
/// let cache = TimezoneCache::new();
/// let london = cache.resolve("Europe/London").unwrap();
/// assert_eq!(london.name(), "Europe/London");
/// assert!(cache.resolve("Mars/Olympus_Mons").is_err());
/// ```
#[derive(Debug, Default)]
pub struct TimezoneCache {
    zones: DashMap<String, Tz>,
}

impl TimezoneCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            zones: DashMap::new(),
        }
    }

    /// Get the global cache instance.
    pub fn global() -> &'static TimezoneCache {
        GLOBAL_TIMEZONES.get_or_init(TimezoneCache::new)
    }

    /// Resolves a timezone name, parsing it on first use.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::UnknownTimezone` if the name is not an IANA
    /// identifier known to `chrono-tz`.
    pub fn resolve(&self, name: &str) -> AlmanacResult<Tz> {
        if let Some(tz) = self.zones.get(name) {
            return Ok(*tz);
        }

        let tz: Tz = name
            .parse()
            .map_err(|_| AlmanacError::unknown_timezone(name))?;
        trace!(timezone = name, "caching timezone");
        self.zones.entry(name.to_string()).or_insert(tz);
        Ok(tz)
    }

    /// Returns true if `name` has been resolved through this cache.
    pub fn contains(&self, name: &str) -> bool {
        self.zones.contains_key(name)
    }

    /// Number of cached timezones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_caches_once() {
        let cache = TimezoneCache::new();
        assert!(cache.is_empty());

        let a = cache.resolve("America/Argentina/Buenos_Aires").unwrap();
        let b = cache.resolve("America/Argentina/Buenos_Aires").unwrap();
        assert_eq!(a, b);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("America/Argentina/Buenos_Aires"));
        assert!(!cache.contains("Asia/Tokyo"));
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("Europe/Athens"));
        assert!(!is_known("Nowhere/Land"));
        assert!(!is_known(""));
    }

    #[test]
    fn test_unknown_timezone() {
        let cache = TimezoneCache::new();
        assert_eq!(
            cache.resolve("Nowhere/Land"),
            Err(AlmanacError::unknown_timezone("Nowhere/Land"))
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_first_lookup() {
        let cache = TimezoneCache::new();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| cache.resolve("Asia/Tokyo").unwrap());
            }
        });
        assert_eq!(cache.len(), 1);
    }
}
