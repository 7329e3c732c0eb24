use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::Mutex;

/// Fixed-window counter for one client identifier.
#[derive(Debug)]
struct RateLimitEntry {
    count: u32,
    /// Epoch milliseconds at which the window expires.
    reset_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: i64,
}

impl RateLimitDecision {
    /// Seconds until the window expires, rounded up.
    pub fn retry_after_secs(&self, now_ms: i64) -> u64 {
        ((self.reset_at - now_ms).max(0) as u64).div_ceil(1000)
    }
}

/// In-memory fixed-window rate limiter keyed by client identifier.
///
/// State is process-local and lost on restart; acceptable for a low-traffic
/// contact form. Entries expire lazily on access and are garbage-collected by
/// the background sweep.
#[derive(Clone)]
pub struct RateLimiterStore {
    map: Arc<DashMap<String, Arc<Mutex<RateLimitEntry>>>>,
    limit: u32,
    window_ms: i64,
}

impl RateLimiterStore {
    pub fn new(limit: u32, window_ms: i64) -> Self {
        Self {
            map: Arc::new(DashMap::new()),
            limit,
            window_ms,
        }
    }

    /// Charge one request against `identifier`'s current window.
    ///
    /// Rejected requests do not consume budget; `reset_at` is left untouched
    /// so repeated offenders see a stable retry hint.
    pub fn check(&self, identifier: &str) -> RateLimitDecision {
        self.check_at(identifier, Utc::now().timestamp_millis())
    }

    pub fn check_at(&self, identifier: &str, now_ms: i64) -> RateLimitDecision {
        let cell = self.entry_for(identifier);
        let mut entry = cell.lock();

        // A request landing exactly on the boundary starts a fresh window.
        if entry.reset_at <= now_ms {
            entry.count = 1;
            entry.reset_at = now_ms + self.window_ms;
            return RateLimitDecision {
                allowed: true,
                limit: self.limit,
                remaining: self.limit - 1,
                reset_at: entry.reset_at,
            };
        }

        if entry.count >= self.limit {
            tracing::warn!(
                identifier,
                count = entry.count,
                limit = self.limit,
                "Rate limit exceeded"
            );
            return RateLimitDecision {
                allowed: false,
                limit: self.limit,
                remaining: 0,
                reset_at: entry.reset_at,
            };
        }

        entry.count += 1;
        RateLimitDecision {
            allowed: true,
            limit: self.limit,
            remaining: self.limit - entry.count,
            reset_at: entry.reset_at,
        }
    }

    fn entry_for(&self, identifier: &str) -> Arc<Mutex<RateLimitEntry>> {
        if let Some(existing) = self.map.get(identifier) {
            existing.clone()
        } else {
            // `reset_at` in the far past makes the first check start a window.
            let fresh = Arc::new(Mutex::new(RateLimitEntry {
                count: 0,
                reset_at: i64::MIN,
            }));
            match self.map.entry(identifier.to_string()) {
                dashmap::mapref::entry::Entry::Occupied(entry) => entry.get().clone(),
                dashmap::mapref::entry::Entry::Vacant(entry) => {
                    entry.insert(fresh.clone());
                    fresh
                }
            }
        }
    }

    /// Delete every entry whose window has already expired. Returns how many
    /// entries were removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Utc::now().timestamp_millis())
    }

    pub fn sweep_at(&self, now_ms: i64) -> usize {
        let expired: Vec<String> = self
            .map
            .iter()
            .filter_map(|entry| {
                if entry.value().lock().reset_at < now_ms {
                    Some(entry.key().clone())
                } else {
                    None
                }
            })
            .collect();

        let mut removed = 0;
        for key in expired {
            // Re-check under the map lock: a concurrent check() may have
            // started a fresh window since we looked.
            if self
                .map
                .remove_if(&key, |_, cell| cell.lock().reset_at < now_ms)
                .is_some()
            {
                removed += 1;
            }
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
