//! Fixed-window rate limiting for embedding callers
//!
//! The limiter is an explicit service over an injected counter store, keyed
//! by client identity (an IP, a user id). Callers own the store; nothing
//! here is process-global.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Default window length.
pub const DEFAULT_WINDOW_SECS: i64 = 60;
/// Default requests allowed per key per window.
pub const DEFAULT_MAX_REQUESTS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCounter {
    pub count: u32,
    pub reset_at: DateTime<Utc>,
}

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

/// Counter storage owned by the caller. An external deployment can back this
/// with a shared cache; the in-memory implementation serves a single process.
pub trait CounterStore {
    fn get(&self, key: &str) -> Option<WindowCounter>;
    fn put(&mut self, key: &str, counter: WindowCounter);
}

#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    counters: HashMap<String, WindowCounter>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for MemoryCounterStore {
    fn get(&self, key: &str) -> Option<WindowCounter> {
        self.counters.get(key).copied()
    }

    fn put(&mut self, key: &str, counter: WindowCounter) {
        self.counters.insert(key.to_string(), counter);
    }
}

pub struct FixedWindowLimiter<S: CounterStore> {
    store: S,
    window: Duration,
    max_requests: u32,
}

impl Default for FixedWindowLimiter<MemoryCounterStore> {
    fn default() -> Self {
        Self::new(MemoryCounterStore::new())
    }
}

impl<S: CounterStore> FixedWindowLimiter<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            window: Duration::seconds(DEFAULT_WINDOW_SECS),
            max_requests: DEFAULT_MAX_REQUESTS,
        }
    }

    pub fn with_limits(mut self, window_secs: i64, max_requests: u32) -> Self {
        self.window = Duration::seconds(window_secs);
        self.max_requests = max_requests;
        self
    }

    /// Record one request for `key` and decide whether it is allowed.
    pub fn check(&mut self, key: &str) -> RateLimitDecision {
        self.check_at(key, Utc::now())
    }

    /// Clock-explicit variant of [`check`](Self::check).
    pub fn check_at(&mut self, key: &str, now: DateTime<Utc>) -> RateLimitDecision {
        match self.store.get(key) {
            Some(counter) if now <= counter.reset_at => {
                if counter.count >= self.max_requests {
                    return RateLimitDecision {
                        allowed: false,
                        remaining: 0,
                        reset_at: counter.reset_at,
                    };
                }
                let counter = WindowCounter {
                    count: counter.count + 1,
                    reset_at: counter.reset_at,
                };
                self.store.put(key, counter);
                RateLimitDecision {
                    allowed: true,
                    remaining: self.max_requests - counter.count,
                    reset_at: counter.reset_at,
                }
            }
            // first request for this key, or the window lapsed
            _ => {
                let counter = WindowCounter {
                    count: 1,
                    reset_at: now + self.window,
                };
                self.store.put(key, counter);
                RateLimitDecision {
                    allowed: true,
                    remaining: self.max_requests - 1,
                    reset_at: counter.reset_at,
                }
            }
        }
    }
}
