//! Bounded FIFO memo of solved solar events.
//!
//! Keys are `(kind, day_start)`. Eviction removes the oldest *inserted*
//! key; lookups never refresh a key's position.

use std::collections::{HashMap, VecDeque};

use wadokei_time::Instant;

use crate::types::SolarEventKind;

/// Number of events retained when no capacity is given.
pub const DEFAULT_CACHE_CAPACITY: usize = 6;

/// Cache key: the event kind and the UTC day it was solved for.
pub type CacheKey = (SolarEventKind, Instant);

/// Hit/miss counters since the cache was created or last cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Fixed-capacity map with insertion-order eviction.
#[derive(Debug, Clone)]
pub struct EventCache {
    capacity: usize,
    data: HashMap<CacheKey, Instant>,
    order: VecDeque<CacheKey>,
    stats: CacheStats,
}

impl Default for EventCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl EventCache {
    /// Create a cache holding at most `capacity` events (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            data: HashMap::with_capacity(capacity + 1),
            order: VecDeque::with_capacity(capacity + 1),
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Look up a solved event, counting the hit or miss.
    pub fn get(&mut self, kind: SolarEventKind, day_start: Instant) -> Option<Instant> {
        let found = self.data.get(&(kind, day_start)).copied();
        match found {
            Some(_) => self.stats.hits += 1,
            None => self.stats.misses += 1,
        }
        found
    }

    /// Whether a key is resident, without touching the counters.
    pub fn contains(&self, kind: SolarEventKind, day_start: Instant) -> bool {
        self.data.contains_key(&(kind, day_start))
    }

    /// Store a solved event and return it.
    ///
    /// Re-setting a resident key replaces the value but keeps its original
    /// insertion position.
    pub fn set(&mut self, kind: SolarEventKind, day_start: Instant, value: Instant) -> Instant {
        let key = (kind, day_start);
        if self.data.insert(key, value).is_none() {
            self.order.push_back(key);
            if self.order.len() > self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.data.remove(&oldest);
                }
            }
        }
        value
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.data.clear();
        self.order.clear();
        self.stats = CacheStats::default();
    }
}
