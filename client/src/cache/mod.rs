//! Time-bounded, request-coalescing fetch cache
//!
//! Each key maps to at most one stored [`CacheEntry`] and at most one fetch in
//! flight. Fetches run on spawned tasks gated by a shared semaphore, so a
//! caller that gives up does not cancel work other callers (or the cache
//! itself) are waiting on.
//!
//! Lock order is always `pending` then `entries`.

mod entry;
mod snapshot;

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tokio::sync::Semaphore;

use crate::clock::{Clock, SystemClock, Timestamp};
use crate::config::{CacheConfig, StalePolicy};
use crate::error::FetchError;

pub use entry::CacheEntry;
pub use snapshot::{CacheSnapshot, RestoreReport, default_snapshot_path};

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, FetchError>>>;

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A valid stored entry
    Cache,
    /// A fetch started by this call or one it joined
    Fetch,
    /// An expired entry served because its refresh failed
    Stale,
}

/// A value returned by [`FetchCache::get_or_fetch`]
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<V> {
    pub value: V,
    pub source: Source,
}

/// Counter snapshot returned by [`FetchCache::stats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Fetches that actually ran
    pub fetches: u64,
    /// Callers that joined a fetch already in flight
    pub coalesced: u64,
    pub failures: u64,
    pub stale_served: u64,
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    fetches: AtomicU64,
    coalesced: AtomicU64,
    failures: AtomicU64,
    stale_served: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            fetches: self.fetches.load(Ordering::Relaxed),
            coalesced: self.coalesced.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            stale_served: self.stale_served.load(Ordering::Relaxed),
        }
    }
}

struct CacheInner<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    pending: Mutex<HashMap<K, SharedFetch<V>>>,
    permits: Arc<Semaphore>,
    clock: Arc<dyn Clock>,
    config: CacheConfig,
    counters: Counters,
}

impl<K, V> CacheInner<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone,
{
    /// Store the result of a finished fetch and retire its pending slot
    fn complete(&self, key: K, result: &Result<V, FetchError>) {
        let mut pending = lock(&self.pending);
        match result {
            Ok(value) => {
                let entry = CacheEntry::new(value.clone(), self.clock.now());
                write(&self.entries).insert(key.clone(), entry);
            }
            Err(e) => {
                Counters::bump(&self.counters.failures);
                tracing::warn!(key = ?key, error = %e, "Fetch failed");
            }
        }
        pending.remove(&key);
    }

    /// Drop the pending slot of a fetch task that never completed
    fn abandon(&self, key: &K) {
        lock(&self.pending).remove(key);
    }
}

/// Process-wide cache handle; clones share state
pub struct FetchCache<K, V> {
    inner: Arc<CacheInner<K, V>>,
}

impl<K, V> Clone for FetchCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> fmt::Debug for FetchCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchCache")
            .field("config", &self.inner.config)
            .field("stats", &self.inner.counters.snapshot())
            .finish()
    }
}

impl<K, V> Default for FetchCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<K, V> FetchCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        // A zero-permit semaphore would queue every fetch forever
        let permits = config.max_concurrent_requests.max(1);
        Self {
            inner: Arc::new(CacheInner {
                entries: RwLock::new(HashMap::new()),
                pending: Mutex::new(HashMap::new()),
                permits: Arc::new(Semaphore::new(permits)),
                clock,
                config,
                counters: Counters::default(),
            }),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.inner.config
    }

    pub fn now(&self) -> Timestamp {
        self.inner.clock.now()
    }

    /// A valid stored value; absent and expired keys both miss
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.now();
        let entries = read(&self.inner.entries);
        match entries.get(key) {
            Some(entry) if entry.is_valid(now, self.inner.config.ttl) => {
                Counters::bump(&self.inner.counters.hits);
                Some(entry.data.clone())
            }
            _ => {
                Counters::bump(&self.inner.counters.misses);
                None
            }
        }
    }

    /// The stored entry for `key`, expired or not
    pub fn peek_stale(&self, key: &K) -> Option<CacheEntry<V>> {
        read(&self.inner.entries).get(key).cloned()
    }

    /// Resolve `key`, fetching on a miss
    ///
    /// Concurrent calls for the same key share one fetch. `fetcher` is only
    /// invoked when this call starts the fetch. A failed fetch leaves any
    /// stored entry untouched; whether that entry is returned depends on
    /// [`StalePolicy`].
    pub async fn get_or_fetch<F, Fut>(&self, key: K, fetcher: F) -> Result<Resolved<V>, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, FetchError>> + Send + 'static,
    {
        let shared = {
            let mut pending = lock(&self.inner.pending);

            let now = self.now();
            if let Some(entry) = read(&self.inner.entries).get(&key)
                && entry.is_valid(now, self.inner.config.ttl)
            {
                Counters::bump(&self.inner.counters.hits);
                tracing::debug!(key = ?key, "Cache hit");
                return Ok(Resolved {
                    value: entry.data.clone(),
                    source: Source::Cache,
                });
            }
            Counters::bump(&self.inner.counters.misses);

            match pending.get(&key) {
                Some(in_flight) => {
                    Counters::bump(&self.inner.counters.coalesced);
                    tracing::debug!(key = ?key, "Joining in-flight fetch");
                    in_flight.clone()
                }
                None => {
                    tracing::debug!(key = ?key, "Cache miss, fetching");
                    let fetch = self.spawn_fetch(key.clone(), fetcher());
                    pending.insert(key.clone(), fetch.clone());
                    fetch
                }
            }
        };

        match shared.await {
            Ok(value) => Ok(Resolved {
                value,
                source: Source::Fetch,
            }),
            Err(e) => self.fall_back(&key, e),
        }
    }

    fn spawn_fetch<Fut>(&self, key: K, fetch: Fut) -> SharedFetch<V>
    where
        Fut: Future<Output = Result<V, FetchError>> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            let result = match Arc::clone(&inner.permits).acquire_owned().await {
                Ok(_permit) => {
                    Counters::bump(&inner.counters.fetches);
                    fetch.await
                }
                Err(_) => Err(FetchError::Aborted("request limiter closed".to_string())),
            };
            inner.complete(task_key, &result);
            result
        });

        let inner = Arc::clone(&self.inner);
        handle
            .map(move |joined| match joined {
                Ok(result) => result,
                Err(e) => {
                    inner.abandon(&key);
                    Err(FetchError::Aborted(e.to_string()))
                }
            })
            .boxed()
            .shared()
    }

    fn fall_back(&self, key: &K, error: FetchError) -> Result<Resolved<V>, FetchError> {
        if self.inner.config.stale_policy != StalePolicy::ServeStale {
            return Err(error);
        }

        let Some(entry) = self.peek_stale(key) else {
            return Err(error);
        };

        Counters::bump(&self.inner.counters.stale_served);
        tracing::warn!(
            key = ?key,
            age_ms = entry.age(self.now()).as_millis() as u64,
            error = %error,
            "Refresh failed, serving stale entry"
        );
        Ok(Resolved {
            value: entry.data,
            source: Source::Stale,
        })
    }

    /// Store `value` as freshly fetched
    pub fn insert(&self, key: K, value: V) {
        let entry = CacheEntry::new(value, self.now());
        write(&self.inner.entries).insert(key, entry);
    }

    /// Store `entry` unless a newer one is already present
    pub fn insert_entry(&self, key: K, entry: CacheEntry<V>) -> bool {
        let mut entries = write(&self.inner.entries);
        match entries.get(&key) {
            Some(existing) if existing.timestamp >= entry.timestamp => false,
            _ => {
                entries.insert(key, entry);
                true
            }
        }
    }

    /// Remove a stored entry; an in-flight fetch for the key still lands
    pub fn invalidate(&self, key: &K) -> bool {
        write(&self.inner.entries).remove(key).is_some()
    }

    pub fn clear(&self) {
        write(&self.inner.entries).clear();
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = self.now();
        let ttl = self.inner.config.ttl;
        let mut entries = write(&self.inner.entries);
        let before = entries.len();
        entries.retain(|_, entry| entry.is_valid(now, ttl));
        before - entries.len()
    }

    /// Stored entries, expired ones included
    pub fn len(&self) -> usize {
        read(&self.inner.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.inner.entries).is_empty()
    }

    /// Keys with a fetch in flight
    pub fn in_flight(&self) -> usize {
        lock(&self.inner.pending).len()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.counters.snapshot()
    }

    fn entries(&self) -> HashMap<K, CacheEntry<V>> {
        read(&self.inner.entries).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
