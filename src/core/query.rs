//! Keyed query cache with retry policy.
//!
//! A single [`QueryClient`] is created at start-up and shared by every view.
//! Results are cached as JSON by [`QueryKey`], so views asking for the same
//! key share one entry. Failed fetches are retried according to
//! [`QueryOptions::retry`] before the error is stored and surfaced.
//!
//! Entries untouched for longer than [`QueryOptions::gc_time_ms`] are
//! swept whenever a new entry is inserted. Each fetch stamps its entry with
//! a generation; a fetch that was overtaken by a newer one for the same key
//! returns its result to its caller but leaves the cache alone.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Serialize, de::DeserializeOwned};

use crate::core::error::{FetchError, QueryError};
use crate::utils::time::{now_ms, sleep_ms};

// =============================================================================
// Keys and Options
// =============================================================================

/// Identifier of a cached query, e.g. `["lookup", "example.com", "A"]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Wait between a failed attempt and the next retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDelay {
    /// `min(1000 · 2^attempt, max_ms)` milliseconds.
    Exponential { max_ms: u32 },
    /// Constant delay.
    Fixed(u32),
}

impl RetryDelay {
    /// Delay after the zero-based failed `attempt`.
    pub fn delay_ms(&self, attempt: u32) -> u32 {
        match *self {
            Self::Exponential { max_ms } => {
                let delay = 1000u64 << attempt.min(32);
                delay.min(u64::from(max_ms)) as u32
            }
            Self::Fixed(ms) => ms,
        }
    }
}

/// Per-query policy. [`Default`] mirrors the usual query-library defaults;
/// the application narrows them through `AppConfig`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryOptions {
    /// Retries after the first failed attempt.
    pub retry: u32,
    pub retry_delay: RetryDelay,
    /// Refetch when the browser window regains focus.
    pub refetch_on_window_focus: bool,
    /// How long cached data counts as fresh. Zero means always stale.
    pub stale_time_ms: f64,
    /// How long an untouched entry is kept before it is swept.
    pub gc_time_ms: f64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            retry: 3,
            retry_delay: RetryDelay::Exponential { max_ms: 30_000 },
            refetch_on_window_focus: true,
            stale_time_ms: 0.0,
            gc_time_ms: 300_000.0,
        }
    }
}

impl QueryOptions {
    pub fn with_retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: RetryDelay) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn with_refetch_on_window_focus(mut self, enabled: bool) -> Self {
        self.refetch_on_window_focus = enabled;
        self
    }

    pub fn with_stale_time_ms(mut self, stale_time_ms: f64) -> Self {
        self.stale_time_ms = stale_time_ms;
        self
    }

    pub fn with_gc_time_ms(mut self, gc_time_ms: f64) -> Self {
        self.gc_time_ms = gc_time_ms;
        self
    }
}

// =============================================================================
// Cache Entries
// =============================================================================

/// Snapshot of a cache entry, independent of the data type.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    pub has_data: bool,
    pub error: Option<QueryError>,
    /// Failed attempts during the most recent fetch.
    pub failure_count: u32,
    pub updated_at: f64,
    pub invalidated: bool,
}

#[derive(Debug)]
struct CacheEntry {
    data: Option<serde_json::Value>,
    error: Option<QueryError>,
    failure_count: u32,
    updated_at: f64,
    invalidated: bool,
    options: QueryOptions,
    /// Last time the entry was created, fetched or read.
    touched_at: f64,
    /// Bumped by every fetch; only the latest fetch may write.
    generation: u64,
}

impl CacheEntry {
    fn new(options: QueryOptions, now: f64) -> Self {
        Self {
            data: None,
            error: None,
            failure_count: 0,
            updated_at: 0.0,
            invalidated: false,
            options,
            touched_at: now,
            generation: 0,
        }
    }

    fn is_expired(&self, now: f64) -> bool {
        now - self.touched_at > self.options.gc_time_ms
    }

    fn is_fresh(&self, now: f64) -> bool {
        self.data.is_some() && !self.invalidated && now - self.updated_at < self.options.stale_time_ms
    }
}

// =============================================================================
// Client
// =============================================================================

/// Shared query cache. Cloning yields another handle to the same cache.
#[derive(Clone)]
pub struct QueryClient {
    defaults: QueryOptions,
    cache: Arc<Mutex<HashMap<QueryKey, CacheEntry>>>,
}

impl QueryClient {
    pub fn new(defaults: QueryOptions) -> Self {
        Self {
            defaults,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Policy applied when a query does not override it.
    pub fn default_options(&self) -> QueryOptions {
        self.defaults
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, CacheEntry>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Entry for `key`, creating it after sweeping expired entries.
    fn entry_for<'a>(
        entries: &'a mut HashMap<QueryKey, CacheEntry>,
        key: &QueryKey,
        options: QueryOptions,
        now: f64,
    ) -> &'a mut CacheEntry {
        if !entries.contains_key(key) {
            sweep(entries, now);
        }
        let entry = entries
            .entry(key.clone())
            .or_insert_with(|| CacheEntry::new(options, now));
        entry.touched_at = now;
        entry
    }

    /// Drop every entry untouched for longer than its `gc_time_ms`.
    /// Returns how many were removed.
    pub fn collect_garbage(&self) -> usize {
        sweep(&mut self.entries(), now_ms())
    }

    /// Number of live cache entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Fetch with the client's default options.
    pub async fn fetch_query<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<T, QueryError>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        self.fetch_query_with(key, self.defaults, fetcher).await
    }

    /// Return fresh cached data or run `fetcher`, retrying per `options`.
    ///
    /// At most `options.retry + 1` attempts are made. The lock is never held
    /// across an await point.
    pub async fn fetch_query_with<T, F, Fut>(
        &self,
        key: &QueryKey,
        options: QueryOptions,
        fetcher: F,
    ) -> Result<T, QueryError>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let (cached, generation) = {
            let mut entries = self.entries();
            let now = now_ms();
            let entry = Self::entry_for(&mut entries, key, options, now);
            entry.options = options;
            if entry.is_fresh(now) {
                (entry.data.clone(), entry.generation)
            } else {
                entry.generation += 1;
                (None, entry.generation)
            }
        };

        if let Some(value) = cached {
            tracing::debug!(%key, "query cache hit");
            return decode(key, value);
        }

        let mut attempt = 0;
        loop {
            match fetcher().await {
                Ok(data) => {
                    let value = match serde_json::to_value(&data) {
                        Ok(value) => Some(value),
                        Err(e) => {
                            tracing::warn!(%key, error = %e, "query result not cacheable");
                            None
                        }
                    };
                    let mut entries = self.entries();
                    let Some(entry) = current(&mut entries, key, generation) else {
                        tracing::debug!(%key, generation, "superseded fetch, cache untouched");
                        return Ok(data);
                    };
                    let now = now_ms();
                    entry.data = value;
                    entry.error = None;
                    entry.failure_count = attempt;
                    entry.updated_at = now;
                    entry.touched_at = now;
                    entry.invalidated = false;
                    return Ok(data);
                }
                Err(source) if attempt < options.retry => {
                    let delay = options.retry_delay.delay_ms(attempt);
                    tracing::debug!(%key, attempt, delay, error = %source, "query failed, retrying");
                    attempt += 1;
                    self.record_failure(key, generation, attempt, None);
                    sleep_ms(delay).await;
                }
                Err(source) => {
                    let attempts = attempt + 1;
                    let error = QueryError::Failed {
                        key: key.to_string(),
                        attempts,
                        source,
                    };
                    tracing::warn!(%key, attempts, %error, "query failed");
                    self.record_failure(key, generation, attempts, Some(error.clone()));
                    return Err(error);
                }
            }
        }
    }

    fn record_failure(
        &self,
        key: &QueryKey,
        generation: u64,
        failure_count: u32,
        error: Option<QueryError>,
    ) {
        let mut entries = self.entries();
        let Some(entry) = current(&mut entries, key, generation) else {
            return;
        };
        entry.touched_at = now_ms();
        entry.failure_count = failure_count;
        if error.is_some() {
            entry.error = error;
        }
    }

    /// Cached data for `key`, fresh or stale.
    pub fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = {
            let mut entries = self.entries();
            let entry = entries.get_mut(key)?;
            entry.touched_at = now_ms();
            entry.data.clone()?
        };
        decode(key, value).ok()
    }

    /// Seed or replace cached data, e.g. after a mutation.
    pub fn set_query_data<T: Serialize>(&self, key: &QueryKey, data: &T) {
        let Ok(value) = serde_json::to_value(data) else {
            return;
        };
        let mut entries = self.entries();
        let now = now_ms();
        let entry = Self::entry_for(&mut entries, key, self.defaults, now);
        entry.generation += 1;
        entry.data = Some(value);
        entry.error = None;
        entry.updated_at = now;
        entry.invalidated = false;
    }

    /// Status of a cache entry, if one exists.
    pub fn query_state(&self, key: &QueryKey) -> Option<QueryState> {
        self.entries().get(key).map(|entry| QueryState {
            has_data: entry.data.is_some(),
            error: entry.error.clone(),
            failure_count: entry.failure_count,
            updated_at: entry.updated_at,
            invalidated: entry.invalidated,
        })
    }

    /// Mark cached data stale so the next fetch goes to the network.
    /// Returns `false` when the key is unknown.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        match self.entries().get_mut(key) {
            Some(entry) => {
                entry.invalidated = true;
                true
            }
            None => false,
        }
    }

    /// Drop a cache entry entirely.
    pub fn remove(&self, key: &QueryKey) -> bool {
        self.entries().remove(key).is_some()
    }

    /// Handle the window regaining focus.
    ///
    /// Invalidates and returns the keys whose options opt into focus
    /// refetching. Under the application defaults this is empty.
    pub fn on_window_focus(&self) -> Vec<QueryKey> {
        let now = now_ms();
        let mut keys: Vec<QueryKey> = self
            .entries()
            .iter_mut()
            .filter(|(_, entry)| entry.options.refetch_on_window_focus && !entry.is_fresh(now))
            .map(|(key, entry)| {
                entry.invalidated = true;
                key.clone()
            })
            .collect();
        keys.sort_by_key(|k| k.to_string());
        keys
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(QueryOptions::default())
    }
}

fn sweep(entries: &mut HashMap<QueryKey, CacheEntry>, now: f64) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_expired(now));
    let removed = before - entries.len();
    if removed > 0 {
        tracing::debug!(removed, "swept expired queries");
    }
    removed
}

/// The entry for `key` if `generation` is still its latest fetch.
fn current<'a>(
    entries: &'a mut HashMap<QueryKey, CacheEntry>,
    key: &QueryKey,
    generation: u64,
) -> Option<&'a mut CacheEntry> {
    entries
        .get_mut(key)
        .filter(|entry| entry.generation == generation)
}

fn decode<T: DeserializeOwned>(key: &QueryKey, value: serde_json::Value) -> Result<T, QueryError> {
    serde_json::from_value(value).map_err(|e| QueryError::Decode {
        key: key.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn app_defaults() -> QueryOptions {
        QueryOptions::default()
            .with_retry(1)
            .with_refetch_on_window_focus(false)
            .with_retry_delay(RetryDelay::Fixed(0))
    }

    #[test]
    fn test_exponential_delay() {
        let delay = RetryDelay::Exponential { max_ms: 30_000 };
        assert_eq!(delay.delay_ms(0), 1000);
        assert_eq!(delay.delay_ms(1), 2000);
        assert_eq!(delay.delay_ms(4), 16_000);
        assert_eq!(delay.delay_ms(5), 30_000);
        assert_eq!(delay.delay_ms(40), 30_000);
    }

    #[test]
    fn test_key_display() {
        let key = QueryKey::new(["lookup", "example.com", "A"]);
        assert_eq!(key.to_string(), "lookup/example.com/A");
        assert_eq!(key.segments().len(), 3);
    }

    #[tokio::test]
    async fn test_success_is_cached() {
        let client = QueryClient::new(app_defaults());
        let key = QueryKey::new(["stats"]);

        let value: u32 = client.fetch_query(&key, || async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
        assert_eq!(client.get_query_data::<u32>(&key), Some(7));

        let state = client.query_state(&key).unwrap();
        assert!(state.has_data);
        assert_eq!(state.error, None);
        assert_eq!(state.failure_count, 0);
    }

    #[tokio::test]
    async fn test_default_policy_retries_once_then_errors() {
        let client = QueryClient::new(app_defaults());
        let key = QueryKey::new(["stats"]);
        let calls = Cell::new(0u32);

        let result: Result<u32, _> = client
            .fetch_query(&key, || {
                calls.set(calls.get() + 1);
                async { Err(FetchError::HttpError(500)) }
            })
            .await;

        assert_eq!(calls.get(), 2);
        assert_eq!(
            result,
            Err(QueryError::Failed {
                key: "stats".to_string(),
                attempts: 2,
                source: FetchError::HttpError(500),
            })
        );
        let state = client.query_state(&key).unwrap();
        assert!(state.error.is_some());
        assert_eq!(state.failure_count, 2);
    }

    #[tokio::test]
    async fn test_retry_recovers() {
        let client = QueryClient::new(app_defaults());
        let key = QueryKey::new(["flaky"]);
        let calls = Cell::new(0u32);

        let result: Result<String, _> = client
            .fetch_query(&key, || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move {
                    if n == 1 {
                        Err(FetchError::Timeout)
                    } else {
                        Ok("ok".to_string())
                    }
                }
            })
            .await;

        assert_eq!(result, Ok("ok".to_string()));
        assert_eq!(calls.get(), 2);
        assert_eq!(client.query_state(&key).unwrap().error, None);
    }

    #[tokio::test]
    async fn test_per_query_override() {
        let client = QueryClient::new(app_defaults());
        let key = QueryKey::new(["lookup"]);
        let calls = Cell::new(0u32);

        let options = client.default_options().with_retry(3);
        let _: Result<u8, _> = client
            .fetch_query_with(&key, options, || {
                calls.set(calls.get() + 1);
                async { Err(FetchError::NoWindow) }
            })
            .await;
        assert_eq!(calls.get(), 4);

        calls.set(0);
        let _: Result<u8, _> = client
            .fetch_query_with(&key, options.with_retry(0), || {
                calls.set(calls.get() + 1);
                async { Err(FetchError::NoWindow) }
            })
            .await;
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_fresh_data_skips_fetcher() {
        let client = QueryClient::new(app_defaults().with_stale_time_ms(60_000.0));
        let key = QueryKey::new(["trends"]);
        let calls = Cell::new(0u32);
        let fetch = || {
            calls.set(calls.get() + 1);
            async { Ok(vec![1u32, 2, 3]) }
        };

        let first: Vec<u32> = client.fetch_query(&key, fetch).await.unwrap();
        let second: Vec<u32> = client.fetch_query(&key, fetch).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);

        assert!(client.invalidate(&key));
        let _: Vec<u32> = client.fetch_query(&key, fetch).await.unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_zero_stale_time_always_refetches() {
        let client = QueryClient::new(app_defaults());
        let key = QueryKey::new(["stats"]);
        let calls = Cell::new(0u32);
        let fetch = || {
            calls.set(calls.get() + 1);
            async { Ok(1u8) }
        };

        let _: u8 = client.fetch_query(&key, fetch).await.unwrap();
        let _: u8 = client.fetch_query(&key, fetch).await.unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_window_focus_respects_policy() {
        let client = QueryClient::new(app_defaults());
        let quiet = QueryKey::new(["quiet"]);
        let eager = QueryKey::new(["eager"]);

        let _: u8 = client.fetch_query(&quiet, || async { Ok(1) }).await.unwrap();
        assert!(client.on_window_focus().is_empty());

        let eager_options = client.default_options().with_refetch_on_window_focus(true);
        let _: u8 = client
            .fetch_query_with(&eager, eager_options, || async { Ok(2) })
            .await
            .unwrap();

        assert_eq!(client.on_window_focus(), vec![eager.clone()]);
        assert!(client.query_state(&eager).unwrap().invalidated);
        assert!(!client.query_state(&quiet).unwrap().invalidated);
    }

    #[tokio::test]
    async fn test_decode_mismatch_reports_error() {
        let client = QueryClient::new(app_defaults().with_stale_time_ms(60_000.0));
        let key = QueryKey::new(["shape"]);
        let _: String = client
            .fetch_query(&key, || async { Ok("text".to_string()) })
            .await
            .unwrap();

        let result: Result<u32, _> = client.fetch_query(&key, || async { Ok(5) }).await;
        assert!(matches!(result, Err(QueryError::Decode { .. })));
        assert_eq!(client.get_query_data::<u32>(&key), None);
    }

    #[test]
    fn test_set_and_remove() {
        let client = QueryClient::default();
        let key = QueryKey::new(["seed"]);
        assert!(!client.invalidate(&key));

        client.set_query_data(&key, &"hello");
        assert_eq!(client.get_query_data::<String>(&key).as_deref(), Some("hello"));
        assert!(client.remove(&key));
        assert!(client.query_state(&key).is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_swept_on_next_insert() {
        let client = QueryClient::new(app_defaults().with_gc_time_ms(1_000.0));
        let old = QueryKey::new(["lookup", "old.example", "A"]);
        let _: u8 = client.fetch_query(&old, || async { Ok(1) }).await.unwrap();

        client.entries().get_mut(&old).unwrap().touched_at -= 5_000.0;

        let fresh = QueryKey::new(["lookup", "new.example", "A"]);
        let _: u8 = client.fetch_query(&fresh, || async { Ok(2) }).await.unwrap();

        assert!(client.query_state(&old).is_none());
        assert!(client.query_state(&fresh).is_some());
    }

    #[tokio::test]
    async fn test_distinct_lookups_do_not_accumulate() {
        let client = QueryClient::new(app_defaults());
        for i in 0..500 {
            let key = QueryKey::new(["lookup".to_string(), format!("host{i}.example"), "A".to_string()]);
            let _: u32 = client.fetch_query(&key, || async { Ok(i) }).await.unwrap();
        }
        let failing = QueryKey::new(["lookup", "broken.example", "A"]);
        let _: Result<u32, _> = client
            .fetch_query(&failing, || async { Err(FetchError::HttpError(502)) })
            .await;
        assert_eq!(client.len(), 501);

        for entry in client.entries().values_mut() {
            entry.touched_at -= 300_001.0;
        }
        assert_eq!(client.collect_garbage(), 501);
        assert!(client.is_empty());
    }

    #[test]
    fn test_recently_read_entry_survives_sweep() {
        let client = QueryClient::new(app_defaults().with_gc_time_ms(1_000.0));
        let key = QueryKey::new(["stats"]);
        client.set_query_data(&key, &3u8);
        client.entries().get_mut(&key).unwrap().touched_at -= 5_000.0;

        assert_eq!(client.get_query_data::<u8>(&key), Some(3));
        assert_eq!(client.collect_garbage(), 0);
        assert!(client.query_state(&key).is_some());
    }

    #[tokio::test]
    async fn test_superseded_fetch_does_not_overwrite_newer_result() {
        let client = QueryClient::new(app_defaults());
        let key = QueryKey::new(["lookup", "example.com", "A"]);

        let slow = client.fetch_query(&key, || async {
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
            Ok("old".to_string())
        });
        let fast = client.fetch_query(&key, || async { Ok("new".to_string()) });

        let (old, new) = tokio::join!(slow, fast);
        assert_eq!(old.as_deref(), Ok("old"));
        assert_eq!(new.as_deref(), Ok("new"));
        assert_eq!(client.get_query_data::<String>(&key).as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_uncacheable_result_is_returned_but_not_stored() {
        let client = QueryClient::new(app_defaults());
        let key = QueryKey::new(["odd"]);

        let data: HashMap<(u8, u8), u8> = client
            .fetch_query(&key, || async { Ok(HashMap::from([((1, 2), 3)])) })
            .await
            .unwrap();
        assert_eq!(data.get(&(1, 2)), Some(&3));

        let state = client.query_state(&key).unwrap();
        assert!(!state.has_data);
        assert_eq!(state.error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exponential_backoff_does_not_block_runtime() {
        let client = QueryClient::new(
            QueryOptions::default()
                .with_retry(1)
                .with_retry_delay(RetryDelay::Exponential { max_ms: 30_000 }),
        );
        let key = QueryKey::new(["stats"]);
        let calls = Cell::new(0u32);
        let started = tokio::time::Instant::now();

        let result: Result<u8, _> = client
            .fetch_query(&key, || {
                calls.set(calls.get() + 1);
                async { Err(FetchError::Timeout) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 2);
        assert!(started.elapsed() >= std::time::Duration::from_millis(1000));
    }

    #[test]
    fn test_clones_share_cache() {
        let client = QueryClient::default();
        let other = client.clone();
        let key = QueryKey::new(["shared"]);
        client.set_query_data(&key, &42u32);
        assert_eq!(other.get_query_data::<u32>(&key), Some(42));
    }
}
