//! Search coordination
//!
//! `SearchCoordinator` owns the current result set. A search replaces it
//! wholesale on success, bumps the change notification, and fans out one
//! independent download-and-cache task per result. Failures are logged and
//! leave the previous results in place.
//!
//! Concurrent searches are not serialized: whichever succeeds last wins.
//! Thumbnail downloads are neither capped nor deduplicated.

use crate::cache::ImageCache;
use crate::error::{SnapError, SnapResult};
use crate::search::{ImageRecord, SearchClient, Transport};
use futures_util::future::join_all;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

/// Observable coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No search has succeeded yet
    Idle,
    /// At least one search is in flight
    Searching,
    /// Results are present (thumbnail caching may still be running)
    Loaded,
}

#[derive(Debug, Default)]
struct ResultSet {
    records: Vec<ImageRecord>,
    loaded: bool,
}

struct Inner {
    client: SearchClient,
    cache: Arc<ImageCache>,
    caching: AtomicBool,
    results: RwLock<ResultSet>,
    in_flight: AtomicUsize,
    changes: watch::Sender<u64>,
    downloads: Mutex<Vec<JoinHandle<()>>>,
}

/// Runs searches and holds the latest results for a presentation layer.
///
/// Clones share state.
#[derive(Clone)]
pub struct SearchCoordinator {
    inner: Arc<Inner>,
}

/// Keeps the in-flight count raised for the lifetime of one fetch
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl SearchCoordinator {
    pub fn new(client: SearchClient, cache: Arc<ImageCache>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                client,
                cache,
                caching: AtomicBool::new(true),
                results: RwLock::new(ResultSet::default()),
                in_flight: AtomicUsize::new(0),
                changes,
                downloads: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Enable or disable the thumbnail fan-out after each search
    pub fn with_caching(self, enabled: bool) -> Self {
        self.set_caching(enabled);
        self
    }

    /// Toggle the thumbnail fan-out for this coordinator and all its clones.
    ///
    /// Takes effect from the next successful search.
    pub fn set_caching(&self, enabled: bool) {
        self.inner.caching.store(enabled, Ordering::SeqCst);
    }

    /// Start a search and return immediately.
    ///
    /// Blank queries are ignored. Completion is observed through
    /// [`subscribe`](Self::subscribe). Must be called within a tokio runtime.
    pub fn search(&self, query: &str) {
        if query.trim().is_empty() {
            debug!("Ignoring blank search query");
            return;
        }

        let this = self.clone();
        let query = query.to_string();
        tokio::spawn(async move {
            let _ = this.search_now(&query).await;
        });
    }

    /// Run a search to completion and return the number of results.
    ///
    /// Same effects as [`search`](Self::search); the outcome is handed back
    /// as well so the caller may choose to surface failures.
    pub async fn search_now(&self, query: &str) -> SnapResult<usize> {
        if query.trim().is_empty() {
            return Err(SnapError::EmptyQuery);
        }

        let in_flight = InFlight::enter(&self.inner.in_flight);
        debug!("Searching for '{}'", query);

        let records = match self.inner.client.fetch(query).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Search for '{}' failed: {}", query, e);
                return Err(e);
            }
        };

        let count = records.len();
        {
            let mut results = self.write_results();
            results.records = records.clone();
            results.loaded = true;
        }
        drop(in_flight);

        self.inner.changes.send_modify(|generation| *generation += 1);
        info!("Search for '{}' loaded {} result(s)", query, count);

        if self.inner.caching.load(Ordering::SeqCst) {
            self.spawn_downloads(records);
        }

        Ok(count)
    }

    /// Receive a notification after every successful search.
    ///
    /// The value is a generation counter. It changes only once the new
    /// result set is fully visible through this coordinator.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.changes.subscribe()
    }

    pub fn state(&self) -> SearchState {
        if self.inner.in_flight.load(Ordering::SeqCst) > 0 {
            SearchState::Searching
        } else if self.read_results().loaded {
            SearchState::Loaded
        } else {
            SearchState::Idle
        }
    }

    /// Number of records in the current result set
    pub fn number_of_results(&self) -> usize {
        self.read_results().records.len()
    }

    /// Record at `row` in the current result set.
    ///
    /// # Panics
    ///
    /// If `row >= self.number_of_results()`.
    pub fn describe(&self, row: usize) -> ImageRecord {
        self.read_results().records[row].clone()
    }

    /// Snapshot of the current result set
    pub fn records(&self) -> Vec<ImageRecord> {
        self.read_results().records.clone()
    }

    /// The cache thumbnails are stored in
    pub fn cache(&self) -> &ImageCache {
        &self.inner.cache
    }

    /// Wait for every thumbnail task started so far
    pub async fn wait_for_downloads(&self) {
        loop {
            let handles = std::mem::take(&mut *self.lock_downloads());
            if handles.is_empty() {
                return;
            }

            for result in join_all(handles).await {
                if let Err(e) = result {
                    warn!("Thumbnail task failed: {}", e);
                }
            }
        }
    }

    fn spawn_downloads(&self, records: Vec<ImageRecord>) {
        let transport = self.inner.client.transport();
        let mut downloads = self.lock_downloads();
        downloads.retain(|handle| !handle.is_finished());

        for record in records {
            let transport = Arc::clone(&transport);
            let cache = Arc::clone(&self.inner.cache);
            downloads.push(tokio::spawn(async move {
                cache_thumbnail(transport.as_ref(), &cache, &record).await;
            }));
        }
    }

    fn read_results(&self) -> std::sync::RwLockReadGuard<'_, ResultSet> {
        self.inner
            .results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_results(&self) -> std::sync::RwLockWriteGuard<'_, ResultSet> {
        self.inner
            .results
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_downloads(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.inner
            .downloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Download one thumbnail and store it. Failures stay local to this record.
async fn cache_thumbnail(transport: &dyn Transport, cache: &ImageCache, record: &ImageRecord) {
    let url = match Url::parse(&record.thumbnail_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("Skipping thumbnail for {}: bad URL: {}", record.id, e);
            return;
        }
    };

    match transport.get(&url).await {
        Ok(bytes) if bytes.is_empty() => {
            warn!("Thumbnail for {} came back empty", record.id);
        }
        Ok(bytes) => cache.save(&bytes, &record.id).await,
        Err(e) => warn!("Failed to download thumbnail for {}: {}", record.id, e),
    }
}
