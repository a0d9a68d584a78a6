//! Directory view controller
//!
//! Owns the fetch lifecycle of the user listing: loading/error/success
//! transitions, a cache-by-key for the session, and last-write-wins
//! resolution when refetches overlap. Failures never propagate out of the
//! controller; they resolve into the error state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::source::DirectorySource;
use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheExt};
use crate::domain::user::{User, parse_users};

/// How long a cached listing stays adoptable by later mounts
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Cache entry for one listing key. `refetch` overwrites the entry for its
/// key on success and deletes it on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedDirectory {
    pub users: Vec<User>,
    pub fetched_at: DateTime<Utc>,
}

/// State exposed to the rendering layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorySnapshot {
    /// Last successfully validated listing; empty until first success
    pub users: Vec<User>,
    /// A fetch is in flight; `users` keeps its previous value meanwhile
    pub is_loading: bool,
    /// Message of the last failed fetch or validation, cleared on success
    pub error: Option<String>,
}

/// View controller for the user directory
#[derive(Debug)]
pub struct DirectoryController {
    source: Arc<dyn DirectorySource>,
    cache: Arc<dyn Cache>,
    cache_key: String,
    cache_ttl: Duration,
    state: RwLock<DirectorySnapshot>,
    generation: AtomicU64,
}

impl DirectoryController {
    /// Create a controller over a source, an explicit cache service, and the
    /// cache key identifying this listing (the endpoint path).
    pub fn new(
        source: Arc<dyn DirectorySource>,
        cache: Arc<dyn Cache>,
        cache_key: impl Into<String>,
    ) -> Self {
        Self {
            source,
            cache,
            cache_key: cache_key.into(),
            cache_ttl: DEFAULT_CACHE_TTL,
            state: RwLock::new(DirectorySnapshot::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Override how long successful fetches stay cached
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Current state, cloned for the rendering layer
    pub async fn snapshot(&self) -> DirectorySnapshot {
        self.state.read().await.clone()
    }

    /// First-render entry point: adopt the cached listing for this key if
    /// one exists, otherwise fetch. Stale-cache-on-mount semantics.
    pub async fn mount(&self) {
        match self.cache.get::<CachedDirectory>(&self.cache_key).await {
            Ok(Some(entry)) => {
                debug!(key = %self.cache_key, "Adopting cached listing");
                let mut state = self.state.write().await;
                *state = DirectorySnapshot {
                    users: entry.users,
                    is_loading: false,
                    error: None,
                };
            }
            Ok(None) => self.refetch().await,
            Err(e) => {
                // An unreadable cache entry is a miss, not a failure.
                warn!(key = %self.cache_key, "Cache read failed: {}", e);
                self.refetch().await;
            }
        }
    }

    /// Re-run the fetch, transitioning through the loading state.
    ///
    /// Callable any number of times. Overlapping calls do not queue; each
    /// stamps a generation, and a resolution whose generation is no longer
    /// current is discarded, so the latest-started fetch is authoritative.
    pub async fn refetch(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            state.is_loading = true;
        }

        let outcome = self.fetch_listing().await;

        let mut state = self.state.write().await;

        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer refetch started while this one was in flight; its
            // resolution owns the state now.
            debug!(key = %self.cache_key, "Discarding stale resolution");
            return;
        }

        match outcome {
            Ok(users) => {
                let entry = CachedDirectory {
                    users: users.clone(),
                    fetched_at: Utc::now(),
                };

                if let Err(e) = self.cache.set(&self.cache_key, &entry, self.cache_ttl).await {
                    warn!(key = %self.cache_key, "Cache write failed: {}", e);
                }

                *state = DirectorySnapshot {
                    users,
                    is_loading: false,
                    error: None,
                };
            }
            Err(err) => {
                debug!(key = %self.cache_key, "Listing fetch failed: {}", err);

                if let Err(e) = self.cache.delete(&self.cache_key).await {
                    warn!(key = %self.cache_key, "Cache invalidation failed: {}", e);
                }

                *state = DirectorySnapshot {
                    users: Vec::new(),
                    is_loading: false,
                    error: Some(err.message().to_string()),
                };
            }
        }
    }

    /// One fetch attempt: raw bytes, JSON parse, shape validation.
    /// A malformed body fails the whole listing, same as an upstream error.
    async fn fetch_listing(&self) -> Result<Vec<User>, DomainError> {
        let bytes = self.source.fetch_raw().await?;

        let body: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::upstream(format!("Failed to parse response: {}", e)))?;

        parse_users(body)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use bytes::Bytes;
    use tokio::sync::Notify;

    use super::*;
    use crate::domain::cache::MockCache;
    use crate::domain::directory::source::mock::MockDirectorySource;
    use crate::domain::user::fixtures;

    const KEY: &str = "/api/users";

    fn listing(users: &[User]) -> serde_json::Value {
        serde_json::to_value(users).unwrap()
    }

    fn sample_users() -> Vec<User> {
        vec![
            fixtures::user(1, "Leanne Graham", "Gwenborough", "Romaguera-Crona"),
            fixtures::user(2, "Ervin Howell", "Wisokyburgh", "Deckow-Crist"),
        ]
    }

    #[tokio::test]
    async fn test_refetch_success_populates_state() {
        let users = sample_users();
        let source = Arc::new(MockDirectorySource::new().with_body(&listing(&users)));
        let controller =
            DirectoryController::new(source, Arc::new(MockCache::new()), KEY);

        controller.refetch().await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.users, users);
        assert!(!snapshot.is_loading);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_refetch_failure_clears_data_and_sets_error() {
        let users = sample_users();
        let source = Arc::new(MockDirectorySource::new().with_body(&listing(&users)));
        let controller =
            DirectoryController::new(source.clone(), Arc::new(MockCache::new()), KEY);

        controller.refetch().await;
        assert_eq!(controller.snapshot().await.users.len(), 2);

        source.set_error("Service Unavailable");
        controller.refetch().await;

        let snapshot = controller.snapshot().await;
        assert!(snapshot.users.is_empty());
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.error.as_deref(), Some("Service Unavailable"));
    }

    #[tokio::test]
    async fn test_validation_failure_is_treated_as_fetch_failure() {
        let source = Arc::new(
            MockDirectorySource::new().with_body(&serde_json::json!([{"id": "not-a-number"}])),
        );
        let controller =
            DirectoryController::new(source, Arc::new(MockCache::new()), KEY);

        controller.refetch().await;

        let snapshot = controller.snapshot().await;
        assert!(snapshot.users.is_empty());
        assert!(snapshot.error.is_some());
    }

    #[tokio::test]
    async fn test_refetch_after_error_recovers() {
        let source = Arc::new(MockDirectorySource::new().with_error("Service Unavailable"));
        let controller =
            DirectoryController::new(source.clone(), Arc::new(MockCache::new()), KEY);

        controller.refetch().await;
        assert!(controller.snapshot().await.error.is_some());

        let users = sample_users();
        source.set_body(&listing(&users));
        controller.refetch().await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.users, users);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_refetch_is_idempotent_against_unchanged_upstream() {
        let users = sample_users();
        let source = Arc::new(MockDirectorySource::new().with_body(&listing(&users)));
        let controller =
            DirectoryController::new(source, Arc::new(MockCache::new()), KEY);

        controller.refetch().await;
        let first = controller.snapshot().await.users;

        controller.refetch().await;
        let second = controller.snapshot().await.users;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_mount_reuses_cached_listing_without_fetch() {
        let users = sample_users();
        let source = Arc::new(MockDirectorySource::new().with_body(&listing(&users)));
        let cache = Arc::new(MockCache::new());

        let first = DirectoryController::new(source.clone(), cache.clone(), KEY);
        first.mount().await;
        assert_eq!(source.fetch_count(), 1);

        // A second mount with the same key adopts the cached entry.
        let second = DirectoryController::new(source.clone(), cache, KEY);
        second.mount().await;

        assert_eq!(source.fetch_count(), 1);
        assert_eq!(second.snapshot().await.users, users);
    }

    #[tokio::test]
    async fn test_mount_adopts_preseeded_cache_entry() {
        let users = sample_users();
        let entry = CachedDirectory {
            users: users.clone(),
            fetched_at: Utc::now(),
        };
        let source = Arc::new(MockDirectorySource::new());
        let cache = Arc::new(MockCache::new().with_entry(KEY, &entry));

        let controller = DirectoryController::new(source.clone(), cache, KEY);
        controller.mount().await;

        assert_eq!(source.fetch_count(), 0);

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.users, users);
        assert!(!snapshot.is_loading);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_failed_refetch_invalidates_cache_entry() {
        let users = sample_users();
        let source = Arc::new(MockDirectorySource::new().with_body(&listing(&users)));
        let cache = Arc::new(MockCache::new());
        let controller = DirectoryController::new(source.clone(), cache.clone(), KEY);

        controller.refetch().await;
        assert!(cache.exists(KEY).await.unwrap());

        source.set_error("Service Unavailable");
        controller.refetch().await;

        assert!(!cache.exists(KEY).await.unwrap());
    }

    /// Source whose first fetch blocks until released, returning a stale
    /// listing; later fetches return the fresh listing immediately.
    #[derive(Debug)]
    struct SlowFirstSource {
        release: Notify,
        stale: Vec<u8>,
        fresh: Vec<u8>,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl DirectorySource for SlowFirstSource {
        async fn fetch_raw(&self) -> Result<Bytes, DomainError> {
            let call = self.fetches.fetch_add(1, Ordering::SeqCst);

            if call == 0 {
                self.release.notified().await;
                Ok(Bytes::from(self.stale.clone()))
            } else {
                Ok(Bytes::from(self.fresh.clone()))
            }
        }

        fn source_name(&self) -> &'static str {
            "slow-first"
        }
    }

    #[tokio::test]
    async fn test_overlapping_refetch_last_write_wins() {
        let stale = vec![fixtures::user(1, "Stale Entry", "Gwenborough", "Romaguera-Crona")];
        let fresh = sample_users();
        let source = Arc::new(SlowFirstSource {
            release: Notify::new(),
            stale: serde_json::to_vec(&stale).unwrap(),
            fresh: serde_json::to_vec(&fresh).unwrap(),
            fetches: AtomicUsize::new(0),
        });

        let controller = Arc::new(DirectoryController::new(
            source.clone(),
            Arc::new(MockCache::new()),
            KEY,
        ));

        let blocked = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.refetch().await })
        };

        // Wait for the first fetch to be in flight before racing it.
        while source.fetches.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        controller.refetch().await;
        source.release.notify_one();
        blocked.await.unwrap();

        // The later refetch is authoritative; the stale resolution is a no-op.
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.users, fresh);
        assert!(!snapshot.is_loading);
    }
}
