use bytes::Bytes;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory image store keyed by source URL.
///
/// Bounded by entry count; once full, the least recently used image is
/// evicted. Eviction only ever shows up as a miss.
pub struct ImageCache {
    store: Mutex<LruCache<String, Bytes>>,
}

impl ImageCache {
    /// Capacity used when zero is requested
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
        Some(n) => n,
        None => unreachable!(),
    };

    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look up the bytes stored for `key`, marking them as recently used
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: impl Into<String>, bytes: Bytes) {
        self.lock().put(key.into(), bytes);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    // Poisoned locks are recovered, not propagated
    fn lock(&self) -> MutexGuard<'_, LruCache<String, Bytes>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(crate::config::default_image_cache_capacity())
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
