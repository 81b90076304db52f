use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use bevel_theme::config::DEFAULT_BUMP_CACHE_CAPACITY;
use lru::LruCache;

use crate::bumps::{BumpBuffer, BumpKey};
use crate::device::DeviceConfig;
use crate::Color;

/// Counters describing how a [BumpCache] has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Tiles built because no cached one matched.
    pub built: u64,
    /// Requests served from the cache.
    pub hits: u64,
}

struct CacheState {
    entries: LruCache<BumpKey, Arc<BumpBuffer>>,
    last: Option<Arc<BumpBuffer>>,
    stats: CacheStats,
}

/// A bounded, shared cache of bump tiles keyed by device and colors.
///
/// The most recently returned tile is checked first, since consecutive requests
/// almost always come from the same painter. Past that, tiles live in an LRU map
/// whose capacity bounds memory no matter how many themes are cycled through.
pub struct BumpCache {
    state: Mutex<CacheState>,
}

impl BumpCache {
    /// A cache holding at most `capacity` tiles; zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::new(capacity),
                last: None,
                stats: CacheStats::default(),
            }),
        }
    }

    /// The tile for a color triple on a device, built on first request.
    ///
    /// Equal keys always yield the same shared tile while it stays cached.
    pub fn buffer(
        &self,
        device: Option<&DeviceConfig>,
        top: Color,
        shadow: Color,
        back: Color,
    ) -> Arc<BumpBuffer> {
        let key = BumpKey::new(device, top, shadow, back);
        let mut state = self.lock();

        if let Some(last) = state.last.as_ref().filter(|last| last.key() == key) {
            let last = Arc::clone(last);
            state.stats.hits += 1;
            return last;
        }

        if let Some(found) = state.entries.get(&key).cloned() {
            state.stats.hits += 1;
            state.last = Some(Arc::clone(&found));
            return found;
        }

        let buffer = Arc::new(BumpBuffer::new(device, top, shadow, back));
        state.stats.built += 1;
        log::trace!("Built bump tile {:?}", key);
        if let Some((evicted, _)) = state.entries.push(key, Arc::clone(&buffer)) {
            log::trace!("Evicted bump tile {:?}", evicted);
        }
        state.last = Some(Arc::clone(&buffer));
        buffer
    }

    /// Number of tiles in the LRU map.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether no tile is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of tiles kept.
    pub fn capacity(&self) -> usize {
        self.lock().entries.cap().get()
    }

    /// Usage counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    /// Drop every cached tile. Tiles still held by callers stay valid.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.last = None;
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for BumpCache {
    fn default() -> Self {
        Self::new(DEFAULT_BUMP_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(level: u8) -> Color {
        Color::from_rgb8(level, level, level)
    }

    #[test]
    fn most_recent_tile_is_reused() {
        let cache = BumpCache::new(4);
        let a = cache.buffer(None, gray(255), gray(0), gray(200));
        let b = cache.buffer(None, gray(255), gray(0), gray(200));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.stats(), CacheStats { built: 1, hits: 1 });
    }

    #[test]
    fn clear_forgets_tiles() {
        let cache = BumpCache::new(4);
        let a = cache.buffer(None, gray(255), gray(0), gray(200));
        cache.clear();
        assert!(cache.is_empty());
        let b = cache.buffer(None, gray(255), gray(0), gray(200));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.stats().built, 2);
    }

    #[test]
    fn zero_capacity_keeps_one() {
        assert_eq!(BumpCache::new(0).capacity(), 1);
    }
}
