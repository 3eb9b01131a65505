use crate::entry::{EntryType, MemoryEntry};
use crate::repository::MemoryRepository;
use anyhow::Result;
use chrono::Utc;
use lynk_core::normalize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex as SyncMutex, MutexGuard};
use tokio::sync::Mutex;

type Key = (EntryType, String);
type KeyLocks = SyncMutex<HashMap<Key, Arc<Mutex<()>>>>;

/// Resolves raw tags and categories to canonical values, minting a new
/// entry only for values never seen before.
///
/// Resolution of one `(type, normalized value)` pair is serialized, so two
/// concurrent first sightings of the same value still produce one entry.
/// Usage counts are incremented by the repository itself, so reuses that
/// reach one entry through different keys are all counted.
pub struct MemoryService {
    repo: Arc<dyn MemoryRepository>,
    locks: KeyLocks,
}

impl MemoryService {
    pub fn new(repo: Arc<dyn MemoryRepository>) -> Self {
        Self {
            repo,
            locks: SyncMutex::new(HashMap::new()),
        }
    }

    pub async fn reuse_or_create(&self, raw_tag: &str) -> Result<String> {
        self.resolve(EntryType::Tag, raw_tag).await
    }

    pub async fn reuse_or_create_category(&self, raw_category: &str) -> Result<String> {
        self.resolve(EntryType::Category, raw_category).await
    }

    /// Number of distinct canonical entries of `entry_type`.
    pub async fn count(&self, entry_type: EntryType) -> Result<u64> {
        self.repo.count_by_type(entry_type).await
    }

    pub async fn get(&self, entry_type: EntryType, value: &str) -> Result<Option<MemoryEntry>> {
        self.repo.find_by_value(entry_type, value).await
    }

    /// Returns an empty string, without touching storage, when `raw`
    /// normalizes to nothing.
    async fn resolve(&self, entry_type: EntryType, raw: &str) -> Result<String> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            tracing::debug!("MemoryService: {:?} has no canonical form, skipping", raw);
            return Ok(String::new());
        }

        // Dropped on completion and on cancellation alike.
        let key_lock = KeyLock::acquire(&self.locks, (entry_type, normalized.clone()));
        let _guard = key_lock.lock.lock().await;
        self.resolve_locked(entry_type, raw, normalized).await
    }

    async fn resolve_locked(&self, entry_type: EntryType, raw: &str, normalized: String) -> Result<String> {
        let existing = match self.repo.find_by_value(entry_type, &normalized).await? {
            Some(entry) => Some(entry),
            None => self.repo.find_by_alias(entry_type, raw).await?,
        };

        let now = Utc::now();
        match existing {
            Some(mut entry) => {
                entry.touch(raw, now);
                self.repo.upsert(&entry).await?;
                tracing::debug!(
                    "MemoryService: reused {} '{}' for {:?}",
                    entry_type,
                    entry.value,
                    raw
                );
                Ok(entry.value)
            }
            None => {
                let entry = MemoryEntry::new(entry_type, normalized, raw, now);
                self.repo.upsert(&entry).await?;
                tracing::info!("MemoryService: created {} '{}' from {:?}", entry_type, entry.value, raw);
                Ok(entry.value)
            }
        }
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        lock_map(&self.locks).len()
    }
}

fn lock_map(locks: &KeyLocks) -> MutexGuard<'_, HashMap<Key, Arc<Mutex<()>>>> {
    // The map is only touched in short synchronous sections; a poisoned
    // guard still holds a consistent map.
    locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Handle on one key's lock. Removes the key from the map on drop once no
/// other task holds or waits on it.
struct KeyLock<'a> {
    locks: &'a KeyLocks,
    key: Key,
    lock: Arc<Mutex<()>>,
}

impl<'a> KeyLock<'a> {
    fn acquire(locks: &'a KeyLocks, key: Key) -> Self {
        let lock = lock_map(locks).entry(key.clone()).or_default().clone();
        Self { locks, key, lock }
    }
}

impl Drop for KeyLock<'_> {
    fn drop(&mut self) {
        let mut locks = lock_map(self.locks);
        // One reference in the map, one here.
        if locks.get(&self.key).is_some_and(|l| Arc::strong_count(l) <= 2) {
            locks.remove(&self.key);
        }
    }
}
