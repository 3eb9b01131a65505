use crate::entry::{EntryType, MemoryEntry};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Persistence port for canonical entries.
///
/// Implementations must keep `(entry_type, value)` unique and must never map
/// one alias to two entries of the same type.
#[async_trait]
pub trait MemoryRepository: Send + Sync {
    async fn find_by_value(&self, entry_type: EntryType, value: &str) -> Result<Option<MemoryEntry>>;

    async fn find_by_alias(&self, entry_type: EntryType, alias: &str) -> Result<Option<MemoryEntry>>;

    async fn count_by_type(&self, entry_type: EntryType) -> Result<u64>;

    /// Insert the entry, or record one more use of the stored entry with the
    /// same `(entry_type, value)`.
    ///
    /// On conflict the stored `usage_count` is incremented in place, never
    /// overwritten, `last_used_at` is taken from `entry` and new aliases are
    /// appended. Concurrent uses of one entry are therefore all counted.
    async fn upsert(&self, entry: &MemoryEntry) -> Result<()>;
}

/// Process-local repository. Entries live as long as the process.
#[derive(Default)]
pub struct InMemoryRepository {
    entries: RwLock<HashMap<(EntryType, String), MemoryEntry>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemoryRepository for InMemoryRepository {
    async fn find_by_value(&self, entry_type: EntryType, value: &str) -> Result<Option<MemoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.get(&(entry_type, value.to_string())).cloned())
    }

    async fn find_by_alias(&self, entry_type: EntryType, alias: &str) -> Result<Option<MemoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .find(|e| e.entry_type == entry_type && e.aliases.iter().any(|a| a == alias))
            .cloned())
    }

    async fn count_by_type(&self, entry_type: EntryType) -> Result<u64> {
        let entries = self.entries.read().await;
        Ok(entries.keys().filter(|(t, _)| *t == entry_type).count() as u64)
    }

    async fn upsert(&self, entry: &MemoryEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        let key = (entry.entry_type, entry.value.clone());
        match entries.get_mut(&key) {
            // Keep the identity and creation time of the first writer.
            Some(existing) => {
                existing.usage_count += 1;
                existing.last_used_at = entry.last_used_at;
                for alias in &entry.aliases {
                    if !existing.aliases.contains(alias) {
                        existing.aliases.push(alias.clone());
                    }
                }
            }
            None => {
                entries.insert(key, entry.clone());
            }
        }
        Ok(())
    }
}
