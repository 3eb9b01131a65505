use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Tag,
    Category,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Tag => "TAG",
            EntryType::Category => "CATEGORY",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "TAG" => Ok(EntryType::Tag),
            "CATEGORY" => Ok(EntryType::Category),
            other => anyhow::bail!("unknown memory entry type: {}", other),
        }
    }
}

/// Canonical tag or category.
///
/// `value` is unique per `entry_type`; `aliases` holds every raw string that
/// has resolved to it, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub id: Uuid,
    pub entry_type: EntryType,
    pub value: String,
    pub aliases: Vec<String>,
    pub usage_count: u64,
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
}

impl MemoryEntry {
    pub fn new(entry_type: EntryType, value: String, raw: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry_type,
            value,
            aliases: vec![raw.to_string()],
            usage_count: 1,
            created_at: now,
            last_used_at: now,
        }
    }

    /// Record one more use through `raw`.
    pub fn touch(&mut self, raw: &str, now: DateTime<Utc>) {
        self.usage_count += 1;
        self.last_used_at = now;
        if !self.aliases.iter().any(|a| a == raw) {
            self.aliases.push(raw.to_string());
        }
    }
}
