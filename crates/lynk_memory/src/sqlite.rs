use crate::entry::{EntryType, MemoryEntry};
use crate::repository::MemoryRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;
use uuid::Uuid;

/// SQLite-backed canonical entry store.
///
/// `UNIQUE(entry_type, value)` and the `(entry_type, alias)` primary key hold
/// the uniqueness invariants even across processes sharing one file.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref().display().to_string();
        let options = if path == ":memory:" {
            // Every pooled connection to `:memory:` opens its own database, and
            // the database dies with its connection: keep exactly one, forever.
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let db_url = format!("sqlite://{}?mode=rwc", path);
        let pool = options
            .connect(&db_url)
            .await
            .context("Failed to connect to SQLite database")?;

        let repo = Self { pool };
        repo.migrate().await?;
        Ok(repo)
    }

    #[cfg(test)]
    pub(crate) fn pool_options(&self) -> &sqlx::pool::PoolOptions<Sqlite> {
        self.pool.options()
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS memory_entries (
                id TEXT PRIMARY KEY,
                entry_type TEXT NOT NULL,
                value TEXT NOT NULL,
                usage_count INTEGER NOT NULL DEFAULT 1,
                created_at INTEGER NOT NULL,
                last_used_at INTEGER NOT NULL,
                UNIQUE(entry_type, value)
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create memory_entries table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS memory_aliases (
                entry_type TEXT NOT NULL,
                alias TEXT NOT NULL,
                value TEXT NOT NULL,
                PRIMARY KEY (entry_type, alias)
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create memory_aliases table")?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_memory_aliases_value ON memory_aliases(entry_type, value)",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create memory_aliases value index")?;

        Ok(())
    }

    async fn load_aliases(&self, entry_type: EntryType, value: &str) -> Result<Vec<String>> {
        let rows = sqlx::query(
            "SELECT alias FROM memory_aliases WHERE entry_type = ? AND value = ? ORDER BY rowid",
        )
        .bind(entry_type.as_str())
        .bind(value)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load aliases")?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("alias").map_err(Into::into))
            .collect()
    }

    async fn entry_from_row(&self, row: &SqliteRow) -> Result<MemoryEntry> {
        let id: String = row.try_get("id")?;
        let entry_type: String = row.try_get("entry_type")?;
        let entry_type: EntryType = entry_type.parse()?;
        let value: String = row.try_get("value")?;
        let usage_count: i64 = row.try_get("usage_count")?;
        let created_at: i64 = row.try_get("created_at")?;
        let last_used_at: i64 = row.try_get("last_used_at")?;

        let aliases = self.load_aliases(entry_type, &value).await?;

        Ok(MemoryEntry {
            id: Uuid::parse_str(&id).context("Invalid entry id")?,
            entry_type,
            value,
            aliases,
            usage_count: usage_count.max(0) as u64,
            created_at: from_millis(created_at),
            last_used_at: from_millis(last_used_at),
        })
    }
}

fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_default()
}

#[async_trait]
impl MemoryRepository for SqliteRepository {
    async fn find_by_value(&self, entry_type: EntryType, value: &str) -> Result<Option<MemoryEntry>> {
        let row = sqlx::query(
            "SELECT id, entry_type, value, usage_count, created_at, last_used_at \
             FROM memory_entries WHERE entry_type = ? AND value = ?",
        )
        .bind(entry_type.as_str())
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up entry by value")?;

        match row {
            Some(row) => Ok(Some(self.entry_from_row(&row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_alias(&self, entry_type: EntryType, alias: &str) -> Result<Option<MemoryEntry>> {
        let row = sqlx::query("SELECT value FROM memory_aliases WHERE entry_type = ? AND alias = ?")
            .bind(entry_type.as_str())
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to look up entry by alias")?;

        match row {
            Some(row) => {
                let value: String = row.try_get("value")?;
                self.find_by_value(entry_type, &value).await
            }
            None => Ok(None),
        }
    }

    async fn count_by_type(&self, entry_type: EntryType) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM memory_entries WHERE entry_type = ?")
            .bind(entry_type.as_str())
            .fetch_one(&self.pool)
            .await
            .context("Failed to count entries")?;
        let n: i64 = row.try_get("n")?;
        Ok(n.max(0) as u64)
    }

    async fn upsert(&self, entry: &MemoryEntry) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO memory_entries (id, entry_type, value, usage_count, created_at, last_used_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT(entry_type, value) DO UPDATE SET \
                usage_count = memory_entries.usage_count + 1, \
                last_used_at = excluded.last_used_at",
        )
        .bind(entry.id.to_string())
        .bind(entry.entry_type.as_str())
        .bind(&entry.value)
        .bind(entry.usage_count as i64)
        .bind(entry.created_at.timestamp_millis())
        .bind(entry.last_used_at.timestamp_millis())
        .execute(&mut *tx)
        .await
        .context("Failed to upsert memory entry")?;

        for alias in &entry.aliases {
            // An alias already claimed by another entry keeps its first owner.
            sqlx::query("INSERT OR IGNORE INTO memory_aliases (entry_type, alias, value) VALUES (?, ?, ?)")
                .bind(entry.entry_type.as_str())
                .bind(alias)
                .bind(&entry.value)
                .execute(&mut *tx)
                .await
                .context("Failed to insert alias")?;
        }

        tx.commit().await?;
        Ok(())
    }
}
