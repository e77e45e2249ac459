//! SQLite-backed check history
//!
//! Append-only log of checked messages per session, with the stats and
//! filtered recent-first listing the history panel shows.

use chrono::Utc;
use spamcheck_rs::classifier::Label;
use spamcheck_rs::session::HistoryEntry;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

use crate::error::Result;

/// Entries returned per listing unless the caller asks for fewer.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// One persisted history row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HistoryRecord {
    pub id: String,
    pub session_id: String,
    pub message: String,
    pub label: Label,
    pub created_at: String,
}

/// Counts shown in the history panel header.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct HistoryStats {
    pub total: i64,
    pub spam: i64,
    pub ham: i64,
}

#[derive(Clone)]
pub struct HistoryStore {
    db: SqlitePool,
}

impl HistoryStore {
    /// Open (and create if missing) the history database.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let db = SqlitePool::connect_with(options).await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS check_history (
                id TEXT PRIMARY KEY,
                session_id TEXT NOT NULL,
                message TEXT NOT NULL,
                label TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&db)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_check_history_session
            ON check_history (session_id, created_at)
            "#,
        )
        .execute(&db)
        .await?;

        Ok(Self { db })
    }

    /// Append one canonical entry for a session.
    pub async fn append(&self, session_id: &str, entry: &HistoryEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO check_history (id, session_id, message, label, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(session_id)
        .bind(&entry.message)
        .bind(entry.label.to_string())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Append a batch of migrated entries, preserving their order.
    pub async fn import(&self, session_id: &str, entries: &[HistoryEntry]) -> Result<usize> {
        for entry in entries {
            self.append(session_id, entry).await?;
        }
        Ok(entries.len())
    }

    /// Most recent entries first, optionally filtered by label.
    pub async fn recent(
        &self,
        session_id: &str,
        filter: Option<Label>,
        limit: usize,
    ) -> Result<Vec<HistoryRecord>> {
        let rows: Vec<(String, String, String, String, String)> = match filter {
            Some(label) => {
                sqlx::query_as(
                    r#"
                    SELECT id, session_id, message, label, created_at
                    FROM check_history
                    WHERE session_id = ? AND label = ?
                    ORDER BY created_at DESC, rowid DESC
                    LIMIT ?
                    "#,
                )
                .bind(session_id)
                .bind(label.to_string())
                .bind(limit as i64)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, session_id, message, label, created_at
                    FROM check_history
                    WHERE session_id = ?
                    ORDER BY created_at DESC, rowid DESC
                    LIMIT ?
                    "#,
                )
                .bind(session_id)
                .bind(limit as i64)
                .fetch_all(&self.db)
                .await?
            }
        };

        let mut records = Vec::with_capacity(rows.len());
        for (id, session_id, message, raw_label, created_at) in rows {
            // rows written by other tools may carry labels we don't know
            let Some(label) = Label::parse(&raw_label) else {
                warn!("⚠️  Skipping history row {} with label '{}'", id, raw_label);
                continue;
            };
            records.push(HistoryRecord {
                id,
                session_id,
                message,
                label,
                created_at,
            });
        }

        Ok(records)
    }

    /// Total/spam/ham counts for one session.
    pub async fn stats(&self, session_id: &str) -> Result<HistoryStats> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM check_history WHERE session_id = ?")
                .bind(session_id)
                .fetch_one(&self.db)
                .await?;

        let (spam,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM check_history WHERE session_id = ? AND label = ?")
                .bind(session_id)
                .bind(Label::Spam.to_string())
                .fetch_one(&self.db)
                .await?;

        let (ham,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM check_history WHERE session_id = ? AND label = ?")
                .bind(session_id)
                .bind(Label::Ham.to_string())
                .fetch_one(&self.db)
                .await?;

        Ok(HistoryStats { total, spam, ham })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn store() -> (TempDir, HistoryStore) {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("history.db").display());
        let store = HistoryStore::connect(&url).await.unwrap();
        (dir, store)
    }

    fn entry(message: &str, label: Label) -> HistoryEntry {
        HistoryEntry {
            message: message.to_string(),
            label,
        }
    }

    #[tokio::test]
    async fn test_append_and_stats() {
        let (_dir, store) = store().await;

        store.append("s1", &entry("spam one", Label::Spam)).await.unwrap();
        store.append("s1", &entry("spam two", Label::Spam)).await.unwrap();
        store.append("s1", &entry("ham one", Label::Ham)).await.unwrap();

        let stats = store.stats("s1").await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.spam, 2);
        assert_eq!(stats.ham, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let (_dir, store) = store().await;

        store.append("s1", &entry("for s1", Label::Spam)).await.unwrap();
        store.append("s2", &entry("for s2", Label::Ham)).await.unwrap();

        let stats = store.stats("s1").await.unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.spam, 1);

        let records = store.recent("s2", None, DEFAULT_HISTORY_LIMIT).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "for s2");
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let (_dir, store) = store().await;

        store.append("s1", &entry("oldest", Label::Ham)).await.unwrap();
        store.append("s1", &entry("middle", Label::Spam)).await.unwrap();
        store.append("s1", &entry("newest", Label::Ham)).await.unwrap();

        let records = store.recent("s1", None, DEFAULT_HISTORY_LIMIT).await.unwrap();
        let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_recent_filters_by_label() {
        let (_dir, store) = store().await;

        store.append("s1", &entry("bad", Label::Spam)).await.unwrap();
        store.append("s1", &entry("fine", Label::Ham)).await.unwrap();
        store.append("s1", &entry("worse", Label::Spam)).await.unwrap();

        let records = store
            .recent("s1", Some(Label::Spam), DEFAULT_HISTORY_LIMIT)
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.label == Label::Spam));
    }

    #[tokio::test]
    async fn test_recent_respects_limit() {
        let (_dir, store) = store().await;

        for i in 0..30 {
            store
                .append("s1", &entry(&format!("message {}", i), Label::Ham))
                .await
                .unwrap();
        }

        let records = store.recent("s1", None, DEFAULT_HISTORY_LIMIT).await.unwrap();
        assert_eq!(records.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(records[0].message, "message 29");
    }

    #[tokio::test]
    async fn test_unknown_label_rows_are_skipped() {
        let (_dir, store) = store().await;
        store.append("s1", &entry("good row", Label::Ham)).await.unwrap();

        // simulate a row written by an older tool
        sqlx::query(
            "INSERT INTO check_history (id, session_id, message, label, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind("legacy-row")
        .bind("s1")
        .bind("strange row")
        .bind("Unknown")
        .bind(Utc::now().to_rfc3339())
        .execute(&store.db)
        .await
        .unwrap();

        let records = store.recent("s1", None, DEFAULT_HISTORY_LIMIT).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "good row");
    }

    #[tokio::test]
    async fn test_import_preserves_order_and_counts() {
        let (_dir, store) = store().await;

        let entries = vec![
            entry("first", Label::Spam),
            entry("second", Label::Ham),
            entry("third", Label::Spam),
        ];
        let imported = store.import("s1", &entries).await.unwrap();
        assert_eq!(imported, 3);

        let records = store.recent("s1", None, DEFAULT_HISTORY_LIMIT).await.unwrap();
        let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["third", "second", "first"]);
    }
}
