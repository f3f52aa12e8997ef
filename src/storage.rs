//! Local storage for the bounty list
//!
//! Keeps the current list and a history of every saved revision in a
//! SQLite file so the list survives restarts.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::BountyResult;
use crate::listeners::{listener, Listener};
use crate::text::format_bounty_targets;
use crate::types::BountyList;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS bounty_targets (
    position INTEGER NOT NULL,
    handle TEXT NOT NULL UNIQUE,
    requirement TEXT
);
CREATE TABLE IF NOT EXISTS bounty_revisions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    saved_at TEXT NOT NULL,
    entry_count INTEGER NOT NULL,
    body TEXT NOT NULL
);
"#;

/// A previously saved list, rendered in the text format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BountyRevision {
    pub id: i64,
    pub saved_at: DateTime<Utc>,
    pub entry_count: u32,
    pub body: String,
}

pub struct BountyStorage {
    conn: Mutex<Connection>,
}

impl BountyStorage {
    pub fn new(path: impl AsRef<Path>) -> BountyResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        debug!("Opened bounty cache at {}", path.display());
        Self::with_connection(conn)
    }

    pub fn in_memory() -> BountyResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> BountyResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Replace the stored list and append a revision.
    pub fn save_list(&self, targets: &BountyList) -> BountyResult<()> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM bounty_targets", [])?;
        for (position, entry) in targets.iter().enumerate() {
            tx.execute(
                "INSERT INTO bounty_targets (position, handle, requirement) VALUES (?1, ?2, ?3)",
                params![position as i64, entry.handle, entry.requirement],
            )?;
        }
        tx.execute(
            "INSERT INTO bounty_revisions (saved_at, entry_count, body) VALUES (?1, ?2, ?3)",
            params![
                Utc::now().to_rfc3339(),
                targets.len() as i64,
                format_bounty_targets(targets),
            ],
        )?;
        tx.commit()?;

        info!("Saved {} bounty targets", targets.len());
        Ok(())
    }

    /// The last saved list, or `None` if nothing has been saved yet.
    ///
    /// A saved empty list comes back as `Some` of an empty list.
    pub fn load_list(&self) -> BountyResult<Option<BountyList>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare("SELECT handle, requirement FROM bounty_targets ORDER BY position")?;

        let list = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
            })?
            .collect::<Result<BountyList, _>>()?;

        if list.is_empty() {
            let saved: i64 =
                conn.query_row("SELECT COUNT(*) FROM bounty_revisions", [], |row| row.get(0))?;
            if saved == 0 {
                return Ok(None);
            }
        }
        Ok(Some(list))
    }

    /// Most recent revisions first.
    pub fn revisions(&self, limit: usize) -> BountyResult<Vec<BountyRevision>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, saved_at, entry_count, body
             FROM bounty_revisions ORDER BY id DESC LIMIT ?1",
        )?;

        let revisions = stmt
            .query_map(params![limit as i64], revision_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(revisions)
    }

    pub fn revision(&self, id: i64) -> BountyResult<Option<BountyRevision>> {
        let conn = self.conn.lock();
        let revision = conn
            .query_row(
                "SELECT id, saved_at, entry_count, body FROM bounty_revisions WHERE id = ?1",
                params![id],
                revision_from_row,
            )
            .optional()?;
        Ok(revision)
    }
}

/// Expects columns `id, saved_at, entry_count, body`.
fn revision_from_row(row: &Row) -> rusqlite::Result<BountyRevision> {
    let saved_at: String = row.get(1)?;
    let saved_at = DateTime::parse_from_rfc3339(&saved_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    Ok(BountyRevision {
        id: row.get(0)?,
        saved_at,
        entry_count: row.get(2)?,
        body: row.get(3)?,
    })
}

/// Listener that saves every replaced list to `storage`.
pub fn persist_listener(storage: Arc<BountyStorage>) -> Listener {
    listener(move |targets| {
        storage.save_list(targets)?;
        Ok(())
    })
}
