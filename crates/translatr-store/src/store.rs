use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, params};
use translatr_types::{NewWord, WordPair};

use crate::error::Result;

const CREATE_WORDS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS words (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    source TEXT NOT NULL,
    target TEXT NOT NULL
);";

/// SQLite-backed word store.
///
/// One table, rowid ordering, no uniqueness constraint on (source, target) —
/// duplicate pairs are permitted.
#[derive(Debug)]
pub struct WordStore {
    conn: Mutex<Connection>,
}

impl WordStore {
    /// Open (or create) a store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock().expect("word store mutex poisoned");

        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
        // WAL is silently ignored for in-memory databases
        let _ = conn.execute_batch("PRAGMA journal_mode = WAL;");

        conn.execute(CREATE_WORDS_TABLE, [])?;
        tracing::debug!("word store schema initialized");
        Ok(())
    }

    /// All word pairs in natural (rowid) order. Full-table scan every call.
    pub fn list(&self) -> Result<Vec<WordPair>> {
        let conn = self.conn.lock().expect("word store mutex poisoned");
        let mut stmt = conn.prepare("SELECT id, source, target FROM words")?;
        let rows = stmt.query_map([], |row| {
            Ok(WordPair {
                id: Some(row.get(0)?),
                source: row.get(1)?,
                target: row.get(2)?,
            })
        })?;
        let mut words = Vec::new();
        for row in rows {
            words.push(row?);
        }
        Ok(words)
    }

    /// Insert a new pair and return it with the store-assigned id.
    pub fn insert(&self, word: &NewWord) -> Result<WordPair> {
        let conn = self.conn.lock().expect("word store mutex poisoned");
        conn.execute(
            "INSERT INTO words (source, target) VALUES (?1, ?2)",
            params![word.source, word.target],
        )?;
        Ok(WordPair {
            id: Some(conn.last_insert_rowid()),
            source: word.source.clone(),
            target: word.target.clone(),
        })
    }

    /// Overwrite both fields of the row matching `id`. Returns the number of
    /// rows affected; a missing id is not an error and affects zero rows.
    pub fn update(&self, id: i64, word: &NewWord) -> Result<usize> {
        let conn = self.conn.lock().expect("word store mutex poisoned");
        let affected = conn.execute(
            "UPDATE words SET source = ?1, target = ?2 WHERE id = ?3",
            params![word.source, word.target, id],
        )?;
        Ok(affected)
    }

    /// Remove the row matching `id`. Same no-existence-check semantics as
    /// `update`.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let conn = self.conn.lock().expect("word store mutex poisoned");
        let affected = conn.execute("DELETE FROM words WHERE id = ?1", params![id])?;
        Ok(affected)
    }
}
