//! SQLite storage backend
//!
//! Persists the term registry and triple set so an ontology ingested once
//! can be queried again without re-parsing the source file.

use super::pattern::Pattern;
use super::traits::{GraphStore, OpenStore, StorageResult};
use crate::graph::{Term, Triple};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// SQLite-backed triple store
///
/// Uses a `terms` table and a `graph` table with a unique
/// `(subject, predicate, object)` key. Reads are ordered by rowid, which is
/// the triple insertion order.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Initialize the database schema
    ///
    /// Idempotent, so an existing database file is reused as-is.
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS terms (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                def TEXT NOT NULL,
                comment TEXT,
                synonyms_json TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS graph (
                subject TEXT NOT NULL,
                predicate TEXT NOT NULL,
                object TEXT NOT NULL,
                UNIQUE (subject, predicate, object)
            );

            -- Reverse indices for closure lookups
            CREATE INDEX IF NOT EXISTS idx_graph_predicate_object
                ON graph(predicate, object);
            CREATE INDEX IF NOT EXISTS idx_graph_predicate_subject
                ON graph(predicate, subject);
            "#,
        )?;
        Ok(())
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// SQL comparison for a pattern and the value to bind
    fn condition(pattern: &Pattern) -> (&'static str, String) {
        match pattern {
            Pattern::Exact(text) => ("=", text.clone()),
            Pattern::Glob(_) => ("GLOB", pattern.to_sql_glob()),
        }
    }

    /// `SELECT <wanted> FROM graph WHERE predicate ~ ?1 AND <keyed> ~ ?2`
    fn select_where(
        &self,
        wanted: &str,
        predicate: &Pattern,
        keyed: &str,
        key: &Pattern,
    ) -> StorageResult<Vec<String>> {
        let (predicate_op, predicate_value) = Self::condition(predicate);
        let (key_op, key_value) = Self::condition(key);
        let sql = format!(
            "SELECT {wanted} FROM graph WHERE predicate {predicate_op} ?1 AND {keyed} {key_op} ?2 ORDER BY rowid"
        );

        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map(params![predicate_value, key_value], |row| row.get::<_, String>(0))?;

        let mut values = Vec::new();
        for row in rows {
            values.push(row?);
        }
        Ok(values)
    }

    fn count(&self, table: &str) -> StorageResult<usize> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl OpenStore for SqliteStore {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening sqlite store");
        Self::from_connection(Connection::open(path)?)
    }

    fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }
}

impl GraphStore for SqliteStore {
    fn save_term(&mut self, term: &Term) -> StorageResult<()> {
        let synonyms = serde_json::to_string(&term.synonyms)?;
        self.conn.execute(
            r#"
            INSERT INTO terms (id, name, def, comment, synonyms_json)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                def = excluded.def,
                comment = excluded.comment,
                synonyms_json = excluded.synonyms_json
            "#,
            params![term.id, term.name, term.def, term.comment, synonyms],
        )?;
        Ok(())
    }

    fn load_term(&self, id: &str) -> StorageResult<Option<Term>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, def, comment, synonyms_json FROM terms WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, name, def, comment, synonyms_json)) = row else {
            return Ok(None);
        };
        Ok(Some(Term {
            id,
            name,
            def,
            comment,
            synonyms: serde_json::from_str(&synonyms_json)?,
        }))
    }

    fn term_count(&self) -> StorageResult<usize> {
        self.count("terms")
    }

    fn insert_triple(&mut self, triple: &Triple) -> StorageResult<bool> {
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO graph (subject, predicate, object) VALUES (?1, ?2, ?3)",
            params![triple.subject, triple.predicate, triple.object],
        )?;
        Ok(changed > 0)
    }

    fn subjects_where(&self, predicate: &Pattern, object: &Pattern) -> StorageResult<Vec<String>> {
        self.select_where("subject", predicate, "object", object)
    }

    fn objects_where(&self, predicate: &Pattern, subject: &Pattern) -> StorageResult<Vec<String>> {
        self.select_where("object", predicate, "subject", subject)
    }

    fn distinct_predicates(&self) -> StorageResult<BTreeSet<String>> {
        let mut stmt = self.conn.prepare("SELECT DISTINCT predicate FROM graph")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut predicates = BTreeSet::new();
        for row in rows {
            predicates.insert(row?);
        }
        Ok(predicates)
    }

    fn triple_count(&self) -> StorageResult<usize> {
        self.count("graph")
    }

    fn begin_batch(&mut self) -> StorageResult<()> {
        self.conn.execute_batch("BEGIN")?;
        Ok(())
    }

    fn commit_batch(&mut self) -> StorageResult<()> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    fn rollback_batch(&mut self) -> StorageResult<()> {
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }
}
