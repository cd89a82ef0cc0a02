mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::ledger::Ledger;
use crate::models::{BudgetRecord, HistoryEntry, Theme};

/// Storage keys for the three persisted records.
pub(crate) const BUDGET_KEY: &str = "budgetData";
pub(crate) const HISTORY_KEY: &str = "history";
pub(crate) const THEME_KEY: &str = "theme";

const UPSERT_SQL: &str =
    "INSERT INTO records (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = ?2";
const DELETE_SQL: &str = "DELETE FROM records WHERE key = ?1";

fn upsert(conn: &Connection, key: &str, text: &str) -> rusqlite::Result<usize> {
    conn.execute(UPSERT_SQL, params![key, text])
}

fn delete_key(conn: &Connection, key: &str) -> rusqlite::Result<usize> {
    conn.execute(DELETE_SQL, params![key])
}

/// Key-value persistence adapter over SQLite. Each key holds one
/// JSON-serialized record.
pub(crate) struct Store {
    conn: Connection,
}

impl Store {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut store = Self { conn };
        store.migrate().context("Database migration failed")?;
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT value FROM records WHERE key = ?1",
            params![key],
            |row| row.get(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Parsed record for `key`, or `None` when the key is absent or its
    /// stored text does not parse. Malformed state resets to the default
    /// instead of failing the caller.
    pub(crate) fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        Ok(self
            .get_raw(key)?
            .and_then(|text| serde_json::from_str(&text).ok()))
    }

    pub(crate) fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        upsert(&self.conn, key, &text)?;
        Ok(())
    }

    pub(crate) fn clear(&self, key: &str) -> Result<()> {
        delete_key(&self.conn, key)?;
        Ok(())
    }

    // ── Ledger assembly and commit points ─────────────────────

    pub(crate) fn load_ledger(&self) -> Result<Ledger> {
        Ok(Ledger::new(
            self.load::<BudgetRecord>(BUDGET_KEY)?,
            self.load::<Vec<HistoryEntry>>(HISTORY_KEY)?.unwrap_or_default(),
            self.load::<Theme>(THEME_KEY)?.unwrap_or_default(),
        ))
    }

    /// Write the budget and history records in one transaction, so a
    /// crash cannot leave the two out of step. An absent budget clears
    /// its key.
    pub(crate) fn commit(&mut self, ledger: &Ledger) -> Result<()> {
        let tx = self.conn.transaction()?;
        match &ledger.budget {
            Some(budget) => {
                let text = serde_json::to_string(budget)?;
                upsert(&tx, BUDGET_KEY, &text)?;
            }
            None => {
                delete_key(&tx, BUDGET_KEY)?;
            }
        }
        let history = serde_json::to_string(&ledger.history)?;
        upsert(&tx, HISTORY_KEY, &history)?;
        tx.commit()?;
        Ok(())
    }

    /// Theme persists independently of budget and history.
    pub(crate) fn save_theme(&self, theme: Theme) -> Result<()> {
        self.save(THEME_KEY, &theme)
    }
}
