//! SQLite-backed bill storage.
//!
//! [`BillStore`] owns the only connection to the `bills` table. Writes take
//! `&mut self` and commit before returning; reads are single statements, so
//! each call observes one consistent snapshot. Share a store across threads by
//! wrapping it in a `Mutex`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use crate::bill::{Amount, BillDraft, BillRange, BillRecord, NotificationPreference};
use crate::date::{format_iso_date, month_window, parse_iso_date, week_window};
use crate::setup::prepare_schema;
use crate::state::{map_sqlite_error, open_connection};
use crate::{ClientError, ClientResult};

const SELECT_COLUMNS: &str = "SELECT id, name, amount, date, notification FROM bills";
const ORDER_BY_DUE_DATE: &str = "ORDER BY date ASC, id ASC";
const IN_MEMORY_PATH: &str = ":memory:";

#[derive(Debug)]
pub struct BillStore {
    connection: Connection,
    db_path: PathBuf,
}

/// A row exactly as stored, before decoding into typed fields.
struct StoredRow {
    id: i64,
    name: String,
    amount: String,
    date: String,
    notification: String,
}

impl BillStore {
    pub fn open(db_path: &Path) -> ClientResult<Self> {
        let mut connection = open_connection(db_path)?;
        prepare_schema(&mut connection, db_path)?;
        info!(db_path = %db_path.display(), "opened bill store");
        Ok(Self {
            connection,
            db_path: db_path.to_path_buf(),
        })
    }

    /// Throwaway store for embedding and tests; nothing reaches disk.
    pub fn open_in_memory() -> ClientResult<Self> {
        let db_path = PathBuf::from(IN_MEMORY_PATH);
        let mut connection =
            Connection::open_in_memory().map_err(|error| map_sqlite_error(&db_path, &error))?;
        prepare_schema(&mut connection, &db_path)?;
        Ok(Self {
            connection,
            db_path,
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Inserts a bill and returns the id the database assigned to it.
    pub fn create(&mut self, draft: &BillDraft) -> ClientResult<i64> {
        self.connection
            .execute(
                "INSERT INTO bills (name, amount, date, notification) VALUES (?1, ?2, ?3, ?4)",
                params![
                    draft.title,
                    draft.amount.to_string(),
                    format_iso_date(&draft.due_date),
                    draft.notification.as_label(),
                ],
            )
            .map_err(|error| self.map_error(&error))?;
        let id = self.connection.last_insert_rowid();
        debug!(bill_id = id, due_date = %draft.due_date, "created bill");
        Ok(id)
    }

    /// Replaces every field of bill `id`. Returns the number of rows touched,
    /// which is 0 when no such bill exists.
    pub fn update(&mut self, id: i64, draft: &BillDraft) -> ClientResult<usize> {
        let affected = self
            .connection
            .execute(
                "UPDATE bills SET name = ?1, amount = ?2, date = ?3, notification = ?4 WHERE id = ?5",
                params![
                    draft.title,
                    draft.amount.to_string(),
                    format_iso_date(&draft.due_date),
                    draft.notification.as_label(),
                    id,
                ],
            )
            .map_err(|error| self.map_error(&error))?;
        debug!(bill_id = id, affected, "updated bill");
        Ok(affected)
    }

    pub fn delete(&mut self, id: i64) -> ClientResult<usize> {
        let affected = self
            .connection
            .execute("DELETE FROM bills WHERE id = ?1", params![id])
            .map_err(|error| self.map_error(&error))?;
        debug!(bill_id = id, affected, "deleted bill");
        Ok(affected)
    }

    pub fn delete_all(&mut self) -> ClientResult<usize> {
        let affected = self
            .connection
            .execute("DELETE FROM bills", [])
            .map_err(|error| self.map_error(&error))?;
        info!(affected, "cleared bill store");
        Ok(affected)
    }

    pub fn get(&self, id: i64) -> ClientResult<Option<BillRecord>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let stored = self
            .connection
            .query_row(&sql, params![id], read_stored_row)
            .optional()
            .map_err(|error| self.map_error(&error))?;
        stored.map(|row| self.decode(row)).transpose()
    }

    /// Every bill, earliest due date first.
    pub fn get_all(&self) -> ClientResult<Vec<BillRecord>> {
        let sql = format!("{SELECT_COLUMNS} {ORDER_BY_DUE_DATE}");
        self.query_bills(&sql, params![])
    }

    /// Bills due in `[start, end]`, both ends inclusive, earliest first.
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> ClientResult<Vec<BillRecord>> {
        let sql = format!("{SELECT_COLUMNS} WHERE date BETWEEN ?1 AND ?2 {ORDER_BY_DUE_DATE}");
        self.query_bills(
            &sql,
            params![format_iso_date(&start), format_iso_date(&end)],
        )
    }

    pub fn get_due_within_week(&self, today: NaiveDate) -> ClientResult<Vec<BillRecord>> {
        let (start, end) = week_window(today);
        self.get_range(start, end)
    }

    pub fn get_due_within_month(&self, today: NaiveDate) -> ClientResult<Vec<BillRecord>> {
        let (start, end) = month_window(today);
        self.get_range(start, end)
    }

    pub fn get_for(&self, range: BillRange, today: NaiveDate) -> ClientResult<Vec<BillRecord>> {
        match range {
            BillRange::All => self.get_all(),
            BillRange::ThisWeek => self.get_due_within_week(today),
            BillRange::ThisMonth => self.get_due_within_month(today),
        }
    }

    pub fn count(&self) -> ClientResult<u64> {
        let count = self
            .connection
            .query_row("SELECT COUNT(*) FROM bills", [], |row| row.get::<_, i64>(0))
            .map_err(|error| self.map_error(&error))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Bill titles in due-date order.
    pub fn titles(&self) -> ClientResult<Vec<String>> {
        let sql = format!("SELECT name FROM bills {ORDER_BY_DUE_DATE}");
        let mut statement = self
            .connection
            .prepare(&sql)
            .map_err(|error| self.map_error(&error))?;
        let rows_iter = statement
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|error| self.map_error(&error))?;

        let mut titles = Vec::new();
        for row in rows_iter {
            titles.push(row.map_err(|error| self.map_error(&error))?);
        }
        Ok(titles)
    }

    fn query_bills(
        &self,
        sql: &str,
        query_params: impl rusqlite::Params,
    ) -> ClientResult<Vec<BillRecord>> {
        let mut statement = self
            .connection
            .prepare(sql)
            .map_err(|error| self.map_error(&error))?;
        let rows_iter = statement
            .query_map(query_params, read_stored_row)
            .map_err(|error| self.map_error(&error))?;

        let mut bills = Vec::new();
        for row in rows_iter {
            let stored = row.map_err(|error| self.map_error(&error))?;
            bills.push(self.decode(stored)?);
        }
        Ok(bills)
    }

    fn decode(&self, row: StoredRow) -> ClientResult<BillRecord> {
        let amount = Amount::parse(&row.amount).ok_or_else(|| {
            ClientError::store_row_corrupt(&self.db_path, row.id, "amount is not a number")
        })?;
        let due_date = parse_iso_date(&row.date).ok_or_else(|| {
            ClientError::store_row_corrupt(&self.db_path, row.id, "date is not YYYY-MM-DD")
        })?;
        let notification = NotificationPreference::from_label(&row.notification).ok_or_else(|| {
            ClientError::store_row_corrupt(&self.db_path, row.id, "unknown notification choice")
        })?;

        Ok(BillRecord {
            id: row.id,
            title: row.name,
            amount,
            due_date,
            notification,
        })
    }

    fn map_error(&self, error: &rusqlite::Error) -> ClientError {
        map_sqlite_error(&self.db_path, error)
    }
}

fn read_stored_row(row: &Row<'_>) -> rusqlite::Result<StoredRow> {
    Ok(StoredRow {
        id: row.get(0)?,
        name: row.get(1)?,
        amount: row.get(2)?,
        date: row.get(3)?,
        notification: row.get(4)?,
    })
}
