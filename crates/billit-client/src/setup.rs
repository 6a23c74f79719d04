use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info, warn};

use crate::migrations::{
    BILLS_COLUMNS, BILLS_TABLE, EXPECTED_USER_VERSION, REQUIRED_INDEX_NAMES, run_pending,
};
use crate::state::{ensure_store_directory, map_sqlite_error, resolve_store_home, store_db_path};
use crate::store::BillStore;
use crate::{ClientError, ClientResult};

const INDEX_REPAIR_SQL: &str = include_str!("migrations/0002_index_bills_date.sql");

#[derive(Debug, Clone)]
pub struct SetupContext {
    pub home: PathBuf,
    pub db_path: PathBuf,
}

/// Resolves the store home and makes sure its directory exists.
pub fn resolve_setup(home_override: Option<&Path>) -> ClientResult<SetupContext> {
    let home = resolve_store_home(home_override)?;
    ensure_store_directory(&home)?;
    let db_path = store_db_path(&home);
    debug!(home = %home.display(), db_path = %db_path.display(), "resolved bill store location");
    Ok(SetupContext { home, db_path })
}

/// Opens the session's single store handle.
pub fn open_store(home_override: Option<&Path>) -> ClientResult<BillStore> {
    let setup = resolve_setup(home_override)?;
    BillStore::open(&setup.db_path)
}

/// Brings a freshly opened connection up to the current schema and checks
/// that the `bills` table has the shape the store expects.
pub(crate) fn prepare_schema(connection: &mut Connection, db_path: &Path) -> ClientResult<()> {
    run_pending(connection).map_err(|error| map_migration_error(db_path, &error))?;
    verify_bills_table(connection, db_path)?;
    repair_indexes(connection, db_path)?;
    verify_user_version(connection, db_path)?;
    info!(db_path = %db_path.display(), "bill store schema ready");
    Ok(())
}

fn map_migration_error(db_path: &Path, error: &rusqlite_migration::Error) -> ClientError {
    match error {
        rusqlite_migration::Error::RusqliteError { query: _, err } => {
            let mapped = map_sqlite_error(db_path, err);
            if mapped.code == "store_locked"
                || mapped.code == "store_corrupt"
                || mapped.code == "store_permission_denied"
            {
                mapped
            } else {
                ClientError::migration_failed(db_path, &error.to_string())
            }
        }
        _ => ClientError::migration_failed(db_path, &error.to_string()),
    }
}

fn verify_bills_table(connection: &Connection, db_path: &Path) -> ClientResult<()> {
    if !sqlite_object_exists(connection, "table", BILLS_TABLE, db_path)? {
        return Err(ClientError::store_corrupt(db_path));
    }

    let columns = table_columns(connection, db_path)?;
    for required_column in BILLS_COLUMNS {
        if !columns.iter().any(|column| column == required_column) {
            return Err(ClientError::store_corrupt(db_path));
        }
    }

    Ok(())
}

fn repair_indexes(connection: &Connection, db_path: &Path) -> ClientResult<()> {
    for index_name in REQUIRED_INDEX_NAMES {
        if !sqlite_object_exists(connection, "index", index_name, db_path)? {
            warn!(index = index_name, "recreating missing bill store index");
            connection
                .execute_batch(INDEX_REPAIR_SQL)
                .map_err(|error| map_sqlite_error(db_path, &error))?;
        }
    }
    Ok(())
}

fn verify_user_version(connection: &Connection, db_path: &Path) -> ClientResult<()> {
    let user_version = connection
        .query_row("PRAGMA user_version", [], |row| row.get::<_, i64>(0))
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    if user_version != EXPECTED_USER_VERSION {
        return Err(ClientError::store_corrupt(db_path));
    }
    Ok(())
}

fn sqlite_object_exists(
    connection: &Connection,
    object_type: &str,
    object_name: &str,
    db_path: &Path,
) -> ClientResult<bool> {
    let exists = connection
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = ?1 AND name = ?2 LIMIT 1",
            params![object_type, object_name],
            |_row| Ok(true),
        )
        .optional()
        .map_err(|error| map_sqlite_error(db_path, &error))?
        .unwrap_or(false);

    Ok(exists)
}

fn table_columns(connection: &Connection, db_path: &Path) -> ClientResult<Vec<String>> {
    let mut statement = connection
        .prepare("PRAGMA table_info(bills)")
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let column_iter = statement
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let mut columns: Vec<String> = Vec::new();
    for row in column_iter {
        let column = row.map_err(|error| map_sqlite_error(db_path, &error))?;
        columns.push(column);
    }

    Ok(columns)
}
