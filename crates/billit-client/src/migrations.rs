use rusqlite::Connection;
use rusqlite_migration::{M, Migrations};

const CREATE_BILLS_SQL: &str = include_str!("migrations/0001_create_bills.sql");
const INDEX_BILLS_DATE_SQL: &str = include_str!("migrations/0002_index_bills_date.sql");

pub const BILLS_TABLE: &str = "bills";
pub const BILLS_COLUMNS: [&str; 5] = ["id", "name", "amount", "date", "notification"];
pub const REQUIRED_INDEX_NAMES: [&str; 1] = ["idx_bills_date"];

/// `PRAGMA user_version` once every migration above has been applied.
pub const EXPECTED_USER_VERSION: i64 = 2;

fn migrations() -> Migrations<'static> {
    Migrations::new(vec![M::up(CREATE_BILLS_SQL), M::up(INDEX_BILLS_DATE_SQL)])
}

pub fn run_pending(conn: &mut Connection) -> rusqlite_migration::Result<()> {
    migrations().to_latest(conn)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::{EXPECTED_USER_VERSION, run_pending};

    #[test]
    fn run_pending_reaches_expected_user_version_and_is_repeatable() {
        let opened = Connection::open_in_memory();
        assert!(opened.is_ok());
        if let Ok(mut conn) = opened {
            assert!(run_pending(&mut conn).is_ok());
            assert!(run_pending(&mut conn).is_ok());
            let version = conn.query_row("PRAGMA user_version", [], |row| row.get::<_, i64>(0));
            assert!(matches!(version, Ok(value) if value == EXPECTED_USER_VERSION));
        }
    }
}
