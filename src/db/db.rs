use crate::libs::data_storage::DataStorage;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "kayel.db";

/// Schema version stamped into the database via `PRAGMA user_version`.
///
/// A database carrying a higher version was written by a newer build and is
/// rejected instead of being silently reinterpreted.
pub const STORE_VERSION: i32 = 1;

/// Full schema, applied idempotently on every open.
///
/// Cascading deletion of a group's students is handled by the data access
/// layer rather than by foreign-key constraints, so none are declared here.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS groups (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    group_id INTEGER NOT NULL,
    seance INTEGER NOT NULL DEFAULT 1,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS attendance (
    id INTEGER PRIMARY KEY,
    student_id INTEGER NOT NULL,
    date DATE NOT NULL,
    present INTEGER NOT NULL DEFAULT 1,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_students_group_id ON students(group_id);
CREATE INDEX IF NOT EXISTS idx_students_name ON students(name);
CREATE INDEX IF NOT EXISTS idx_attendance_student_id ON attendance(student_id);
CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
";

#[derive(Debug)]
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the store, creating the database file and schema on first use.
    ///
    /// Safe to call from any number of accessors: every statement in the
    /// schema is `IF NOT EXISTS`, so concurrent opens cannot race table or
    /// index creation.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(&db_file_path).map_err(|e| Error::StorageUnavailable(format!("cannot open {}: {e}", db_file_path.display())))?;
        Self::init_schema(&conn)?;

        Ok(Db { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        let version: i32 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(|e| Error::StorageUnavailable(format!("cannot read store version: {e}")))?;
        if version > STORE_VERSION {
            return Err(Error::StorageUnavailable(format!(
                "database was created by a newer version (store version {version}, supported {STORE_VERSION})"
            )));
        }

        conn.execute_batch(SCHEMA)?;
        if version < STORE_VERSION {
            conn.pragma_update(None, "user_version", STORE_VERSION)?;
            msg_debug!(Message::StoreSchemaCreated(STORE_VERSION));
        }
        msg_debug!(Message::StoreReady);
        Ok(())
    }
}
