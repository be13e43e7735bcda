use crate::db::db::Db;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_RECORD: &str = "INSERT INTO attendance (student_id, date, present) VALUES (?1, ?2, ?3)";
const SELECT_BY_STUDENT: &str = "SELECT id, student_id, date, present, created_at FROM attendance WHERE student_id = ?1 ORDER BY date";
const SELECT_BY_DATE: &str = "SELECT id, student_id, date, present, created_at FROM attendance WHERE date = ?1";
const CLEAR_RECORDS: &str = "DELETE FROM attendance";
const SELECT_STUDENT_EXISTS: &str = "SELECT 1 FROM students WHERE id = ?1";

#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    pub id: Option<i32>,
    pub student_id: i32,
    pub date: NaiveDate,
    pub present: bool,
    pub created_at: Option<String>,
}

pub struct AttendanceRecords {
    conn: Connection,
}

impl AttendanceRecords {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Record a presence mark for a student on a given date.
    ///
    /// Records are append-only; marking the same student twice on one date
    /// produces two records.
    pub fn mark(&mut self, student_id: i32, date: NaiveDate, present: bool) -> Result<i32> {
        let exists: Option<i32> = self.conn.query_row(SELECT_STUDENT_EXISTS, params![student_id], |row| row.get(0)).optional()?;
        if exists.is_none() {
            return Err(Error::StudentNotFound(student_id));
        }

        self.conn.execute(INSERT_RECORD, params![student_id, date, present])?;
        msg_debug!(Message::AttendanceMarked(student_id, date.to_string()));
        Ok(self.conn.last_insert_rowid() as i32)
    }

    /// Get every record for one student, oldest date first.
    pub fn list_by_student(&mut self, student_id: i32) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(SELECT_BY_STUDENT)?;
        let record_iter = stmt.query_map(params![student_id], Self::map_row)?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    /// Get every record stamped with a given date.
    pub fn list_by_date(&mut self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(SELECT_BY_DATE)?;
        let record_iter = stmt.query_map(params![date], Self::map_row)?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    /// Remove all attendance records.
    pub fn clear(&mut self) -> Result<()> {
        self.conn.execute(CLEAR_RECORDS, [])?;
        Ok(())
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AttendanceRecord> {
        Ok(AttendanceRecord {
            id: row.get(0)?,
            student_id: row.get(1)?,
            date: row.get(2)?,
            present: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
