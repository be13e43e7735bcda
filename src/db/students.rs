use crate::db::db::Db;
use crate::libs::collation;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const INSERT_STUDENT: &str = "INSERT INTO students (name, group_id, seance) VALUES (?1, ?2, ?3)";
const SELECT_ALL_STUDENTS: &str = "SELECT id, name, group_id, seance, created_at FROM students";
const SELECT_STUDENT_BY_ID: &str = "SELECT id, name, group_id, seance, created_at FROM students WHERE id = ?1";
const SELECT_STUDENTS_BY_GROUP: &str = "SELECT id, name, group_id, seance, created_at FROM students WHERE group_id = ?1";
const UPDATE_SEANCE: &str = "UPDATE students SET seance = ?2 WHERE id = ?1";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE id = ?1";
const CLEAR_STUDENTS: &str = "DELETE FROM students";
const SELECT_GROUP_EXISTS: &str = "SELECT 1 FROM groups WHERE id = ?1";

/// Creation-time bounds for the seance counter. Later adjustments are
/// unbounded in both directions.
pub const SEANCE_MIN: i32 = 1;
pub const SEANCE_MAX: i32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Option<i32>,
    pub name: String,
    pub group_id: i32,
    /// Remaining prepaid sessions. May legitimately go negative: a student
    /// can owe sessions (attended unpaid) or be in credit (paid ahead).
    pub seance: i32,
    pub created_at: Option<String>,
}

pub struct Students {
    conn: Connection,
}

impl Students {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Enroll a student into an existing group.
    ///
    /// Validates the name (trimmed, 2-100 characters) and the initial seance
    /// counter (1-100) before touching storage; a nonexistent group fails
    /// with [`Error::GroupNotFound`] and persists nothing.
    pub fn create(&mut self, name: &str, group_id: i32, seance: i32) -> Result<i32> {
        let name = name.trim();
        let len = name.chars().count();
        if !(2..=100).contains(&len) {
            return Err(Error::Validation("student name must be 2-100 characters".to_string()));
        }
        if !(SEANCE_MIN..=SEANCE_MAX).contains(&seance) {
            return Err(Error::Validation(format!("initial seance must be between {SEANCE_MIN} and {SEANCE_MAX}")));
        }
        self.ensure_group_exists(group_id)?;

        self.conn.execute(INSERT_STUDENT, params![name, group_id, seance])?;
        msg_debug!(Message::StudentAdded(name.to_string()));
        Ok(self.conn.last_insert_rowid() as i32)
    }

    /// Re-insert a student from a backup document.
    ///
    /// Backup restore must round-trip whatever counter value was exported,
    /// including values outside the creation range, so only the group
    /// reference is checked here.
    pub fn restore(&mut self, student: &Student) -> Result<i32> {
        self.ensure_group_exists(student.group_id)?;

        self.conn.execute(INSERT_STUDENT, params![student.name, student.group_id, student.seance])?;
        Ok(self.conn.last_insert_rowid() as i32)
    }

    /// Get all students.
    pub fn list(&mut self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_STUDENTS)?;
        let student_iter = stmt.query_map([], Self::map_row)?;

        let mut students = Vec::new();
        for student in student_iter {
            students.push(student?);
        }
        Ok(students)
    }

    /// Get the roster of a group in natural alphabetical order.
    ///
    /// Ordering uses Arabic-aware collation rather than byte order; see
    /// [`collation`].
    pub fn list_by_group(&mut self, group_id: i32) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(SELECT_STUDENTS_BY_GROUP)?;
        let student_iter = stmt.query_map(params![group_id], Self::map_row)?;

        let mut students = Vec::new();
        for student in student_iter {
            students.push(student?);
        }
        students.sort_by(|a, b| collation::compare(&a.name, &b.name));
        Ok(students)
    }

    /// Get a student by ID. Absence is a normal outcome, not an error.
    pub fn get(&mut self, id: i32) -> Result<Option<Student>> {
        self.conn
            .query_row(SELECT_STUDENT_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Apply a signed delta to a student's seance counter.
    ///
    /// Plain read-modify-write with no floor or ceiling; the counter going
    /// negative is accepted prepaid-session accounting. Returns the new
    /// counter value.
    pub fn adjust_seance(&mut self, id: i32, delta: i32) -> Result<i32> {
        let student = self.get(id)?.ok_or(Error::StudentNotFound(id))?;
        let seance = student.seance + delta;
        self.conn.execute(UPDATE_SEANCE, params![id, seance])?;
        msg_debug!(Message::SeanceAdjusted { student_id: id, delta, seance });
        Ok(seance)
    }

    /// Delete a student. Deleting an absent ID is a no-op.
    pub fn delete(&mut self, id: i32) -> Result<()> {
        self.conn.execute(DELETE_STUDENT, params![id])?;
        msg_debug!(Message::StudentDeleted(id));
        Ok(())
    }

    /// Delete every student enrolled in a group, one by one.
    ///
    /// Best-effort cascade: a failure partway through leaves earlier
    /// deletions in place. Returns the number of students removed.
    pub fn delete_by_group(&mut self, group_id: i32) -> Result<usize> {
        let students = self.list_by_group(group_id)?;
        let ids: Vec<i32> = students.iter().filter_map(|s| s.id).collect();
        for id in &ids {
            self.delete(*id)?;
        }
        Ok(ids.len())
    }

    /// Remove all students.
    pub fn clear(&mut self) -> Result<()> {
        self.conn.execute(CLEAR_STUDENTS, [])?;
        Ok(())
    }

    fn ensure_group_exists(&self, group_id: i32) -> Result<()> {
        let exists: Option<i32> = self.conn.query_row(SELECT_GROUP_EXISTS, params![group_id], |row| row.get(0)).optional()?;
        if exists.is_none() {
            return Err(Error::GroupNotFound(group_id));
        }
        Ok(())
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Student> {
        Ok(Student {
            id: row.get(0)?,
            name: row.get(1)?,
            group_id: row.get(2)?,
            seance: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
