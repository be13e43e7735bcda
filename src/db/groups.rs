use crate::db::db::Db;
use crate::db::students::Students;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const INSERT_GROUP: &str = "INSERT INTO groups (name) VALUES (?1)";
const SELECT_ALL_GROUPS: &str = "SELECT id, name, created_at FROM groups ORDER BY name";
const SELECT_GROUP_BY_ID: &str = "SELECT id, name, created_at FROM groups WHERE id = ?1";
const DELETE_GROUP: &str = "DELETE FROM groups WHERE id = ?1";
const CLEAR_GROUPS: &str = "DELETE FROM groups";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<i32>,
    pub name: String,
    pub created_at: Option<String>,
}

pub struct Groups {
    conn: Connection,
}

impl Groups {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new group with a unique name.
    ///
    /// The name is trimmed before validation; creating a group whose name is
    /// already taken fails with [`Error::DuplicateName`] and leaves the
    /// existing group untouched.
    pub fn create(&mut self, name: &str) -> Result<i32> {
        let name = name.trim();
        let len = name.chars().count();
        if !(2..=100).contains(&len) {
            return Err(Error::Validation("group name must be 2-100 characters".to_string()));
        }

        match self.conn.execute(INSERT_GROUP, params![name]) {
            Ok(_) => {
                msg_debug!(Message::GroupCreated(name.to_string()));
                Ok(self.conn.last_insert_rowid() as i32)
            }
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
                Err(Error::DuplicateName(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get all groups, ordered by name.
    pub fn list(&mut self) -> Result<Vec<Group>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_GROUPS)?;
        let group_iter = stmt.query_map([], |row| {
            Ok(Group {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;

        let mut groups = Vec::new();
        for group in group_iter {
            groups.push(group?);
        }
        Ok(groups)
    }

    /// Get a group by ID. Absence is a normal outcome, not an error.
    pub fn get(&mut self, id: i32) -> Result<Option<Group>> {
        self.conn
            .query_row(SELECT_GROUP_BY_ID, params![id], |row| {
                Ok(Group {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Delete a group and every student enrolled in it.
    ///
    /// Students are removed one by one before the group row goes away; a
    /// failure partway through leaves the cascade partially applied (there
    /// is no cross-collection transaction). Deleting an absent group is a
    /// no-op.
    pub fn delete(&mut self, id: i32) -> Result<()> {
        let mut students = Students::new()?;
        let removed = students.delete_by_group(id)?;
        if removed > 0 {
            msg_debug!(Message::GroupCascade(id, removed));
        }

        self.conn.execute(DELETE_GROUP, params![id])?;
        msg_debug!(Message::GroupDeleted(id));
        Ok(())
    }

    /// Remove all groups.
    pub fn clear(&mut self) -> Result<()> {
        self.conn.execute(CLEAR_GROUPS, [])?;
        Ok(())
    }
}
