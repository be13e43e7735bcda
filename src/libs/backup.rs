//! Full data export/import as a portable JSON document.
//!
//! The backup document carries groups and students only; attendance records
//! are deliberately left out of the portable format. Import is destructive:
//! every collection is cleared before the document's contents are
//! re-inserted, and there is no automatic restore of the prior state if an
//! import fails partway through.
//!
//! Record IDs are not preserved across an import. Groups receive fresh
//! auto-assigned IDs, and students are re-linked through an old-ID to new-ID
//! map built during the groups pass; a student whose group is missing from
//! the document is skipped (and counted) rather than silently linked to the
//! wrong group.

use crate::db::attendance::AttendanceRecords;
use crate::db::groups::{Group, Groups};
use crate::db::students::{Student, Students};
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_success, msg_warning};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Version tag written into every exported document. A bump means the
/// document layout changed incompatibly.
pub const BACKUP_VERSION: u32 = 1;

/// Portable snapshot of all groups and students.
#[derive(Debug, Serialize, Deserialize)]
pub struct Backup {
    pub version: u32,
    pub exported_at: String,
    pub groups: Vec<Group>,
    pub students: Vec<Student>,
}

/// Counts reported by a completed import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub groups: usize,
    pub students: usize,
    /// Students dropped because their group was missing from the document.
    pub skipped: usize,
}

/// Produce a full snapshot of the store.
pub fn export_all() -> Result<Backup> {
    let groups = Groups::new()?.list()?;
    let students = Students::new()?.list()?;
    msg_debug!(Message::DataExported(groups.len(), students.len()));

    Ok(Backup {
        version: BACKUP_VERSION,
        exported_at: Local::now().to_rfc3339(),
        groups,
        students,
    })
}

/// Destructively replace the store's contents with a backup document.
///
/// The document version is checked before anything is cleared; an
/// unsupported version fails with [`Error::Validation`] and leaves the store
/// untouched. A failure after clearing leaves a partially populated store.
pub fn import_all(backup: &Backup) -> Result<ImportSummary> {
    if backup.version != BACKUP_VERSION {
        return Err(Error::Validation(format!(
            "unsupported backup version {} (supported: {BACKUP_VERSION})",
            backup.version
        )));
    }

    let mut groups = Groups::new()?;
    let mut students = Students::new()?;
    let mut attendance = AttendanceRecords::new()?;
    attendance.clear()?;
    students.clear()?;
    groups.clear()?;
    msg_debug!(Message::AllDataCleared);

    // Old-ID to new-ID map; document order decides the new IDs.
    let mut id_map: HashMap<i32, i32> = HashMap::new();
    let mut summary = ImportSummary::default();
    for group in &backup.groups {
        let new_id = groups.create(&group.name)?;
        if let Some(old_id) = group.id {
            id_map.insert(old_id, new_id);
        }
        summary.groups += 1;
    }

    for student in &backup.students {
        match id_map.get(&student.group_id) {
            Some(&group_id) => {
                students.restore(&Student {
                    group_id,
                    ..student.clone()
                })?;
                summary.students += 1;
            }
            None => {
                msg_warning!(Message::ImportStudentSkipped(student.name.clone(), student.group_id));
                summary.skipped += 1;
            }
        }
    }

    msg_success!(Message::DataImported {
        groups: summary.groups,
        students: summary.students,
        skipped: summary.skipped,
    });
    Ok(summary)
}

/// Export the store to a pretty-printed JSON file.
pub fn save_to_file(path: &Path) -> Result<()> {
    let backup = export_all()?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &backup)?;
    msg_success!(Message::DataExported(backup.groups.len(), backup.students.len()));
    Ok(())
}

/// Import the store from a JSON file produced by [`save_to_file`].
pub fn load_from_file(path: &Path) -> Result<ImportSummary> {
    let file = File::open(path)?;
    let backup: Backup = serde_json::from_reader(file)?;
    import_all(&backup)
}

/// Conventional file name for a backup taken today.
pub fn default_file_name() -> String {
    format!("kayel-backup-{}.json", Local::now().format("%Y-%m-%d"))
}
