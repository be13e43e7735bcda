//! Display implementation for kayel application messages.
//!
//! Central formatting point for all user-facing text. The embedding shell
//! (or the tracing subscriber it installs) receives fully rendered strings;
//! no other module formats message text on its own.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === STORE MESSAGES ===
            Message::StoreReady => "Store opened successfully".to_string(),
            Message::StoreSchemaCreated(version) => format!("Store schema created at version {}", version),

            // === GROUP MESSAGES ===
            Message::GroupCreated(name) => format!("Group '{}' created", name),
            Message::GroupDeleted(id) => format!("Group {} deleted", id),
            Message::GroupCascade(id, count) => format!("Removed {} student(s) from group {}", count, id),

            // === STUDENT MESSAGES ===
            Message::StudentAdded(name) => format!("Student '{}' added", name),
            Message::StudentDeleted(id) => format!("Student {} deleted", id),
            Message::SeanceAdjusted { student_id, delta, seance } => {
                format!("Student {} seance adjusted by {} to {}", student_id, delta, seance)
            }

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceMarked(student_id, date) => format!("Attendance marked for student {} on {}", student_id, date),
            Message::CycleCompleted { total, absent, paid } => {
                format!("Attendance cycle completed: {} student(s), {} absent, {} paid", total, absent, paid)
            }

            // === BACKUP MESSAGES ===
            Message::DataExported(groups, students) => format!("Exported {} group(s) and {} student(s)", groups, students),
            Message::DataImported { groups, students, skipped } => {
                format!("Imported {} group(s) and {} student(s), {} skipped", groups, students, skipped)
            }
            Message::ImportStudentSkipped(name, group_id) => {
                format!("Skipped student '{}': group {} is not part of the backup", name, group_id)
            }
            Message::AllDataCleared => "All collections cleared".to_string(),
        };

        write!(f, "{}", text)
    }
}
