#[derive(Debug, Clone)]
pub enum Message {
    // === STORE MESSAGES ===
    StoreReady,
    StoreSchemaCreated(i32), // version

    // === GROUP MESSAGES ===
    GroupCreated(String),
    GroupDeleted(i32),
    GroupCascade(i32, usize), // group id, students removed

    // === STUDENT MESSAGES ===
    StudentAdded(String),
    StudentDeleted(i32),
    SeanceAdjusted {
        student_id: i32,
        delta: i32,
        seance: i32,
    },

    // === ATTENDANCE MESSAGES ===
    AttendanceMarked(i32, String), // student id, date
    CycleCompleted {
        total: usize,
        absent: usize,
        paid: usize,
    },

    // === BACKUP MESSAGES ===
    DataExported(usize, usize), // groups, students
    DataImported {
        groups: usize,
        students: usize,
        skipped: usize,
    },
    ImportStudentSkipped(String, i32), // name, stale group id
    AllDataCleared,
}
