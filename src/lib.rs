//! # Kayel - Student Attendance & Prepaid-Session Tracking
//!
//! An offline-first data layer for managing student groups, per-student
//! seance (prepaid session) counters, attendance cycles and JSON backups.
//!
//! ## Features
//!
//! - **Group Management**: Create, list and delete student groups with cascade cleanup
//! - **Student Management**: Per-student seance counters with signed delta adjustments
//! - **Attendance Cycles**: One-call batch processing of a session (advance + absences + payments)
//! - **Attendance Records**: Per-student, per-date presence marks
//! - **Data Portability**: Full export/import of groups and students as a versioned JSON document
//!
//! Everything is persisted in a local SQLite database; there is no network,
//! no authentication and no multi-device synchronization. The presentation
//! layer is expected to live entirely outside this crate and call in through
//! the accessors in [`db`] and the workflows in [`libs`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kayel::db::{groups::Groups, students::Students};
//! use kayel::libs::attendance::AttendanceProcessor;
//! use std::collections::HashSet;
//!
//! # fn main() -> kayel::Result<()> {
//! let mut groups = Groups::new()?;
//! let group_id = groups.create("Monday 18:00")?;
//!
//! let mut students = Students::new()?;
//! students.create("Lina", group_id, 1)?;
//!
//! let mut processor = AttendanceProcessor::new()?;
//! let summary = processor.run_cycle(group_id, &HashSet::new(), &HashSet::new())?;
//! assert_eq!(summary.total, 1);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod libs;

pub use libs::error::{Error, Result};
