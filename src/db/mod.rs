//! Database layer for the kayel application.
//!
//! Provides the persistence layer built on SQLite, offering type-safe
//! operations for all application entities. The schema is created once on
//! first open; there is no migration history beyond the initial version.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Connection management and idempotent schema creation
//! - **Group Management**: Uniquely named student groups with cascade deletion
//! - **Student Management**: Per-group rosters and seance counter adjustments
//! - **Attendance Records**: Per-student, per-date presence marks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kayel::db::{groups::Groups, students::Students};
//!
//! # fn main() -> kayel::Result<()> {
//! let mut groups = Groups::new()?;
//! let group_id = groups.create("Tuesday 17:00")?;
//!
//! let mut students = Students::new()?;
//! students.create("Omar", group_id, 1)?;
//! # Ok(())
//! # }
//! ```
//!
//! Each accessor opens its own connection to the shared database file.
//! SQLite serializes the actual writes; the crate performs one logical
//! operation at a time and offers no cross-operation locking, so two
//! interleaved callers adjusting the same student are last-write-wins.

/// Core database connection and initialization module.
///
/// Provides the fundamental `Db` struct that opens the SQLite database,
/// applies the schema exactly once and validates the store version.
pub mod db;

/// Attendance record operations.
///
/// Stores per-student presence marks by date. Records are append-only;
/// the portable backup format intentionally excludes them.
pub mod attendance;

/// Group management operations.
///
/// Handles creation, lookup and deletion of student groups. Deleting a
/// group cascades to every student enrolled in it.
pub mod groups;

/// Student management operations.
///
/// Handles rosters, seance counter adjustments and per-group listing with
/// Arabic-aware name ordering.
pub mod students;
