//! Core library modules for the kayel application.
//!
//! Serves as the main entry point for everything above the raw database
//! accessors: business workflows, the backup codec and shared infrastructure.
//!
//! ## Features
//!
//! - **Attendance Processing**: One-call batch cycle (advance + absences + payments)
//! - **Data Portability**: Versioned JSON export/import of groups and students
//! - **Core Infrastructure**: Data directory resolution, error kinds, messaging
//! - **Name Ordering**: Arabic-aware collation for roster listings

pub mod attendance;
pub mod backup;
pub mod collation;
pub mod data_storage;
pub mod error;
pub mod messages;
