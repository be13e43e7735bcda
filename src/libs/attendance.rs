//! Batch attendance-cycle processing.
//!
//! One invocation covers one held session for a group: every enrolled
//! student advances one seance, absentees get the advance reversed, and
//! payments consume four sessions' worth of credit. The absence and payment
//! selections arrive as explicit ID sets; this module knows nothing about
//! how the caller collected them.

use crate::db::students::Students;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::msg_info;
use std::collections::HashSet;

/// Every student in the group advances by one session per cycle.
pub const ADVANCE_DELTA: i32 = 1;
/// An absence reverses the advance, leaving the absentee's counter unchanged.
pub const ABSENCE_DELTA: i32 = -1;
/// A payment consumes four sessions' worth of credit.
pub const PAYMENT_DELTA: i32 = -4;

/// Outcome of one attendance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummary {
    /// Students enrolled in the group when the cycle ran.
    pub total: usize,
    /// Students marked absent.
    pub absent: usize,
    /// Students marked as having paid.
    pub paid: usize,
}

pub struct AttendanceProcessor {
    students: Students,
}

impl AttendanceProcessor {
    pub fn new() -> Result<Self> {
        Ok(Self { students: Students::new()? })
    }

    /// Run one attendance cycle for a group.
    ///
    /// The blanket advance is applied to the whole roster before any
    /// selective adjustment: the selections are deltas layered on top of the
    /// advance, not replacements for it. A student appearing in both
    /// selections receives both deltas (net -4 including the advance).
    ///
    /// Per-student adjustments are independent writes with no surrounding
    /// transaction. An unknown ID in either selection fails that step with
    /// [`crate::Error::StudentNotFound`] and leaves the deltas already
    /// applied in place.
    pub fn run_cycle(&mut self, group_id: i32, absent_ids: &HashSet<i32>, paid_ids: &HashSet<i32>) -> Result<CycleSummary> {
        let roster = self.students.list_by_group(group_id)?;
        for id in roster.iter().filter_map(|s| s.id) {
            self.students.adjust_seance(id, ADVANCE_DELTA)?;
        }

        let mut absent = 0;
        for &id in absent_ids {
            self.students.adjust_seance(id, ABSENCE_DELTA)?;
            absent += 1;
        }

        let mut paid = 0;
        for &id in paid_ids {
            self.students.adjust_seance(id, PAYMENT_DELTA)?;
            paid += 1;
        }

        let summary = CycleSummary {
            total: roster.len(),
            absent,
            paid,
        };
        msg_info!(Message::CycleCompleted {
            total: summary.total,
            absent: summary.absent,
            paid: summary.paid
        });
        Ok(summary)
    }
}
