#[cfg(test)]
mod tests {
    use kayel::db::groups::Groups;
    use kayel::db::students::Students;
    use kayel::libs::attendance::{AttendanceProcessor, CycleSummary};
    use kayel::Error;
    use std::collections::HashSet;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct CycleTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for CycleTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CycleTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn seance_of(students: &mut Students, id: i32) -> i32 {
        students.get(id).unwrap().unwrap().seance
    }

    #[test_context(CycleTestContext)]
    #[test]
    fn test_cycle_applies_advance_absence_and_payment(_ctx: &mut CycleTestContext) {
        let group_id = Groups::new().unwrap().create("Evening").unwrap();
        let mut students = Students::new().unwrap();
        let a = students.create("Adam", group_id, 5).unwrap();
        let b = students.create("Bilal", group_id, 5).unwrap();
        let c = students.create("Chadi", group_id, 5).unwrap();

        let mut processor = AttendanceProcessor::new().unwrap();
        let summary = processor
            .run_cycle(group_id, &HashSet::from([a]), &HashSet::from([b]))
            .unwrap();

        assert_eq!(
            summary,
            CycleSummary {
                total: 3,
                absent: 1,
                paid: 1
            }
        );
        // Absent: advance reversed, no net change
        assert_eq!(seance_of(&mut students, a), 5);
        // Paid: advance plus a four-session payment
        assert_eq!(seance_of(&mut students, b), 2);
        // Present, no payment: plain advance
        assert_eq!(seance_of(&mut students, c), 6);
    }

    #[test_context(CycleTestContext)]
    #[test]
    fn test_student_in_both_selections_gets_both_deltas(_ctx: &mut CycleTestContext) {
        let group_id = Groups::new().unwrap().create("Evening").unwrap();
        let mut students = Students::new().unwrap();
        let id = students.create("Adam", group_id, 5).unwrap();

        let mut processor = AttendanceProcessor::new().unwrap();
        let selection = HashSet::from([id]);
        let summary = processor.run_cycle(group_id, &selection, &selection).unwrap();

        assert_eq!(summary.absent, 1);
        assert_eq!(summary.paid, 1);
        // +1 advance, -1 absence, -4 payment: net -4
        assert_eq!(seance_of(&mut students, id), 1);
    }

    #[test_context(CycleTestContext)]
    #[test]
    fn test_cycle_on_empty_group(_ctx: &mut CycleTestContext) {
        let group_id = Groups::new().unwrap().create("Empty").unwrap();

        let mut processor = AttendanceProcessor::new().unwrap();
        let summary = processor.run_cycle(group_id, &HashSet::new(), &HashSet::new()).unwrap();

        assert_eq!(
            summary,
            CycleSummary {
                total: 0,
                absent: 0,
                paid: 0
            }
        );
    }

    #[test_context(CycleTestContext)]
    #[test]
    fn test_unknown_selection_id_fails_after_advance(_ctx: &mut CycleTestContext) {
        let group_id = Groups::new().unwrap().create("Evening").unwrap();
        let mut students = Students::new().unwrap();
        let id = students.create("Adam", group_id, 5).unwrap();

        let mut processor = AttendanceProcessor::new().unwrap();
        let err = processor.run_cycle(group_id, &HashSet::from([999]), &HashSet::new()).unwrap_err();
        assert!(matches!(err, Error::StudentNotFound(999)));

        // The blanket advance had already been applied; there is no rollback
        assert_eq!(seance_of(&mut students, id), 6);
    }
}
