#[cfg(test)]
mod tests {
    use kayel::db::groups::Groups;
    use kayel::db::students::Students;
    use kayel::Error;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // The data directory is resolved from HOME/LOCALAPPDATA, so tests in
    // this binary must not interleave their environment mutations.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct GroupTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for GroupTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            GroupTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_group_create_and_get(_ctx: &mut GroupTestContext) {
        let mut groups = Groups::new().unwrap();

        let id = groups.create("  Monday 18:00  ").unwrap();
        let group = groups.get(id).unwrap().unwrap();
        assert_eq!(group.name, "Monday 18:00");
        assert!(group.created_at.is_some());

        // Absence is a normal outcome
        assert!(groups.get(id + 1000).unwrap().is_none());
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_group_name_validation(_ctx: &mut GroupTestContext) {
        let mut groups = Groups::new().unwrap();

        assert!(matches!(groups.create("A"), Err(Error::Validation(_))));
        assert!(matches!(groups.create("   "), Err(Error::Validation(_))));
        assert!(matches!(groups.create(&"x".repeat(101)), Err(Error::Validation(_))));

        // Nothing was persisted
        assert!(groups.list().unwrap().is_empty());
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_duplicate_group_name_rejected(_ctx: &mut GroupTestContext) {
        let mut groups = Groups::new().unwrap();

        let id = groups.create("Advanced").unwrap();
        let err = groups.create("Advanced").unwrap_err();
        assert!(matches!(err, Error::DuplicateName(ref name) if name == "Advanced"));

        // The original group is unaffected
        let group = groups.get(id).unwrap().unwrap();
        assert_eq!(group.name, "Advanced");
        assert_eq!(groups.list().unwrap().len(), 1);
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_group_names_are_case_sensitive(_ctx: &mut GroupTestContext) {
        let mut groups = Groups::new().unwrap();

        groups.create("beginners").unwrap();
        groups.create("Beginners").unwrap();
        assert_eq!(groups.list().unwrap().len(), 2);
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_group_delete_cascades_to_students(_ctx: &mut GroupTestContext) {
        let mut groups = Groups::new().unwrap();
        let mut students = Students::new().unwrap();

        let doomed = groups.create("Doomed").unwrap();
        let kept = groups.create("Kept").unwrap();
        students.create("Adam", doomed, 3).unwrap();
        students.create("Lina", doomed, 5).unwrap();
        let survivor = students.create("Yara", kept, 2).unwrap();

        groups.delete(doomed).unwrap();

        assert!(groups.get(doomed).unwrap().is_none());
        assert!(students.list_by_group(doomed).unwrap().is_empty());

        // Students of other groups are untouched
        let remaining = students.list_by_group(kept).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, Some(survivor));
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_delete_absent_group_is_noop(_ctx: &mut GroupTestContext) {
        let mut groups = Groups::new().unwrap();

        groups.delete(42).unwrap();
        assert!(groups.list().unwrap().is_empty());
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_group_list_is_ordered_by_name(_ctx: &mut GroupTestContext) {
        let mut groups = Groups::new().unwrap();

        groups.create("Wednesday").unwrap();
        groups.create("Monday").unwrap();
        groups.create("Saturday").unwrap();

        let names: Vec<String> = groups.list().unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Monday", "Saturday", "Wednesday"]);
    }
}
