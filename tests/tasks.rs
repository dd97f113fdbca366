#[cfg(test)]
mod tests {
    use stempel::db::tasks::Tasks;
    use stempel::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_assigns_id(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let stored = tasks.insert(&Task::new("Support")).unwrap();
        assert!(stored.id.is_some());
        assert_eq!(stored.name, "Support");
        assert!(stored.active);
        assert!(!stored.is_default);

        let fetched = tasks.get(stored.id.unwrap()).unwrap().unwrap();
        assert_eq!(fetched, stored);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_with_id_preserves_id(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let restored = Task {
            id: Some(17),
            ..Task::new("Imported")
        };
        tasks.insert_with_id(&restored).unwrap();

        let fetched = tasks.get(17).unwrap().unwrap();
        assert_eq!(fetched.name, "Imported");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_filters(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let support = tasks.insert(&Task::new("Support")).unwrap();
        let mut archived = tasks.insert(&Task::new("Old project")).unwrap();
        archived.active = false;
        tasks.update(&archived).unwrap();

        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 2);

        let active = tasks.fetch(TaskFilter::Active).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Support");

        let by_id = tasks.fetch(TaskFilter::ById(support.id.unwrap())).unwrap();
        assert_eq!(by_id.len(), 1);

        let by_name = tasks.find_by_name("Old project").unwrap().unwrap();
        assert_eq!(by_name.id, archived.id);
        assert!(tasks.find_by_name("Missing").unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_orders_by_ordering_then_name(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mut last = tasks.insert(&Task::new("Alpha")).unwrap();
        last.ordering = 2;
        tasks.update(&last).unwrap();
        let mut first = tasks.insert(&Task::new("Zulu")).unwrap();
        first.ordering = 1;
        tasks.update(&first).unwrap();

        let names: Vec<String> = tasks.fetch(TaskFilter::All).unwrap().into_iter().map(|task| task.name).collect();
        assert_eq!(names, vec!["Zulu".to_string(), "Alpha".to_string()]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_default_keeps_a_single_default(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert!(tasks.default_task().unwrap().is_none());

        let office = tasks.insert(&Task::new("Office")).unwrap();
        let remote = tasks.insert(&Task::new("Remote")).unwrap();

        tasks.set_default(office.id.unwrap()).unwrap();
        assert_eq!(tasks.default_task().unwrap().unwrap().id, office.id);

        tasks.set_default(remote.id.unwrap()).unwrap();
        assert_eq!(tasks.default_task().unwrap().unwrap().id, remote.id);

        let defaults = tasks.fetch(TaskFilter::All).unwrap().into_iter().filter(|task| task.is_default).count();
        assert_eq!(defaults, 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_and_delete_all(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let support = tasks.insert(&Task::new("Support")).unwrap();
        tasks.insert(&Task::new("Maintenance")).unwrap();

        tasks.delete(support.id.unwrap()).unwrap();
        assert!(tasks.get(support.id.unwrap()).unwrap().is_none());
        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 1);

        tasks.delete_all().unwrap();
        assert!(tasks.fetch(TaskFilter::All).unwrap().is_empty());
    }
}
