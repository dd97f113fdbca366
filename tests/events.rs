#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use stempel::db::events::{Events, NewEvent};
    use stempel::libs::event::EventKind;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EventTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for EventTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            EventTestContext { _temp_dir: temp_dir }
        }
    }

    fn ts(time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_insert_assigns_id_and_round_trips(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();

        let stored = events
            .insert(&NewEvent::clock_in(ts("2025-06-02 09:00:00"), Some(7), Some("standup".to_string())))
            .unwrap();
        assert!(stored.id > 0);
        assert_eq!(stored.kind, EventKind::In);

        let fetched = events.get(stored.id).unwrap().unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.task_id, Some(7));
        assert_eq!(fetched.note.as_deref(), Some("standup"));
        assert_eq!(fetched.flex_minutes, None);
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_get_missing_returns_none(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();
        assert!(events.get(42).unwrap().is_none());
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_order_is_timestamp_then_id(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();

        // Inserted out of chronological order, plus two rows sharing one
        // timestamp where the id must break the tie.
        let late = events.insert(&NewEvent::clock_out(ts("2025-06-02 17:00:00"))).unwrap();
        let first_at_nine = events.insert(&NewEvent::clock_in(ts("2025-06-02 09:00:00"), None, None)).unwrap();
        let second_at_nine = events.insert(&NewEvent::flex(ts("2025-06-02 09:00:00"), 30)).unwrap();

        let all = events.all().unwrap();
        let ids: Vec<i64> = all.iter().map(|event| event.id).collect();
        assert_eq!(ids, vec![first_at_nine.id, second_at_nine.id, late.id]);
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_events_on_day_filters_by_calendar_day(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();

        events.insert(&NewEvent::clock_in(ts("2025-06-02 09:00:00"), None, None)).unwrap();
        events.insert(&NewEvent::clock_out(ts("2025-06-02 17:00:00"))).unwrap();
        events.insert(&NewEvent::clock_in(ts("2025-06-03 08:30:00"), None, None)).unwrap();

        let monday = events.events_on_day(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()).unwrap();
        assert_eq!(monday.len(), 2);
        assert!(monday.iter().all(|event| event.day() == NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_events_between_includes_boundaries(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();

        events.insert(&NewEvent::clock_in(ts("2025-06-02 09:00:00"), None, None)).unwrap();
        events.insert(&NewEvent::clock_out(ts("2025-06-02 17:00:00"))).unwrap();
        events.insert(&NewEvent::clock_in(ts("2025-06-03 08:30:00"), None, None)).unwrap();

        let range = events.events_between(ts("2025-06-02 09:00:00"), ts("2025-06-02 17:00:00")).unwrap();
        assert_eq!(range.len(), 2);

        let narrower = events.events_between(ts("2025-06-02 09:00:01"), ts("2025-06-02 16:59:59")).unwrap();
        assert!(narrower.is_empty());
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_last_clocking_before_skips_flex(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();

        let clock_in = events.insert(&NewEvent::clock_in(ts("2025-06-02 09:00:00"), None, None)).unwrap();
        let flex = events.insert(&NewEvent::flex(ts("2025-06-02 10:00:00"), -60)).unwrap();

        let probe = ts("2025-06-02 11:00:00");
        assert_eq!(events.last_event_before(probe).unwrap().unwrap().id, flex.id);
        assert_eq!(events.last_clocking_before(probe).unwrap().unwrap().id, clock_in.id);

        // Strictly before: the clock-in itself is not before its own time.
        assert!(events.last_clocking_before(ts("2025-06-02 09:00:00")).unwrap().is_none());
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_first_latest_and_latest_clocking(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();
        assert!(events.first_event().unwrap().is_none());
        assert!(events.latest_event().unwrap().is_none());

        let first = events.insert(&NewEvent::clock_in(ts("2025-06-02 09:00:00"), None, None)).unwrap();
        let out = events.insert(&NewEvent::clock_out(ts("2025-06-02 17:00:00"))).unwrap();
        let flex = events.insert(&NewEvent::flex(ts("2025-06-02 18:00:00"), 15)).unwrap();

        assert_eq!(events.first_event().unwrap().unwrap().id, first.id);
        assert_eq!(events.latest_event().unwrap().unwrap().id, flex.id);
        assert_eq!(events.latest_clocking().unwrap().unwrap().id, out.id);
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_update_overwrites_fields(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();

        let mut event = events.insert(&NewEvent::clock_in(ts("2025-06-02 09:00:00"), None, None)).unwrap();
        event.timestamp = ts("2025-06-02 08:45:00");
        event.note = Some("moved".to_string());
        events.update(&event).unwrap();

        let fetched = events.get(event.id).unwrap().unwrap();
        assert_eq!(fetched.timestamp, ts("2025-06-02 08:45:00"));
        assert_eq!(fetched.note.as_deref(), Some("moved"));
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_delete_and_delete_all(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();

        let first = events.insert(&NewEvent::clock_in(ts("2025-06-02 09:00:00"), None, None)).unwrap();
        events.insert(&NewEvent::clock_out(ts("2025-06-02 17:00:00"))).unwrap();

        events.delete(first.id).unwrap();
        assert!(events.get(first.id).unwrap().is_none());
        assert_eq!(events.all().unwrap().len(), 1);

        events.delete_all().unwrap();
        assert!(events.all().unwrap().is_empty());
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_count_for_task(_ctx: &mut EventTestContext) {
        let mut events = Events::new().unwrap();

        events.insert(&NewEvent::clock_in(ts("2025-06-02 09:00:00"), Some(3), None)).unwrap();
        events.insert(&NewEvent::clock_in(ts("2025-06-03 09:00:00"), Some(3), None)).unwrap();
        events.insert(&NewEvent::clock_in(ts("2025-06-04 09:00:00"), Some(4), None)).unwrap();

        assert_eq!(events.count_for_task(3).unwrap(), 2);
        assert_eq!(events.count_for_task(4).unwrap(), 1);
        assert_eq!(events.count_for_task(99).unwrap(), 0);
    }
}
