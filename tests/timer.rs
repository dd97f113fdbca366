#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, Timelike};
    use stempel::db::calc_cache::{CalcCache, CalcCacheEntry};
    use stempel::db::events::Events;
    use stempel::libs::event::{Event, EventKind};
    use stempel::libs::timer::Timer;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TimerTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TimerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TimerTestContext { _temp_dir: temp_dir }
        }
    }

    fn ts(time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap()
    }

    fn day(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    fn timer() -> Timer {
        Timer::new(Events::new().unwrap(), CalcCache::new().unwrap())
    }

    fn cache_row(date: &str) -> CalcCacheEntry {
        CalcCacheEntry {
            day: day(date),
            worked_minutes: 480,
            target_minutes: 480,
        }
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_clock_in_and_out_transitions(_ctx: &mut TimerTestContext) {
        let mut timer = timer();
        assert!(!timer.clocked_in().unwrap());
        assert!(timer.open_clock_in().unwrap().is_none());

        let clock_in = timer.clock_in(ts("2025-06-02 09:00"), Some(3), Some("onsite".to_string())).unwrap().unwrap();
        assert!(timer.clocked_in().unwrap());
        assert_eq!(timer.open_clock_in().unwrap().unwrap().id, clock_in.id);
        assert_eq!(clock_in.task_id, Some(3));

        let clock_out = timer.clock_out(ts("2025-06-02 17:00")).unwrap().unwrap();
        assert_eq!(clock_out.kind, EventKind::Out);
        assert!(!timer.clocked_in().unwrap());
        assert!(timer.open_clock_in().unwrap().is_none());
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_clock_in_while_open_writes_nothing(_ctx: &mut TimerTestContext) {
        let mut timer = timer();
        timer.clock_in(ts("2025-06-02 09:00"), None, None).unwrap().unwrap();

        assert!(timer.clock_in(ts("2025-06-02 10:00"), None, None).unwrap().is_none());
        assert_eq!(Events::new().unwrap().all().unwrap().len(), 1);
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_clock_out_while_closed_writes_nothing(_ctx: &mut TimerTestContext) {
        let mut timer = timer();
        assert!(timer.clock_out(ts("2025-06-02 17:00")).unwrap().is_none());
        assert!(Events::new().unwrap().all().unwrap().is_empty());
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_flex_never_changes_clock_state(_ctx: &mut TimerTestContext) {
        let mut timer = timer();

        timer.record_flex(ts("2025-06-02 08:00"), -60).unwrap();
        assert!(!timer.clocked_in().unwrap());

        timer.clock_in(ts("2025-06-02 09:00"), None, None).unwrap().unwrap();
        let flex = timer.record_flex(ts("2025-06-02 10:00"), 30).unwrap();
        assert!(timer.clocked_in().unwrap());
        assert_eq!(timer.latest_event().unwrap().unwrap().id, flex.id);
        assert_eq!(flex.flex_minutes, Some(30));
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_timestamps_truncate_to_whole_seconds(_ctx: &mut TimerTestContext) {
        let mut timer = timer();
        let noisy = day("2025-06-02").and_hms_nano_opt(9, 0, 12, 345_678_901).unwrap();

        let event = timer.clock_in(noisy, None, None).unwrap().unwrap();
        assert_eq!(event.timestamp.nanosecond(), 0);
        assert_eq!(event.timestamp, day("2025-06-02").and_hms_opt(9, 0, 12).unwrap());

        let stored = Events::new().unwrap().get(event.id).unwrap().unwrap();
        assert_eq!(stored.timestamp, event.timestamp);
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_insert_invalidates_cache_from_its_day(_ctx: &mut TimerTestContext) {
        let mut cache = CalcCache::new().unwrap();
        cache.put(&cache_row("2025-06-02")).unwrap();
        cache.put(&cache_row("2025-06-03")).unwrap();
        cache.put(&cache_row("2025-06-04")).unwrap();

        let mut timer = timer();
        timer.clock_in(ts("2025-06-03 09:00"), None, None).unwrap().unwrap();

        assert!(cache.get(day("2025-06-02")).unwrap().is_some());
        assert!(cache.get(day("2025-06-03")).unwrap().is_none());
        assert!(cache.get(day("2025-06-04")).unwrap().is_none());
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_update_invalidates_from_the_earlier_day(_ctx: &mut TimerTestContext) {
        let mut timer = timer();
        let original = timer.clock_in(ts("2025-06-04 09:00"), None, None).unwrap().unwrap();

        let mut cache = CalcCache::new().unwrap();
        cache.put(&cache_row("2025-06-02")).unwrap();
        cache.put(&cache_row("2025-06-03")).unwrap();
        cache.put(&cache_row("2025-06-04")).unwrap();

        // Moving the event back two days invalidates from the new day.
        let edited = Event {
            timestamp: ts("2025-06-02 09:00"),
            ..original.clone()
        };
        let old = timer.update_event(&edited).unwrap().unwrap();
        assert_eq!(old.timestamp, ts("2025-06-04 09:00"));

        assert_eq!(cache.len().unwrap(), 0);
        assert_eq!(Events::new().unwrap().get(original.id).unwrap().unwrap().timestamp, ts("2025-06-02 09:00"));
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_update_unknown_id_is_none(_ctx: &mut TimerTestContext) {
        let mut timer = timer();
        let ghost = Event {
            id: 99,
            timestamp: ts("2025-06-02 09:00"),
            kind: EventKind::In,
            task_id: None,
            note: None,
            flex_minutes: None,
        };
        assert!(timer.update_event(&ghost).unwrap().is_none());
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_delete_event_returns_old_and_invalidates(_ctx: &mut TimerTestContext) {
        let mut timer = timer();
        let event = timer.clock_in(ts("2025-06-02 09:00"), None, None).unwrap().unwrap();

        let mut cache = CalcCache::new().unwrap();
        cache.put(&cache_row("2025-06-02")).unwrap();

        let deleted = timer.delete_event(event.id).unwrap().unwrap();
        assert_eq!(deleted.id, event.id);
        assert!(Events::new().unwrap().get(event.id).unwrap().is_none());
        assert_eq!(cache.len().unwrap(), 0);

        assert!(timer.delete_event(event.id).unwrap().is_none());
    }
}
