#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};
    use stempel::libs::config::{Config, DayTarget, TrackingConfig, WeekPlan};
    use stempel::libs::flexi_reset::FlexiReset;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert_eq!(config.week, WeekPlan::default());
        assert_eq!(config.flexi_reset, FlexiReset::None);
        assert!(config.tracking.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_week_plan(_ctx: &mut ConfigTestContext) {
        let week = WeekPlan::default();
        for weekday in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
            let target = week.for_weekday(weekday);
            assert!(target.workday);
            assert_eq!(target.minutes, 480);
        }
        for weekday in [Weekday::Sat, Weekday::Sun] {
            let target = week.for_weekday(weekday);
            assert!(!target.workday);
            assert_eq!(target.minutes, 0);
        }

        // 2025-06-14 is a Saturday.
        assert!(!week.target_for(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()).workday);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config.week, WeekPlan::default());
        assert_eq!(config.flexi_reset, FlexiReset::None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            week: WeekPlan {
                friday: DayTarget::working(240),
                saturday: DayTarget::working(240),
                ..WeekPlan::default()
            },
            flexi_reset: FlexiReset::Monthly,
            tracking: Some(TrackingConfig { ignore_period_minutes: 10 }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.week.friday.minutes, 240);
        assert!(read_config.week.saturday.workday);
        assert_eq!(read_config.flexi_reset, FlexiReset::Monthly);
        assert_eq!(read_config.tracking.unwrap().ignore_period_minutes, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(_ctx: &mut ConfigTestContext) {
        let path = stempel::libs::data_storage::DataStorage::new().get_path("config.json").unwrap();
        std::fs::write(&path, r#"{ "flexi_reset": "WEEKLY" }"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.flexi_reset, FlexiReset::Weekly);
        assert_eq!(config.week, WeekPlan::default());
        assert!(config.tracking.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unparsable_file_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = stempel::libs::data_storage::DataStorage::new().get_path("config.json").unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_tracking_stays_out_of_json_until_enabled(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();

        let path = stempel::libs::data_storage::DataStorage::new().get_path("config.json").unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("tracking"));
        assert!(text.contains("\"flexi_reset\": \"NONE\""));
    }

    #[test]
    fn test_default_tracking_config() {
        assert_eq!(TrackingConfig::default().ignore_period_minutes, 5);
    }
}
